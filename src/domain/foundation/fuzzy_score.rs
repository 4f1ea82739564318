//! Fuzzy score value object (1 to 5 ordinal scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Ordinal fuzzification score: 1 (worst) to 5 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum FuzzyScore {
    VeryPoor = 1,
    Poor = 2,
    Fair = 3,
    Good = 4,
    Excellent = 5,
}

impl FuzzyScore {
    /// Lowest score, also the catch-all bucket of every ladder.
    pub const LOWEST: Self = FuzzyScore::VeryPoor;

    /// Creates a FuzzyScore from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(FuzzyScore::VeryPoor),
            2 => Ok(FuzzyScore::Poor),
            3 => Ok(FuzzyScore::Fair),
            4 => Ok(FuzzyScore::Good),
            5 => Ok(FuzzyScore::Excellent),
            _ => Err(ValidationError::out_of_range(
                "fuzzy_score",
                1.0,
                5.0,
                f64::from(value),
            )),
        }
    }

    /// Creates a FuzzyScore from a raw number that must already be an
    /// integer in 1..=5.
    pub fn try_from_f64(value: f64) -> Result<Self, ValidationError> {
        if value.fract() != 0.0 || !(1.0..=5.0).contains(&value) {
            return Err(ValidationError::out_of_range("fuzzy_score", 1.0, 5.0, value));
        }
        Self::try_from_u8(value as u8)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for FuzzyScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl From<FuzzyScore> for u8 {
    fn from(score: FuzzyScore) -> Self {
        score.value()
    }
}

impl fmt::Display for FuzzyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
