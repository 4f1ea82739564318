//! Criterion definitions and benefit/cost polarity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ValidationError, Weight};

/// Identifier of one of the five fixed hosting criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CriterionId {
    /// Monthly price.
    C1,
    /// Storage capacity in GB.
    C2,
    /// Bandwidth in GB.
    C3,
    /// Uptime percentage.
    C4,
    /// Feature score, already on the 1..5 scale.
    C5,
}

impl CriterionId {
    /// All criteria in registry order.
    pub const ALL: [CriterionId; 5] = [
        CriterionId::C1,
        CriterionId::C2,
        CriterionId::C3,
        CriterionId::C4,
        CriterionId::C5,
    ];

    /// Returns the short code ("C1".."C5").
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionId::C1 => "C1",
            CriterionId::C2 => "C2",
            CriterionId::C3 => "C3",
            CriterionId::C4 => "C4",
            CriterionId::C5 => "C5",
        }
    }

    /// The fixed polarity of this criterion.
    pub fn polarity(&self) -> Polarity {
        match self {
            CriterionId::C1 => Polarity::Cost,
            _ => Polarity::Benefit,
        }
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CriterionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CriterionId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("criterion_id", format!("unknown criterion '{}'", s))
            })
    }
}

/// Whether higher raw values are better (benefit) or worse (cost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Benefit,
    Cost,
}

impl Polarity {
    /// Returns true if `value` earns the bucket guarded by `threshold`.
    ///
    /// Cost ladders reward values at or below the threshold, benefit ladders
    /// reward values above it (or at it, when `inclusive`).
    pub fn clears(&self, value: f64, threshold: f64, inclusive: bool) -> bool {
        match (self, inclusive) {
            (Polarity::Cost, true) => value <= threshold,
            (Polarity::Cost, false) => value < threshold,
            (Polarity::Benefit, true) => value >= threshold,
            (Polarity::Benefit, false) => value > threshold,
        }
    }

    /// SAW normalization of a single cell against its column extremes.
    ///
    /// Returns `None` when the divisor is not strictly positive.
    pub fn normalize(&self, cell: f64, column_min: f64, column_max: f64) -> Option<f64> {
        match self {
            Polarity::Benefit if column_max > 0.0 => Some(cell / column_max),
            Polarity::Cost if cell > 0.0 => Some(column_min / cell),
            _ => None,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Benefit => "benefit",
            Polarity::Cost => "cost",
        }
    }
}

/// A weighted decision criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    pub weight: Weight,
    pub polarity: Polarity,
}

impl Criterion {
    /// Creates a criterion, validating the weight.
    pub fn new(
        id: CriterionId,
        name: impl Into<String>,
        weight: f64,
        polarity: Polarity,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            weight: Weight::try_new(weight)?,
            polarity,
        })
    }

    /// Returns true if `key` names this criterion by id or display name.
    pub fn matches_column(&self, key: &str) -> bool {
        let key = key.trim();
        self.id.as_str().eq_ignore_ascii_case(key) || self.name.eq_ignore_ascii_case(key)
    }
}
