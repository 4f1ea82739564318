//! Ranking errors.
//!
//! Every failure is detected before any partial result leaves the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::criteria::CriterionId;
use crate::domain::foundation::ErrorCode;

/// The two ranking methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMethod {
    Saw,
    Wp,
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingMethod::Saw => write!(f, "SAW"),
            RankingMethod::Wp => write!(f, "WP"),
        }
    }
}

/// Why an input row was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidRowReason {
    #[error("alternative identifier is empty")]
    EmptyAlternative,

    #[error("alternative identifier is duplicated")]
    DuplicateAlternative,

    #[error("missing value for {0}")]
    MissingValue(CriterionId),

    #[error("column '{0}' does not name a criterion")]
    UnknownColumn(String),

    #[error("more than one column supplies {0}")]
    DuplicateColumn(CriterionId),

    #[error("value for {0} is not a number")]
    NonNumericValue(CriterionId),

    #[error("value for {0} is not a finite number")]
    NonFiniteValue(CriterionId),

    #[error("{criterion} value {value} is not an integer score in 1..=5")]
    ScoreOutOfRange { criterion: CriterionId, value: f64 },
}

/// Errors raised by table validation, fuzzification, and both rankers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("Invalid row {row_index} ('{alternative}'): {reason}")]
    InvalidRow {
        row_index: usize,
        alternative: String,
        reason: InvalidRowReason,
    },

    #[error("Input table has no alternatives")]
    EmptyTable,

    #[error("Input table has {count} alternatives, limit is {limit}")]
    TooManyAlternatives { count: usize, limit: usize },

    #[error("Degenerate input: {reason}")]
    DegenerateInput {
        criterion: Option<CriterionId>,
        alternative: Option<String>,
        reason: String,
    },

    #[error("Matrix columns {actual:?} do not match criteria {expected:?}")]
    CriteriaMismatch {
        expected: Vec<CriterionId>,
        actual: Vec<CriterionId>,
    },

    #[error("No {method} score for alternative '{alternative}'")]
    MissingScore {
        alternative: String,
        method: RankingMethod,
    },
}

impl RankingError {
    pub fn invalid_row(row_index: usize, alternative: impl Into<String>, reason: InvalidRowReason) -> Self {
        RankingError::InvalidRow {
            row_index,
            alternative: alternative.into(),
            reason,
        }
    }

    pub fn degenerate(
        criterion: Option<CriterionId>,
        alternative: Option<&str>,
        reason: impl Into<String>,
    ) -> Self {
        RankingError::DegenerateInput {
            criterion,
            alternative: alternative.map(str::to_string),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::InvalidRow { .. } => ErrorCode::InvalidRow,
            RankingError::EmptyTable => ErrorCode::EmptyTable,
            RankingError::TooManyAlternatives { .. } => ErrorCode::TooManyAlternatives,
            RankingError::DegenerateInput { .. } => ErrorCode::DegenerateInput,
            RankingError::CriteriaMismatch { .. } => ErrorCode::CriteriaMismatch,
            RankingError::MissingScore { .. } => ErrorCode::MissingScore,
        }
    }

    /// Structured context for error responses.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        match self {
            RankingError::InvalidRow {
                row_index,
                alternative,
                reason,
            } => vec![
                ("row_index", row_index.to_string()),
                ("alternative", alternative.clone()),
                ("reason", reason.to_string()),
            ],
            RankingError::TooManyAlternatives { count, limit } => vec![
                ("count", count.to_string()),
                ("limit", limit.to_string()),
            ],
            RankingError::DegenerateInput {
                criterion,
                alternative,
                ..
            } => {
                let mut details = Vec::new();
                if let Some(criterion) = criterion {
                    details.push(("criterion", criterion.to_string()));
                }
                if let Some(alternative) = alternative {
                    details.push(("alternative", alternative.clone()));
                }
                details
            }
            RankingError::MissingScore { alternative, method } => vec![
                ("alternative", alternative.clone()),
                ("method", method.to_string()),
            ],
            RankingError::EmptyTable | RankingError::CriteriaMismatch { .. } => Vec::new(),
        }
    }
}
