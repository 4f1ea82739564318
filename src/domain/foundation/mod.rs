//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the ranking domain.

mod errors;
mod fuzzy_score;
mod ids;
mod timestamp;
mod weight;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use fuzzy_score::FuzzyScore;
pub use ids::EvaluationId;
pub use timestamp::Timestamp;
pub use weight::Weight;
