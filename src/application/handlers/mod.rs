//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod evaluation;

pub use evaluation::{EvaluateAlternativesCommand, EvaluateAlternativesHandler, EvaluationError};
