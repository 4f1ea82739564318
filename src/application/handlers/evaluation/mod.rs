//! Evaluation handlers - run the ranking pipeline for adapters.

mod evaluate_alternatives;

pub use evaluate_alternatives::{
    EvaluateAlternativesCommand, EvaluateAlternativesHandler, EvaluationError,
};
