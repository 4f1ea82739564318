//! HTTP routes for evaluation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{evaluate, get_criteria, get_sample_table, health, EvaluationHandlers};

/// Creates the evaluation router with all endpoints.
pub fn evaluation_routes(handlers: EvaluationHandlers) -> Router {
    Router::new()
        .route("/api/criteria", get(get_criteria))
        .route("/api/evaluations", post(evaluate))
        .route("/api/evaluations/sample", get(get_sample_table))
        .route("/health", get(health))
        .with_state(handlers)
}
