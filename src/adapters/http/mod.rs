//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod evaluation;

use std::time::Duration;

use axum::Router;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use evaluation::{evaluation_routes, EvaluationHandlers};

/// Builds the full API router with request tracing and a request timeout.
pub fn api_router(handlers: EvaluationHandlers, request_timeout: Duration) -> Router {
    evaluation_routes(handlers)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
