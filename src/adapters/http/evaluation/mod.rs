//! Evaluation HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, EvaluateRequest, HealthResponse};
pub use handlers::EvaluationHandlers;
pub use routes::evaluation_routes;
