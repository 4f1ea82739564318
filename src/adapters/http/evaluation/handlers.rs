//! HTTP handlers for evaluation endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::evaluation::{
    EvaluateAlternativesCommand, EvaluateAlternativesHandler, EvaluationError,
};
use crate::domain::madm::{RankingError, RawTable};

use super::dto::{ErrorResponse, EvaluateRequest, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct EvaluationHandlers {
    evaluate_handler: Arc<EvaluateAlternativesHandler>,
}

impl EvaluationHandlers {
    pub fn new(evaluate_handler: Arc<EvaluateAlternativesHandler>) -> Self {
        Self { evaluate_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/criteria - The weighted criteria registry
pub async fn get_criteria(State(handlers): State<EvaluationHandlers>) -> Response {
    (StatusCode::OK, Json(handlers.evaluate_handler.criteria().clone())).into_response()
}

/// GET /api/evaluations/sample - The built-in five-provider table
pub async fn get_sample_table() -> Response {
    (StatusCode::OK, Json(RawTable::hosting_sample())).into_response()
}

/// POST /api/evaluations - Evaluate a table of alternatives
pub async fn evaluate(
    State(handlers): State<EvaluationHandlers>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return handle_rejection(rejection),
    };
    let cmd = EvaluateAlternativesCommand { table: req.into() };

    match handlers.evaluate_handler.handle(cmd) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => handle_evaluation_error(e),
    }
}

/// GET /health - Liveness probe
pub async fn health() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_rejection(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

fn handle_evaluation_error(error: EvaluationError) -> Response {
    match error {
        EvaluationError::Ranking(e) => {
            let status = match e {
                RankingError::TooManyAlternatives { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                RankingError::InvalidRow { .. }
                | RankingError::EmptyTable
                | RankingError::DegenerateInput { .. } => StatusCode::BAD_REQUEST,
                RankingError::CriteriaMismatch { .. } | RankingError::MissingScore { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            (status, Json(ErrorResponse::from(&e))).into_response()
        }
        EvaluationError::Source(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(e.to_string())),
        )
            .into_response(),
    }
}
