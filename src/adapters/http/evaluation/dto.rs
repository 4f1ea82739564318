//! HTTP DTOs for evaluation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::madm::{RankingError, RawRow, RawTable};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to evaluate a table of alternatives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub rows: Vec<RawRow>,
}

impl From<EvaluateRequest> for RawTable {
    fn from(req: EvaluateRequest) -> Self {
        RawTable::new(req.rows)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&RankingError> for ErrorResponse {
    fn from(error: &RankingError) -> Self {
        let details = error.details();
        let details = (!details.is_empty()).then(|| {
            serde_json::Value::Object(
                details
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::String(v)))
                    .collect(),
            )
        });

        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            details,
        }
    }
}
