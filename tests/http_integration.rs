//! Integration tests for the evaluation HTTP endpoints.
//!
//! Requests go through the full router (tracing and timeout layers included)
//! with `tower::ServiceExt::oneshot`.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use madm_ranker::adapters::{api_router, EvaluationHandlers};
use madm_ranker::application::EvaluateAlternativesHandler;
use madm_ranker::domain::criteria::CriteriaRegistry;
use madm_ranker::domain::madm::{EvaluationOptions, Evaluator};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with_cap(max_alternatives: usize) -> Router {
    let options = EvaluationOptions {
        max_alternatives,
        ..EvaluationOptions::default()
    };
    let evaluator = Evaluator::new(CriteriaRegistry::hosting(), options);
    let handler = Arc::new(EvaluateAlternativesHandler::new(Arc::new(evaluator)));
    api_router(EvaluationHandlers::new(handler), Duration::from_secs(5))
}

fn app() -> Router {
    app_with_cap(1000)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn sample_body() -> Value {
    json!({
        "rows": [
            {"alternative": "A1", "C1": 8000, "C2": 5, "C3": 100000, "C4": 99.90, "C5": 4},
            {"alternative": "A2", "C1": 10000, "C2": 1, "C3": 100000, "C4": 99.98, "C5": 3},
            {"alternative": "A3", "C1": 13000, "C2": 20, "C3": 100, "C4": 99.90, "C5": 4},
            {"alternative": "A4", "C1": 15000, "C2": 1, "C3": 100000, "C4": 99.90, "C5": 4},
            {"alternative": "A5", "C1": 15000, "C2": 1, "C3": 100000, "C4": 99.90, "C5": 4}
        ]
    })
}

// =============================================================================
// Read endpoints
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn criteria_lists_five_weighted_criteria() {
    let (status, body) = send(app(), get("/api/criteria")).await;
    assert_eq!(status, StatusCode::OK);

    let criteria = body["criteria"].as_array().unwrap();
    assert_eq!(criteria.len(), 5);
    assert_eq!(criteria[0]["id"], "C1");
    assert_eq!(criteria[0]["polarity"], "cost");
    assert_eq!(criteria[0]["weight"], 0.3);
    assert_eq!(criteria[4]["name"], "Features (C5)");
}

#[tokio::test]
async fn sample_table_round_trips_into_evaluation() {
    let (status, sample) = send(app(), get("/api/evaluations/sample")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sample["rows"].as_array().unwrap().len(), 5);

    let (status, report) = send(app(), post_json("/api/evaluations", sample)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["comparison"]["best_saw"], "A3");
    assert_eq!(report["comparison"]["best_wp"], "A1");
}

// =============================================================================
// Evaluate endpoint
// =============================================================================

#[tokio::test]
async fn evaluate_returns_full_report() {
    let (status, report) = send(app(), post_json("/api/evaluations", sample_body())).await;
    assert_eq!(status, StatusCode::OK);

    assert!(report["evaluation_id"].is_string());
    assert!(report["computed_at"].is_string());
    assert_eq!(report["fuzzy_matrix"]["rows"][0], json!([5, 4, 5, 2, 4]));
    assert_eq!(report["saw"]["scores"][2]["alternative_id"], "A3");
    assert_eq!(report["wp"]["cost_exponent"], "as_given");
    assert_eq!(report["comparison"]["rows"][3]["saw_rank"], 3);
    assert_eq!(report["comparison"]["rows"][4]["saw_rank"], 3);
    assert_eq!(report["warnings"], json!([]));
}

#[tokio::test]
async fn empty_rows_is_bad_request() {
    let (status, body) = send(app(), post_json("/api/evaluations", json!({"rows": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EMPTY_TABLE");
}

#[tokio::test]
async fn invalid_row_reports_row_context() {
    let mut body = sample_body();
    body["rows"][1]["C5"] = json!(7);

    let (status, error) = send(app(), post_json("/api/evaluations", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ROW");
    assert_eq!(error["details"]["row_index"], "1");
    assert_eq!(error["details"]["alternative"], "A2");
}

#[tokio::test]
async fn unknown_column_is_bad_request() {
    let mut body = sample_body();
    body["rows"][0]["Support"] = json!(3);

    let (status, error) = send(app(), post_json("/api/evaluations", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ROW");
}

#[tokio::test]
async fn too_many_alternatives_is_payload_too_large() {
    let (status, error) = send(app_with_cap(3), post_json("/api/evaluations", sample_body())).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(error["code"], "TOO_MANY_ALTERNATIVES");
    assert_eq!(error["details"]["limit"], "3");
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/evaluations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"rows\": ["))
        .unwrap();
    let (status, error) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "BAD_REQUEST");
    assert!(error["message"].is_string());
}

#[tokio::test]
async fn null_cell_is_invalid_row() {
    let mut body = sample_body();
    body["rows"][0]["C3"] = Value::Null;

    let (status, error) = send(app(), post_json("/api/evaluations", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ROW");
    assert_eq!(error["details"]["row_index"], "0");
    assert_eq!(error["details"]["alternative"], "A1");
    assert_eq!(error["details"]["reason"], "missing value for C3");
}

#[tokio::test]
async fn text_cell_is_invalid_row() {
    let mut body = sample_body();
    body["rows"][2]["C1"] = json!("cheap");

    let (status, error) = send(app(), post_json("/api/evaluations", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ROW");
    assert_eq!(error["details"]["row_index"], "2");
    assert_eq!(error["details"]["reason"], "value for C1 is not a number");
}
