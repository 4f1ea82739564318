//! madm-ranker binary.
//!
//! `madm-ranker <table.json|table.yaml>` evaluates the file and writes the
//! JSON report to stdout. Without arguments it serves the HTTP API.

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use madm_ranker::adapters::{api_router, EvaluationHandlers, FileTableSource};
use madm_ranker::application::EvaluateAlternativesHandler;
use madm_ranker::config::AppConfig;
use madm_ranker::domain::criteria::CriteriaRegistry;
use madm_ranker::domain::madm::Evaluator;

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    let evaluator = Evaluator::new(CriteriaRegistry::hosting(), config.evaluation.to_options());
    let handler = Arc::new(EvaluateAlternativesHandler::new(Arc::new(evaluator)));

    let result = match std::env::args().nth(1) {
        Some(path) => evaluate_file(&handler, &path).await,
        None => serve(&config, handler).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "madm-ranker failed");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn evaluate_file(handler: &EvaluateAlternativesHandler, path: &str) -> Result<(), BoxError> {
    let source = FileTableSource::new(path);
    let report = handler.handle_source(&source).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn serve(config: &AppConfig, handler: Arc<EvaluateAlternativesHandler>) -> Result<(), BoxError> {
    let addr = config.server.socket_addr()?;
    let app = api_router(
        EvaluationHandlers::new(handler),
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "madm-ranker listening");
    axum::serve(listener, app).await?;
    Ok(())
}
