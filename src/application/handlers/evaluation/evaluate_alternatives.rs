//! EvaluateAlternativesHandler - Command handler for ranking a table.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::criteria::CriteriaRegistry;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::madm::{EvaluationReport, Evaluator, RankingError, RawTable};
use crate::ports::TableSource;

/// Command to evaluate a raw table.
#[derive(Debug, Clone)]
pub struct EvaluateAlternativesCommand {
    pub table: RawTable,
}

/// Failure of an evaluation request.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The table was rejected or could not be ranked.
    #[error(transparent)]
    Ranking(#[from] RankingError),

    /// The table could not be loaded.
    #[error("Table source failed: {0}")]
    Source(#[from] DomainError),
}

impl EvaluationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvaluationError::Ranking(e) => e.code(),
            EvaluationError::Source(e) => e.code,
        }
    }
}

/// Handler for evaluating alternatives.
///
/// Holds no per-request state; a single instance serves concurrent requests.
pub struct EvaluateAlternativesHandler {
    evaluator: Arc<Evaluator>,
}

impl EvaluateAlternativesHandler {
    pub fn new(evaluator: Arc<Evaluator>) -> Self {
        Self { evaluator }
    }

    /// The registry every evaluation is ranked against.
    pub fn criteria(&self) -> &CriteriaRegistry {
        self.evaluator.registry()
    }

    /// Evaluates the table carried by the command.
    pub fn handle(&self, cmd: EvaluateAlternativesCommand) -> Result<EvaluationReport, EvaluationError> {
        let report = self.evaluator.evaluate(&cmd.table)?;
        Ok(report)
    }

    /// Loads a table from `source` and evaluates it.
    pub async fn handle_source(&self, source: &dyn TableSource) -> Result<EvaluationReport, EvaluationError> {
        debug!(source = %source.describe(), "Fetching table");
        let table = source.fetch_table().await?;
        self.handle(EvaluateAlternativesCommand { table })
    }
}
