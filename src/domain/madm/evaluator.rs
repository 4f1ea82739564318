//! Evaluator - runs validation, fuzzification, both rankers and the comparison.

use serde::Serialize;
use tracing::{debug, info};

use super::{
    AlternativeTable, Comparison, FuzzyMatrix, Fuzzifier, OutOfDomainWarning, RankingComparator,
    RankingError, RawTable, SawRanker, SawResult, TiePolicy, WpCostExponent, WpRanker, WpResult,
};
use crate::domain::criteria::CriteriaRegistry;
use crate::domain::foundation::{EvaluationId, Timestamp};

/// Default cap on alternatives per evaluation.
pub const DEFAULT_MAX_ALTERNATIVES: usize = 1000;

/// Tunables for one evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationOptions {
    pub max_alternatives: usize,
    pub tie_policy: TiePolicy,
    pub wp_cost_exponent: WpCostExponent,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
            tie_policy: TiePolicy::default(),
            wp_cost_exponent: WpCostExponent::default(),
        }
    }
}

/// Complete result of one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub evaluation_id: EvaluationId,
    pub computed_at: Timestamp,
    pub criteria: CriteriaRegistry,
    pub fuzzy_matrix: FuzzyMatrix,
    pub saw: SawResult,
    pub wp: WpResult,
    pub comparison: Comparison,
    pub warnings: Vec<OutOfDomainWarning>,
}

/// Runs the full ranking pipeline against a fixed registry.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    registry: CriteriaRegistry,
    options: EvaluationOptions,
}

impl Evaluator {
    pub fn new(registry: CriteriaRegistry, options: EvaluationOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &CriteriaRegistry {
        &self.registry
    }

    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Validates and evaluates a raw table.
    pub fn evaluate(&self, raw: &RawTable) -> Result<EvaluationReport, RankingError> {
        let table = AlternativeTable::from_raw(raw, &self.registry, self.options.max_alternatives)?;
        self.evaluate_table(&table)
    }

    /// Evaluates an already-validated table.
    pub fn evaluate_table(&self, table: &AlternativeTable) -> Result<EvaluationReport, RankingError> {
        let evaluation_id = EvaluationId::new();
        debug!(
            evaluation_id = %evaluation_id,
            alternatives = table.len(),
            "Evaluating alternatives"
        );

        let fuzzification = Fuzzifier::fuzzify(table, &self.registry)?;
        let saw = SawRanker::rank(&fuzzification.matrix, &self.registry)?;
        debug!(evaluation_id = %evaluation_id, "SAW scores computed");

        let wp = WpRanker::rank(
            &fuzzification.matrix,
            &self.registry,
            self.options.wp_cost_exponent,
        )?;
        debug!(evaluation_id = %evaluation_id, total_s = wp.total_s, "WP scores computed");

        let comparison = RankingComparator::compare(
            fuzzification.matrix.alternative_ids(),
            &saw.scores,
            &wp.vector_v,
            self.options.tie_policy,
        )?;

        info!(
            evaluation_id = %evaluation_id,
            best_saw = %comparison.best_saw,
            best_wp = %comparison.best_wp,
            warnings = fuzzification.warnings.len(),
            "Evaluation complete"
        );

        Ok(EvaluationReport {
            evaluation_id,
            computed_at: Timestamp::now(),
            criteria: self.registry.clone(),
            fuzzy_matrix: fuzzification.matrix,
            saw,
            wp,
            comparison,
            warnings: fuzzification.warnings,
        })
    }
}
