//! Fuzzification Engine - maps raw criterion values onto the 1..5 scale.
//!
//! Every ladder maps the better raw value to the higher score regardless of
//! polarity; polarity only decides which side of a threshold counts as
//! better. The lowest bucket is a catch-all, so ladder criteria score every
//! finite value, including negative ones. Values outside the nominal domain
//! are still scored and reported as warnings.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{AlternativeTable, FuzzyMatrix, InvalidRowReason, RankingError};
use crate::domain::criteria::{CriteriaRegistry, CriterionId, Polarity};
use crate::domain::foundation::FuzzyScore;

/// Scores awarded by ladder rungs, best rung first.
const RUNG_SCORES: [FuzzyScore; 4] = [
    FuzzyScore::Excellent,
    FuzzyScore::Good,
    FuzzyScore::Fair,
    FuzzyScore::Poor,
];

/// How a criterion's raw value becomes a fuzzy score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BucketRule {
    /// Step function over four thresholds, best rung first.
    Ladder {
        polarity: Polarity,
        inclusive: bool,
        thresholds: [f64; 4],
        domain: (f64, f64),
    },
    /// The raw value already is a score in 1..=5.
    Identity,
}

impl BucketRule {
    /// The fixed rule for each hosting criterion.
    pub fn for_criterion(id: CriterionId) -> Self {
        match id {
            // Monthly price: at most 10k, 20k, 40k, 80k.
            CriterionId::C1 => BucketRule::Ladder {
                polarity: Polarity::Cost,
                inclusive: true,
                thresholds: [10_000.0, 20_000.0, 40_000.0, 80_000.0],
                domain: (0.0, f64::INFINITY),
            },
            // Storage GB: above 10, 4, 1, 0.5.
            CriterionId::C2 => BucketRule::Ladder {
                polarity: Polarity::Benefit,
                inclusive: false,
                thresholds: [10.0, 4.0, 1.0, 0.5],
                domain: (0.0, f64::INFINITY),
            },
            // Bandwidth GB: above 1000, 100, 50, 10.
            CriterionId::C3 => BucketRule::Ladder {
                polarity: Polarity::Benefit,
                inclusive: false,
                thresholds: [1000.0, 100.0, 50.0, 10.0],
                domain: (0.0, f64::INFINITY),
            },
            // Uptime %: at least 99.98, 99.95, 99.92, 99.90.
            CriterionId::C4 => BucketRule::Ladder {
                polarity: Polarity::Benefit,
                inclusive: true,
                thresholds: [99.98, 99.95, 99.92, 99.90],
                domain: (0.0, 100.0),
            },
            CriterionId::C5 => BucketRule::Identity,
        }
    }

    /// Scores a raw value.
    ///
    /// Ladders never fail. Identity fails for anything but an integer in 1..=5.
    pub fn score(&self, value: f64) -> Option<FuzzyScore> {
        match self {
            BucketRule::Ladder {
                polarity,
                inclusive,
                thresholds,
                ..
            } => Some(
                thresholds
                    .iter()
                    .zip(RUNG_SCORES)
                    .find(|(threshold, _)| polarity.clears(value, **threshold, *inclusive))
                    .map(|(_, score)| score)
                    .unwrap_or(FuzzyScore::LOWEST),
            ),
            BucketRule::Identity => FuzzyScore::try_from_f64(value).ok(),
        }
    }

    /// Returns true if `value` lies in the criterion's nominal domain.
    pub fn in_domain(&self, value: f64) -> bool {
        match self {
            BucketRule::Ladder {
                domain: (min, max), ..
            } => value >= *min && value <= *max,
            BucketRule::Identity => FuzzyScore::try_from_f64(value).is_ok(),
        }
    }
}

/// A raw value outside its criterion's nominal domain that was still scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutOfDomainWarning {
    pub alternative_id: String,
    pub criterion: CriterionId,
    pub value: f64,
    pub assigned: FuzzyScore,
}

/// Output of one fuzzification pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fuzzification {
    pub matrix: FuzzyMatrix,
    pub warnings: Vec<OutOfDomainWarning>,
}

/// Fuzzification functions.
pub struct Fuzzifier;

impl Fuzzifier {
    /// Fuzzifies every column of a validated table.
    ///
    /// Output rows follow the table, columns follow the registry.
    pub fn fuzzify(
        table: &AlternativeTable,
        registry: &CriteriaRegistry,
    ) -> Result<Fuzzification, RankingError> {
        let criterion_ids = registry.ids();
        let rules: Vec<BucketRule> = criterion_ids
            .iter()
            .copied()
            .map(BucketRule::for_criterion)
            .collect();

        let mut rows = Vec::with_capacity(table.len());
        let mut warnings = Vec::new();

        for (row_index, row) in table.rows().iter().enumerate() {
            let mut cells = Vec::with_capacity(criterion_ids.len());
            for (criterion, rule) in criterion_ids.iter().zip(&rules) {
                let value = row.value(*criterion).ok_or_else(|| {
                    RankingError::invalid_row(
                        row_index,
                        &row.id,
                        InvalidRowReason::MissingValue(*criterion),
                    )
                })?;
                let score = rule.score(value).ok_or_else(|| {
                    RankingError::invalid_row(
                        row_index,
                        &row.id,
                        InvalidRowReason::ScoreOutOfRange {
                            criterion: *criterion,
                            value,
                        },
                    )
                })?;

                if !rule.in_domain(value) {
                    warn!(
                        alternative = %row.id,
                        criterion = %criterion,
                        value,
                        assigned = score.value(),
                        "Raw value outside nominal domain"
                    );
                    warnings.push(OutOfDomainWarning {
                        alternative_id: row.id.clone(),
                        criterion: *criterion,
                        value,
                        assigned: score,
                    });
                }

                cells.push(score.value());
            }
            rows.push(cells);
        }

        let matrix = FuzzyMatrix::new(table.alternative_ids(), criterion_ids, rows)?;
        debug!(
            alternatives = matrix.alternative_count(),
            warnings = warnings.len(),
            "Fuzzified input table"
        );

        Ok(Fuzzification { matrix, warnings })
    }
}
