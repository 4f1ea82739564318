//! SAW Ranker - Simple Additive Weighting.

use serde::Serialize;

use super::{FuzzyMatrix, NormalizedMatrix, RankingError, ScoreVector};
use crate::domain::criteria::{CriteriaRegistry, Polarity};

/// Normalized matrix and preference scores from one SAW run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SawResult {
    pub normalized: NormalizedMatrix,
    pub scores: ScoreVector,
}

/// Simple Additive Weighting functions.
pub struct SawRanker;

impl SawRanker {
    /// Normalizes each column by polarity and scores each alternative.
    ///
    /// # Algorithm
    /// - Benefit cell: `cell / column_max`
    /// - Cost cell: `column_min / cell`
    /// - Score: Σ(weight[criterion] × normalized[criterion])
    ///
    /// # Errors
    /// - Columns not matching the registry: `CriteriaMismatch`
    /// - Empty matrix: `EmptyTable`
    /// - Zero column max (benefit) or zero cell (cost): `DegenerateInput`
    pub fn rank(matrix: &FuzzyMatrix, criteria: &CriteriaRegistry) -> Result<SawResult, RankingError> {
        matrix.ensure_aligned(criteria)?;

        let extremes: Vec<(f64, f64)> = criteria
            .criteria()
            .iter()
            .map(|c| column_extremes(matrix.column(c.id).map(|cell| f64::from(*cell))))
            .collect();

        let mut normalized_rows = Vec::with_capacity(matrix.alternative_count());
        for (alternative_id, row) in matrix.iter_rows() {
            let normalized = row
                .iter()
                .zip(criteria.criteria())
                .zip(&extremes)
                .map(|((cell, criterion), (min, max))| {
                    criterion
                        .polarity
                        .normalize(f64::from(*cell), *min, *max)
                        .ok_or_else(|| match criterion.polarity {
                            Polarity::Benefit => RankingError::degenerate(
                                Some(criterion.id),
                                None,
                                format!("column maximum of {} is zero", criterion.id),
                            ),
                            Polarity::Cost => RankingError::degenerate(
                                Some(criterion.id),
                                Some(alternative_id),
                                format!(
                                    "{} cell of '{}' is zero and cannot divide the column minimum",
                                    criterion.id, alternative_id
                                ),
                            ),
                        })
                })
                .collect::<Result<Vec<f64>, RankingError>>()?;
            normalized_rows.push(normalized);
        }

        let weights = criteria.weights();
        let scores: Vec<f64> = normalized_rows
            .iter()
            .map(|row| row.iter().zip(&weights).map(|(r, w)| r * w).sum())
            .collect();

        let normalized = NormalizedMatrix::new(
            matrix.alternative_ids().to_vec(),
            matrix.criterion_ids().to_vec(),
            normalized_rows,
        )?;
        let scores = ScoreVector::from_parts(matrix.alternative_ids(), scores);

        Ok(SawResult { normalized, scores })
    }
}

/// Returns `(min, max)` of a non-empty column.
fn column_extremes(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}
