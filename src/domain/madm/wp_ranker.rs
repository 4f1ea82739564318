//! WP Ranker - Weighted Product.
//!
//! Each alternative's S-value is the product of its fuzzy cells raised to
//! the criterion weights; V-values are the S-values divided by their sum.

use serde::{Deserialize, Serialize};

use super::{FuzzyMatrix, RankingError, ScoreVector};
use crate::domain::criteria::{CriteriaRegistry, Polarity};

/// How cost criteria enter the WP product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WpCostExponent {
    /// Every criterion uses its positive weight.
    #[default]
    AsGiven,
    /// Cost criteria use the negated weight.
    Negated,
}

impl WpCostExponent {
    fn exponent(&self, weight: f64, polarity: Polarity) -> f64 {
        match (self, polarity) {
            (WpCostExponent::Negated, Polarity::Cost) => -weight,
            _ => weight,
        }
    }
}

/// S-vector, its total, and the V-vector from one WP run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WpResult {
    pub vector_s: ScoreVector,
    pub total_s: f64,
    pub vector_v: ScoreVector,
    pub cost_exponent: WpCostExponent,
}

/// Weighted Product functions.
pub struct WpRanker;

impl WpRanker {
    /// Computes S and V vectors.
    ///
    /// # Errors
    /// - Columns not matching the registry: `CriteriaMismatch`
    /// - Empty matrix: `EmptyTable`
    /// - Non-positive cost cell under a negated exponent, or a total S that
    ///   is not positive and finite: `DegenerateInput`
    pub fn rank(
        matrix: &FuzzyMatrix,
        criteria: &CriteriaRegistry,
        cost_exponent: WpCostExponent,
    ) -> Result<WpResult, RankingError> {
        matrix.ensure_aligned(criteria)?;

        let mut s_values = Vec::with_capacity(matrix.alternative_count());
        for (alternative_id, row) in matrix.iter_rows() {
            let mut product = 1.0_f64;
            for (cell, criterion) in row.iter().zip(criteria.criteria()) {
                let cell = f64::from(*cell);
                let exponent = cost_exponent.exponent(criterion.weight.value(), criterion.polarity);
                if exponent < 0.0 && cell <= 0.0 {
                    return Err(RankingError::degenerate(
                        Some(criterion.id),
                        Some(alternative_id),
                        format!(
                            "{} cell of '{}' is zero under a negative exponent",
                            criterion.id, alternative_id
                        ),
                    ));
                }
                product *= cell.powf(exponent);
            }
            s_values.push(product);
        }

        let total_s: f64 = s_values.iter().sum();
        if !(total_s.is_finite() && total_s > 0.0) {
            return Err(RankingError::degenerate(
                None,
                None,
                format!("total S of {} cannot normalize the V-vector", total_s),
            ));
        }

        let v_values = s_values.iter().map(|s| s / total_s).collect();

        Ok(WpResult {
            vector_s: ScoreVector::from_parts(matrix.alternative_ids(), s_values),
            total_s,
            vector_v: ScoreVector::from_parts(matrix.alternative_ids(), v_values),
            cost_exponent,
        })
    }
}
