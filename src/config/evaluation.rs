//! Evaluation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::madm::{EvaluationOptions, TiePolicy, WpCostExponent, DEFAULT_MAX_ALTERNATIVES};

/// Upper bound accepted for `max_alternatives`.
pub const MAX_ALTERNATIVES_CEILING: usize = 100_000;

/// Ranking pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationConfig {
    /// Largest table accepted per evaluation
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,

    /// `min` or `dense`
    #[serde(default)]
    pub tie_policy: TiePolicy,

    /// `as_given` or `negated`
    #[serde(default)]
    pub wp_cost_exponent: WpCostExponent,
}

impl EvaluationConfig {
    /// Converts to domain evaluation options.
    pub fn to_options(&self) -> EvaluationOptions {
        EvaluationOptions {
            max_alternatives: self.max_alternatives,
            tie_policy: self.tie_policy,
            wp_cost_exponent: self.wp_cost_exponent,
        }
    }

    /// Validate evaluation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_alternatives == 0 || self.max_alternatives > MAX_ALTERNATIVES_CEILING {
            return Err(ValidationError::InvalidMaxAlternatives {
                max: MAX_ALTERNATIVES_CEILING,
            });
        }
        Ok(())
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            max_alternatives: default_max_alternatives(),
            tie_policy: TiePolicy::default(),
            wp_cost_exponent: WpCostExponent::default(),
        }
    }
}

fn default_max_alternatives() -> usize {
    DEFAULT_MAX_ALTERNATIVES
}
