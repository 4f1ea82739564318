//! The ordered, immutable criteria registry.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::{Criterion, CriterionId};
use crate::domain::foundation::{ValidationError, Weight};

/// Allowed deviation of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

static HOSTING_CRITERIA: Lazy<CriteriaRegistry> = Lazy::new(|| CriteriaRegistry {
    criteria: vec![
        hosting_criterion(CriterionId::C1, "Monthly Price (C1)", 0.3),
        hosting_criterion(CriterionId::C2, "Storage Capacity (C2)", 0.2),
        hosting_criterion(CriterionId::C3, "Bandwidth (C3)", 0.2),
        hosting_criterion(CriterionId::C4, "Uptime (C4)", 0.15),
        hosting_criterion(CriterionId::C5, "Features (C5)", 0.15),
    ],
});

fn hosting_criterion(id: CriterionId, name: &str, weight: f64) -> Criterion {
    Criterion {
        id,
        name: name.to_string(),
        weight: Weight::clamped(weight),
        polarity: id.polarity(),
    }
}

/// Ordered list of exactly five criteria, read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaRegistry {
    criteria: Vec<Criterion>,
}

impl CriteriaRegistry {
    /// Builds a registry from a custom weighting of the five criteria.
    ///
    /// The criteria must be `C1..C5` in order and their weights must sum to
    /// 1 within [`WEIGHT_SUM_TOLERANCE`].
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, ValidationError> {
        if criteria.len() != CriterionId::ALL.len() {
            return Err(ValidationError::invalid_format(
                "criteria",
                format!(
                    "expected {} criteria, got {}",
                    CriterionId::ALL.len(),
                    criteria.len()
                ),
            ));
        }

        for (criterion, expected) in criteria.iter().zip(CriterionId::ALL) {
            if criterion.id != expected {
                return Err(ValidationError::invalid_format(
                    "criteria",
                    format!("expected {} at this position, got {}", expected, criterion.id),
                ));
            }
            if criterion.polarity != expected.polarity() {
                return Err(ValidationError::invalid_format(
                    "criteria",
                    format!("{} must be a {} criterion", expected, expected.polarity().label()),
                ));
            }
        }

        let sum: f64 = criteria.iter().map(|c| c.weight.value()).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::out_of_range("weight_sum", 1.0, 1.0, sum));
        }

        Ok(Self { criteria })
    }

    /// The default hosting-selection registry.
    pub fn hosting() -> Self {
        HOSTING_CRITERIA.clone()
    }

    /// Criteria in registry order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Number of criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Always false for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Criterion ids in registry order.
    pub fn ids(&self) -> Vec<CriterionId> {
        self.criteria.iter().map(|c| c.id).collect()
    }

    /// Weight vector aligned with registry order.
    pub fn weights(&self) -> Vec<f64> {
        self.criteria.iter().map(|c| c.weight.value()).collect()
    }

    /// Looks up a criterion by id.
    pub fn get(&self, id: CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    /// Resolves an input column key (criterion id or display name).
    pub fn resolve_column(&self, key: &str) -> Option<CriterionId> {
        self.criteria
            .iter()
            .find(|c| c.matches_column(key))
            .map(|c| c.id)
    }
}

impl Default for CriteriaRegistry {
    fn default() -> Self {
        Self::hosting()
    }
}
