//! Criteria Registry - the fixed, ordered set of weighted decision criteria.
//!
//! Weight vectors and matrix columns throughout the crate are aligned
//! positionally with the registry order.

mod criterion;
mod registry;

pub use criterion::{Criterion, CriterionId, Polarity};
pub use registry::{CriteriaRegistry, WEIGHT_SUM_TOLERANCE};
