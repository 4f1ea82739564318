//! MADM Ranker - fuzzy multi-criteria ranking of hosting alternatives.
//!
//! Ranks candidate providers with Simple Additive Weighting and Weighted
//! Product over a fuzzified decision matrix, and reports both rankings side
//! by side.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
