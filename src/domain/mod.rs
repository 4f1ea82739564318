//! Domain layer containing ranking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `criteria` - The weighted criteria registry and polarity
//! - `madm` - Fuzzification, SAW and WP ranking, rank comparison

pub mod criteria;
pub mod foundation;
pub mod madm;
