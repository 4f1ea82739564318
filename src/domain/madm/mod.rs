//! MADM module - fuzzy SAW and WP ranking of alternatives.
//!
//! Pipeline: a [`RawTable`] is validated into an [`AlternativeTable`],
//! fuzzified into a [`FuzzyMatrix`], ranked by [`SawRanker`] and [`WpRanker`],
//! and the two rankings are joined by [`RankingComparator`]. [`Evaluator`]
//! runs all steps in order.
//!
//! Every step is a pure function of its inputs and the immutable
//! [`CriteriaRegistry`](crate::domain::criteria::CriteriaRegistry).

mod comparator;
mod errors;
mod evaluator;
mod fuzzification;
mod matrix;
mod saw_ranker;
mod table;
mod wp_ranker;

pub use comparator::{Comparison, ComparisonRow, RankingComparator, TiePolicy, SCORE_TIE_TOLERANCE};
pub use errors::{InvalidRowReason, RankingError, RankingMethod};
pub use evaluator::{EvaluationOptions, EvaluationReport, Evaluator, DEFAULT_MAX_ALTERNATIVES};
pub use fuzzification::{BucketRule, Fuzzification, Fuzzifier, OutOfDomainWarning};
pub use matrix::{AlternativeScore, DecisionMatrix, FuzzyMatrix, NormalizedMatrix, ScoreVector};
pub use saw_ranker::{SawRanker, SawResult};
pub use table::{AlternativeRow, AlternativeTable, RawCell, RawRow, RawTable};
pub use wp_ranker::{WpCostExponent, WpRanker, WpResult};
