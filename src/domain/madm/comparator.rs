//! Ranking Comparator - side-by-side SAW and WP ranks.

use serde::{Deserialize, Serialize};

use super::{RankingError, RankingMethod, ScoreVector};

/// Scores closer than this share a rank.
pub const SCORE_TIE_TOLERANCE: f64 = 1e-12;

/// How tied scores are ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Competition ranking: 1, 2, 2, 4.
    #[default]
    Min,
    /// Dense ranking: 1, 2, 2, 3.
    Dense,
}

/// One alternative's scores and ranks under both methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub alternative_id: String,
    pub saw_score: f64,
    pub saw_rank: usize,
    pub wp_score: f64,
    pub wp_rank: usize,
}

/// Comparison table in input order, plus the top alternative per method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    pub best_saw: String,
    pub best_wp: String,
    pub tie_policy: TiePolicy,
}

impl Comparison {
    /// Returns the row for an alternative.
    pub fn row(&self, alternative_id: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.alternative_id == alternative_id)
    }
}

/// Rank comparison functions.
pub struct RankingComparator;

impl RankingComparator {
    /// Joins SAW scores and WP V-values by alternative and ranks each.
    ///
    /// The best alternative per method is the first, in input order, holding
    /// rank 1.
    pub fn compare(
        alternative_ids: &[String],
        saw_scores: &ScoreVector,
        wp_scores: &ScoreVector,
        tie_policy: TiePolicy,
    ) -> Result<Comparison, RankingError> {
        if alternative_ids.is_empty() {
            return Err(RankingError::EmptyTable);
        }

        let saw = Self::aligned(alternative_ids, saw_scores, RankingMethod::Saw)?;
        let wp = Self::aligned(alternative_ids, wp_scores, RankingMethod::Wp)?;
        let saw_ranks = Self::rank(&saw, tie_policy);
        let wp_ranks = Self::rank(&wp, tie_policy);

        let rows: Vec<ComparisonRow> = alternative_ids
            .iter()
            .enumerate()
            .map(|(i, id)| ComparisonRow {
                alternative_id: id.clone(),
                saw_score: saw[i],
                saw_rank: saw_ranks[i],
                wp_score: wp[i],
                wp_rank: wp_ranks[i],
            })
            .collect();

        let best_saw = Self::first_ranked(&rows, |r| r.saw_rank);
        let best_wp = Self::first_ranked(&rows, |r| r.wp_rank);

        Ok(Comparison {
            rows,
            best_saw,
            best_wp,
            tie_policy,
        })
    }

    /// Ranks scores descending. The returned ranks follow input order.
    ///
    /// A score ties with the highest score of the current group when they
    /// differ by at most [`SCORE_TIE_TOLERANCE`], so groups never chain past
    /// the tolerance. The sort is stable so tied alternatives keep their
    /// input order.
    pub fn rank(scores: &[f64], tie_policy: TiePolicy) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|a, b| scores[*b].total_cmp(&scores[*a]));

        let mut ranks = vec![0; scores.len()];
        let mut leader: Option<(f64, usize)> = None;
        for (position, index) in order.into_iter().enumerate() {
            let score = scores[index];
            let rank = match leader {
                Some((lead_score, lead_rank)) if (lead_score - score).abs() <= SCORE_TIE_TOLERANCE => {
                    ranks[index] = lead_rank;
                    continue;
                }
                Some((_, lead_rank)) => match tie_policy {
                    TiePolicy::Min => position + 1,
                    TiePolicy::Dense => lead_rank + 1,
                },
                None => 1,
            };
            ranks[index] = rank;
            leader = Some((score, rank));
        }
        ranks
    }

    fn aligned(
        alternative_ids: &[String],
        scores: &ScoreVector,
        method: RankingMethod,
    ) -> Result<Vec<f64>, RankingError> {
        alternative_ids
            .iter()
            .map(|id| {
                scores.get(id).ok_or_else(|| RankingError::MissingScore {
                    alternative: id.clone(),
                    method,
                })
            })
            .collect()
    }

    fn first_ranked(rows: &[ComparisonRow], rank: impl Fn(&ComparisonRow) -> usize) -> String {
        rows.iter()
            .find(|r| rank(r) == 1)
            .map(|r| r.alternative_id.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample_saw() -> ScoreVector {
        ScoreVector::from_parts(
            &ids(&["A1", "A2", "A3", "A4", "A5"]),
            vec![0.81, 0.7825, 0.83, 0.79, 0.79],
        )
    }

    fn sample_wp() -> ScoreVector {
        ScoreVector::from_parts(
            &ids(&["A1", "A2", "A3", "A4", "A5"]),
            vec![0.2235, 0.2138, 0.1973, 0.1820, 0.1820],
        )
    }

    #[test]
    fn rank_without_ties() {
        assert_eq!(RankingComparator::rank(&[0.2, 0.9, 0.5], TiePolicy::Min), vec![3, 1, 2]);
    }

    #[test]
    fn min_policy_skips_after_ties() {
        let ranks = RankingComparator::rank(&[0.81, 0.7825, 0.83, 0.79, 0.79], TiePolicy::Min);
        assert_eq!(ranks, vec![2, 5, 1, 3, 3]);
    }

    #[test]
    fn dense_policy_does_not_skip() {
        let ranks = RankingComparator::rank(&[0.81, 0.7825, 0.83, 0.79, 0.79], TiePolicy::Dense);
        assert_eq!(ranks, vec![2, 4, 1, 3, 3]);
    }

    #[test]
    fn scores_within_tolerance_tie() {
        let ranks = RankingComparator::rank(&[0.5, 0.5 + 1e-14, 0.4], TiePolicy::Min);
        assert_eq!(ranks, vec![1, 1, 3]);
    }

    #[test]
    fn tie_group_does_not_chain_past_tolerance() {
        let scores = [0.5, 0.5 + 0.9e-12, 0.5 + 1.8e-12, 0.5 + 2.7e-12];
        assert_eq!(RankingComparator::rank(&scores, TiePolicy::Min), vec![3, 3, 1, 1]);
        assert_eq!(RankingComparator::rank(&scores, TiePolicy::Dense), vec![2, 2, 1, 1]);
    }

    #[test]
    fn all_equal_scores_share_rank_one() {
        let ranks = RankingComparator::rank(&[0.25; 4], TiePolicy::Min);
        assert_eq!(ranks, vec![1, 1, 1, 1]);
    }

    #[test]
    fn compare_sample_ranks() {
        let comparison = RankingComparator::compare(
            &ids(&["A1", "A2", "A3", "A4", "A5"]),
            &sample_saw(),
            &sample_wp(),
            TiePolicy::Min,
        )
        .unwrap();

        let saw: Vec<_> = comparison.rows.iter().map(|r| r.saw_rank).collect();
        let wp: Vec<_> = comparison.rows.iter().map(|r| r.wp_rank).collect();
        assert_eq!(saw, vec![2, 5, 1, 3, 3]);
        assert_eq!(wp, vec![1, 2, 3, 4, 4]);
        assert_eq!(comparison.best_saw, "A3");
        assert_eq!(comparison.best_wp, "A1");
        assert_eq!(comparison.row("A2").map(|r| r.saw_score), Some(0.7825));
    }

    #[test]
    fn best_is_first_in_input_order_among_ties() {
        let alternatives = ids(&["x", "y", "z"]);
        let scores = ScoreVector::from_parts(&alternatives, vec![0.3, 0.6, 0.6]);
        let comparison =
            RankingComparator::compare(&alternatives, &scores, &scores, TiePolicy::Min).unwrap();
        assert_eq!(comparison.best_saw, "y");
        assert_eq!(comparison.best_wp, "y");
    }

    #[test]
    fn missing_score_is_reported_with_method() {
        let alternatives = ids(&["A1", "A6"]);
        let result =
            RankingComparator::compare(&alternatives, &sample_saw(), &sample_wp(), TiePolicy::Min);
        assert_eq!(
            result,
            Err(RankingError::MissingScore {
                alternative: "A6".to_string(),
                method: RankingMethod::Saw,
            })
        );
    }

    #[test]
    fn empty_alternatives_is_rejected() {
        let result =
            RankingComparator::compare(&[], &sample_saw(), &sample_wp(), TiePolicy::Min);
        assert_eq!(result, Err(RankingError::EmptyTable));
    }

    #[test]
    fn comparison_is_in_input_order() {
        let alternatives = ids(&["A5", "A1"]);
        let comparison =
            RankingComparator::compare(&alternatives, &sample_saw(), &sample_wp(), TiePolicy::Dense)
                .unwrap();
        assert_eq!(comparison.rows[0].alternative_id, "A5");
        assert_eq!(comparison.rows[0].saw_rank, 2);
        assert_eq!(comparison.rows[1].saw_rank, 1);
        assert_eq!(comparison.tie_policy, TiePolicy::Dense);
    }
}
