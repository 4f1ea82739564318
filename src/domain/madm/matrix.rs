//! Decision matrices and score vectors shared by both rankers.

use serde::{Deserialize, Serialize};

use super::RankingError;
use crate::domain::criteria::{CriteriaRegistry, CriterionId};

/// Alternatives × criteria grid. Rows follow input order, columns follow
/// registry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix<T> {
    alternative_ids: Vec<String>,
    criterion_ids: Vec<CriterionId>,
    rows: Vec<Vec<T>>,
}

/// Fuzzified scores, each cell in 1..=5 when produced by the fuzzifier.
pub type FuzzyMatrix = DecisionMatrix<u8>;

/// SAW-normalized ratios.
pub type NormalizedMatrix = DecisionMatrix<f64>;

impl<T> DecisionMatrix<T> {
    /// Creates a matrix, checking that it is rectangular.
    pub fn new(
        alternative_ids: Vec<String>,
        criterion_ids: Vec<CriterionId>,
        rows: Vec<Vec<T>>,
    ) -> Result<Self, RankingError> {
        if rows.len() != alternative_ids.len() {
            return Err(RankingError::degenerate(
                None,
                None,
                format!(
                    "matrix has {} rows for {} alternatives",
                    rows.len(),
                    alternative_ids.len()
                ),
            ));
        }
        if let Some((alternative, row)) = alternative_ids
            .iter()
            .zip(&rows)
            .find(|(_, row)| row.len() != criterion_ids.len())
        {
            return Err(RankingError::degenerate(
                None,
                Some(alternative),
                format!(
                    "row has {} cells for {} criteria",
                    row.len(),
                    criterion_ids.len()
                ),
            ));
        }

        Ok(Self {
            alternative_ids,
            criterion_ids,
            rows,
        })
    }

    pub fn alternative_ids(&self) -> &[String] {
        &self.alternative_ids
    }

    pub fn criterion_ids(&self) -> &[CriterionId] {
        &self.criterion_ids
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Iterates `(alternative_id, row)` pairs in input order.
    pub fn iter_rows(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.alternative_ids
            .iter()
            .map(String::as_str)
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    /// Returns the row for an alternative.
    pub fn row(&self, alternative_id: &str) -> Option<&[T]> {
        self.alternative_ids
            .iter()
            .position(|id| id == alternative_id)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
    }

    /// Returns the cell for an alternative and criterion.
    pub fn get(&self, alternative_id: &str, criterion: CriterionId) -> Option<&T> {
        let column = self.criterion_ids.iter().position(|c| *c == criterion)?;
        self.row(alternative_id)?.get(column)
    }

    /// Iterates one column top to bottom.
    pub fn column(&self, criterion: CriterionId) -> impl Iterator<Item = &T> {
        let position = self.criterion_ids.iter().position(|c| *c == criterion);
        self.rows
            .iter()
            .filter_map(move |row| position.and_then(|p| row.get(p)))
    }

    pub fn alternative_count(&self) -> usize {
        self.alternative_ids.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criterion_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternative_ids.is_empty()
    }

    /// Fails unless the columns are exactly the registry's criteria in order.
    pub fn ensure_aligned(&self, criteria: &CriteriaRegistry) -> Result<(), RankingError> {
        let expected = criteria.ids();
        if self.criterion_ids != expected {
            return Err(RankingError::CriteriaMismatch {
                expected,
                actual: self.criterion_ids.clone(),
            });
        }
        if self.is_empty() {
            return Err(RankingError::EmptyTable);
        }
        Ok(())
    }
}

/// Score of one alternative under one method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    pub alternative_id: String,
    pub score: f64,
}

/// One score per alternative, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreVector {
    entries: Vec<AlternativeScore>,
}

impl ScoreVector {
    /// Pairs alternative ids with scores positionally.
    pub fn from_parts(alternative_ids: &[String], scores: Vec<f64>) -> Self {
        Self {
            entries: alternative_ids
                .iter()
                .zip(scores)
                .map(|(id, score)| AlternativeScore {
                    alternative_id: id.clone(),
                    score,
                })
                .collect(),
        }
    }

    pub fn get(&self, alternative_id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.alternative_id == alternative_id)
            .map(|e| e.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlternativeScore> {
        self.entries.iter()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.score).collect()
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|e| e.score).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn two_by_two() -> FuzzyMatrix {
        DecisionMatrix::new(
            ids(&["A", "B"]),
            vec![CriterionId::C1, CriterionId::C2],
            vec![vec![5, 3], vec![2, 4]],
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_row_count_mismatch() {
        let result = FuzzyMatrix::new(ids(&["A", "B"]), vec![CriterionId::C1], vec![vec![1]]);
        assert!(matches!(result, Err(RankingError::DegenerateInput { .. })));
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let result = FuzzyMatrix::new(
            ids(&["A", "B"]),
            vec![CriterionId::C1, CriterionId::C2],
            vec![vec![1, 2], vec![3]],
        );
        match result {
            Err(RankingError::DegenerateInput { alternative, .. }) => {
                assert_eq!(alternative.as_deref(), Some("B"));
            }
            other => panic!("Expected DegenerateInput, got {:?}", other),
        }
    }

    #[test]
    fn get_and_column_follow_ids() {
        let matrix = two_by_two();
        assert_eq!(matrix.get("B", CriterionId::C2), Some(&4));
        assert_eq!(matrix.get("C", CriterionId::C2), None);
        assert_eq!(matrix.column(CriterionId::C1).copied().collect::<Vec<_>>(), vec![5, 2]);
        assert_eq!(matrix.column(CriterionId::C5).count(), 0);
    }

    #[test]
    fn iter_rows_pairs_ids_and_cells() {
        let matrix = two_by_two();
        let rows: Vec<_> = matrix.iter_rows().collect();
        assert_eq!(rows, vec![("A", &[5u8, 3][..]), ("B", &[2u8, 4][..])]);
    }

    #[test]
    fn ensure_aligned_detects_wrong_columns() {
        let matrix = two_by_two();
        let result = matrix.ensure_aligned(&CriteriaRegistry::hosting());
        assert!(matches!(result, Err(RankingError::CriteriaMismatch { .. })));
    }

    #[test]
    fn score_vector_keeps_input_order() {
        let scores = ScoreVector::from_parts(&ids(&["x", "y", "z"]), vec![0.5, 0.25, 0.25]);
        assert_eq!(scores.len(), 3);
        assert_eq!(scores.get("y"), Some(0.25));
        assert_eq!(scores.get("w"), None);
        assert!((scores.sum() - 1.0).abs() < f64::EPSILON);
        let order: Vec<_> = scores.iter().map(|s| s.alternative_id.as_str()).collect();
        assert_eq!(order, vec!["x", "y", "z"]);
    }

    #[test]
    fn score_vector_serializes_as_list() {
        let scores = ScoreVector::from_parts(&ids(&["A1"]), vec![0.75]);
        let json = serde_json::to_value(&scores).unwrap();
        assert_eq!(json[0]["alternative_id"], "A1");
        assert_eq!(json[0]["score"], 0.75);
    }
}
