//! Alternative Table - validated input rows for one evaluation run.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::{InvalidRowReason, RankingError};
use crate::domain::criteria::{CriteriaRegistry, CriterionId};

/// One cell as supplied by a table source.
///
/// Blank and non-numeric cells are accepted here and rejected during
/// validation, so the error carries the row they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Number(f64),
    Blank,
    NonNumeric(serde_json::Value),
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Number(value)
    }
}

/// One row as supplied by a table source: an alternative name plus raw
/// cells keyed by criterion id or display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub alternative: String,
    #[serde(flatten)]
    pub columns: BTreeMap<String, RawCell>,
}

impl RawRow {
    /// Creates a raw row from column pairs.
    pub fn new<K: Into<String>, V: Into<RawCell>>(
        alternative: impl Into<String>,
        columns: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            alternative: alternative.into(),
            columns: columns.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// An unvalidated table snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    /// The five-provider sample table, keyed by display name.
    ///
    /// Unlimited bandwidth is represented as 100000 GB.
    pub fn hosting_sample() -> Self {
        let columns = |price: f64, storage: f64, bandwidth: f64, uptime: f64, features: f64| {
            [
                ("Monthly Price (C1)", price),
                ("Storage Capacity (C2)", storage),
                ("Bandwidth (C3)", bandwidth),
                ("Uptime (C4)", uptime),
                ("Features (C5)", features),
            ]
        };

        Self::new(vec![
            RawRow::new("A1", columns(8000.0, 5.0, 100000.0, 99.90, 4.0)),
            RawRow::new("A2", columns(10000.0, 1.0, 100000.0, 99.98, 3.0)),
            RawRow::new("A3", columns(13000.0, 20.0, 100.0, 99.90, 4.0)),
            RawRow::new("A4", columns(15000.0, 1.0, 100000.0, 99.90, 4.0)),
            RawRow::new("A5", columns(15000.0, 1.0, 100000.0, 99.90, 4.0)),
        ])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A validated alternative with exactly one finite value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeRow {
    pub id: String,
    pub values: BTreeMap<CriterionId, f64>,
}

impl AlternativeRow {
    /// Returns the raw value for a criterion.
    pub fn value(&self, criterion: CriterionId) -> Option<f64> {
        self.values.get(&criterion).copied()
    }
}

/// Validated, complete input table. Rows keep their input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeTable {
    rows: Vec<AlternativeRow>,
}

impl AlternativeTable {
    /// Resolves and validates a raw table.
    ///
    /// Fails fast on the first offending row; nothing is computed for a
    /// table that does not pass.
    pub fn from_raw(
        raw: &RawTable,
        registry: &CriteriaRegistry,
        max_alternatives: usize,
    ) -> Result<Self, RankingError> {
        check_size(raw.len(), max_alternatives)?;

        let mut rows = Vec::with_capacity(raw.len());
        for (row_index, raw_row) in raw.rows.iter().enumerate() {
            let mut values = BTreeMap::new();
            let mut supplied = HashSet::new();
            for (key, cell) in &raw_row.columns {
                let invalid =
                    |reason| RankingError::invalid_row(row_index, &raw_row.alternative, reason);

                let criterion = registry
                    .resolve_column(key)
                    .ok_or_else(|| invalid(InvalidRowReason::UnknownColumn(key.clone())))?;
                if !supplied.insert(criterion) {
                    return Err(invalid(InvalidRowReason::DuplicateColumn(criterion)));
                }
                match cell {
                    RawCell::Number(value) => {
                        values.insert(criterion, *value);
                    }
                    RawCell::Blank => return Err(invalid(InvalidRowReason::MissingValue(criterion))),
                    RawCell::NonNumeric(_) => {
                        return Err(invalid(InvalidRowReason::NonNumericValue(criterion)))
                    }
                }
            }
            rows.push(AlternativeRow {
                id: raw_row.alternative.clone(),
                values,
            });
        }

        Self::new(rows, registry, max_alternatives)
    }

    /// Validates already-resolved rows.
    pub fn new(
        rows: Vec<AlternativeRow>,
        registry: &CriteriaRegistry,
        max_alternatives: usize,
    ) -> Result<Self, RankingError> {
        check_size(rows.len(), max_alternatives)?;

        {
            let mut seen = HashSet::with_capacity(rows.len());
            for (row_index, row) in rows.iter().enumerate() {
                let invalid = |reason| RankingError::invalid_row(row_index, &row.id, reason);

                if row.id.trim().is_empty() {
                    return Err(invalid(InvalidRowReason::EmptyAlternative));
                }
                if !seen.insert(row.id.as_str()) {
                    return Err(invalid(InvalidRowReason::DuplicateAlternative));
                }

                for criterion in registry.ids() {
                    match row.value(criterion) {
                        None => return Err(invalid(InvalidRowReason::MissingValue(criterion))),
                        Some(value) if !value.is_finite() => {
                            return Err(invalid(InvalidRowReason::NonFiniteValue(criterion)))
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[AlternativeRow] {
        &self.rows
    }

    /// Alternative ids in input order.
    pub fn alternative_ids(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn check_size(count: usize, limit: usize) -> Result<(), RankingError> {
    if count == 0 {
        return Err(RankingError::EmptyTable);
    }
    if count > limit {
        return Err(RankingError::TooManyAlternatives { count, limit });
    }
    Ok(())
}
