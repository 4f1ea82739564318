//! In-Memory Table Source Adapter
//!
//! Serves a fixed table. Useful for testing and for the built-in sample.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::madm::RawTable;
use crate::ports::TableSource;

/// In-memory table source
#[derive(Debug, Clone)]
pub struct InMemoryTableSource {
    table: Arc<RwLock<RawTable>>,
}

impl InMemoryTableSource {
    /// Create a source serving `table`
    pub fn new(table: RawTable) -> Self {
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    /// Create a source serving the five-provider hosting sample
    pub fn hosting_sample() -> Self {
        Self::new(RawTable::hosting_sample())
    }

    /// Replace the served table
    pub async fn replace(&self, table: RawTable) {
        *self.table.write().await = table;
    }
}

impl Default for InMemoryTableSource {
    fn default() -> Self {
        Self::hosting_sample()
    }
}

#[async_trait]
impl TableSource for InMemoryTableSource {
    async fn fetch_table(&self) -> Result<RawTable, DomainError> {
        Ok(self.table.read().await.clone())
    }

    fn describe(&self) -> String {
        "in-memory table".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::madm::RawRow;

    #[tokio::test]
    async fn fetch_returns_a_copy_of_the_table() {
        let source = InMemoryTableSource::hosting_sample();
        let table = source.fetch_table().await.unwrap();
        assert_eq!(table, RawTable::hosting_sample());
    }

    #[tokio::test]
    async fn replace_changes_later_fetches() {
        let source = InMemoryTableSource::default();
        let first = source.fetch_table().await.unwrap();

        source
            .replace(RawTable::new(vec![RawRow::new("solo", [("C1", 1.0)])]))
            .await;
        let second = source.fetch_table().await.unwrap();

        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 1);
        assert_eq!(second.rows[0].alternative, "solo");
    }
}
