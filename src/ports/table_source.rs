//! Table source port.
//!
//! Supplies raw alternative tables to the ranking pipeline. The domain never
//! reads files or sockets itself; adapters implement this port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::madm::RawTable;

/// Port for loading one raw table snapshot.
///
/// Each call returns an independent copy; the pipeline never holds on to a
/// table between evaluations.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Fetch the table.
    ///
    /// # Errors
    ///
    /// - `SourceUnavailable` if the backing store cannot be read
    /// - `InvalidFormat` if the content cannot be parsed into rows
    async fn fetch_table(&self) -> Result<RawTable, DomainError>;

    /// Human-readable description of where the table comes from.
    fn describe(&self) -> String;
}
