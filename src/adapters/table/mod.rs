//! Table source adapters.
//!
//! - `FileTableSource` - JSON or YAML table files on disk
//! - `InMemoryTableSource` - Fixed tables for tests and the built-in sample

mod file_table_source;
mod in_memory_table_source;

pub use file_table_source::{FileTableSource, TableFormat};
pub use in_memory_table_source::InMemoryTableSource;
