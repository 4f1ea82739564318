//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API over the evaluation handler
//! - `table` - Table sources (files, in-memory)

pub mod http;
pub mod table;

pub use http::{api_router, EvaluationHandlers};
pub use table::{FileTableSource, InMemoryTableSource, TableFormat};
