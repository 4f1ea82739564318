//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TableSource` - Supplies raw alternative tables for evaluation

mod table_source;

pub use table_source::TableSource;
