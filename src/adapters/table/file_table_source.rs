//! File-based Table Source Adapter
//!
//! Reads a raw table from a JSON or YAML file. The file holds either a
//! `{"rows": [...]}` object or a bare list of rows.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::madm::{RawRow, RawTable};
use crate::ports::TableSource;

/// Supported table file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Yaml,
}

impl TableFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(TableFormat::Json),
            "yaml" | "yml" => Some(TableFormat::Yaml),
            _ => None,
        }
    }

    /// Parses file content in this format.
    pub fn parse(&self, content: &str) -> Result<RawTable, String> {
        let document: TableDocument = match self {
            TableFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
            TableFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
        };
        Ok(document.into())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TableDocument {
    Wrapped { rows: Vec<RawRow> },
    Bare(Vec<RawRow>),
}

impl From<TableDocument> for RawTable {
    fn from(document: TableDocument) -> Self {
        match document {
            TableDocument::Wrapped { rows } | TableDocument::Bare(rows) => RawTable::new(rows),
        }
    }
}

/// Table source backed by a single file
#[derive(Debug, Clone)]
pub struct FileTableSource {
    path: PathBuf,
}

impl FileTableSource {
    /// Create a source reading `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, code: ErrorCode, message: impl Into<String>) -> DomainError {
        DomainError::new(code, message).with_detail("path", self.path.display().to_string())
    }
}

#[async_trait]
impl TableSource for FileTableSource {
    async fn fetch_table(&self) -> Result<RawTable, DomainError> {
        let format = TableFormat::from_path(&self.path).ok_or_else(|| {
            self.error(
                ErrorCode::InvalidFormat,
                "Table file must have a .json, .yaml or .yml extension",
            )
        })?;

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.error(ErrorCode::SourceUnavailable, format!("Cannot read table file: {}", e)))?;

        let table = format
            .parse(&content)
            .map_err(|e| self.error(ErrorCode::InvalidFormat, format!("Cannot parse table file: {}", e)))?;

        debug!(path = %self.path.display(), rows = table.len(), "Loaded table file");
        Ok(table)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{CriteriaRegistry, CriterionId};
    use crate::domain::madm::{AlternativeTable, InvalidRowReason, RankingError, RawCell};
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(TableFormat::from_path(Path::new("t.json")), Some(TableFormat::Json));
        assert_eq!(TableFormat::from_path(Path::new("t.YML")), Some(TableFormat::Yaml));
        assert_eq!(TableFormat::from_path(Path::new("t.yaml")), Some(TableFormat::Yaml));
        assert_eq!(TableFormat::from_path(Path::new("t.csv")), None);
        assert_eq!(TableFormat::from_path(Path::new("table")), None);
    }

    #[tokio::test]
    async fn reads_wrapped_json() {
        let file = write_temp(
            ".json",
            r#"{"rows": [{"alternative": "A1", "C1": 8000, "C2": 5, "C3": 100000, "C4": 99.9, "C5": 4}]}"#,
        );
        let table = FileTableSource::new(file.path()).fetch_table().await.unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].columns.get("C1"), Some(&RawCell::Number(8000.0)));
    }

    #[tokio::test]
    async fn reads_bare_yaml_list() {
        let file = write_temp(
            ".yaml",
            "- alternative: A1\n  Monthly Price (C1): 8000\n  C5: 4\n- alternative: A2\n  C1: 10000\n",
        );
        let table = FileTableSource::new(file.path()).fetch_table().await.unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows[0].columns.get("Monthly Price (C1)"),
            Some(&RawCell::Number(8000.0))
        );
        assert_eq!(table.rows[1].alternative, "A2");
    }

    #[tokio::test]
    async fn unsupported_extension_is_invalid_format() {
        let file = write_temp(".csv", "alternative,C1\nA1,8000\n");
        let err = FileTableSource::new(file.path()).fetch_table().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.details.contains_key("path"));
    }

    #[tokio::test]
    async fn missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileTableSource::new(dir.path().join("absent.json"));
        let err = source.fetch_table().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SourceUnavailable);
    }

    #[tokio::test]
    async fn malformed_content_is_invalid_format() {
        let file = write_temp(".json", r#"{"rows": [{"alternative": "A1", "C1": 8000"#);
        let err = FileTableSource::new(file.path()).fetch_table().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[tokio::test]
    async fn blank_yaml_cell_loads_and_fails_row_validation() {
        let file = write_temp(
            ".yaml",
            "rows:\n  - alternative: A1\n    C1: 8000\n    C2: 5\n    C3:\n    C4: 99.9\n    C5: 4\n",
        );
        let table = FileTableSource::new(file.path()).fetch_table().await.unwrap();
        assert_eq!(table.rows[0].columns.get("C3"), Some(&RawCell::Blank));

        let result = AlternativeTable::from_raw(&table, &CriteriaRegistry::hosting(), 10);
        assert_eq!(
            result,
            Err(RankingError::invalid_row(
                0,
                "A1",
                InvalidRowReason::MissingValue(CriterionId::C3)
            ))
        );
    }
}
