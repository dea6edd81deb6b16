//! In-memory table representation and source file metadata.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};

/// Metadata about an ingested data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was read.
    pub analyzed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been ingested.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            analyzed_at: Utc::now(),
        }
    }
}

/// Parsed tabular data: headers plus row-major string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings.
    pub rows: Vec<Vec<String>>,
    /// The delimiter the table was read with.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All values of a column by index, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// All values of a named column, or None for an unknown name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).collect())
    }

    /// A specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Whether a cell value counts as missing for classification purposes.
    pub fn is_missing_value(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed == "."
            || trimmed == "-"
    }

    /// Write the table as comma-separated values.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = csv::Writer::from_path(path).map_err(|e| match e.into_kind() {
            csv::ErrorKind::Io(source) => SiftError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => SiftError::Processing(format!("CSV write error: {:?}", other)),
        })?;

        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush().map_err(|e| SiftError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_missing_value() {
        assert!(DataTable::is_missing_value(""));
        assert!(DataTable::is_missing_value("  "));
        assert!(DataTable::is_missing_value("NA"));
        assert!(DataTable::is_missing_value("n/a"));
        assert!(DataTable::is_missing_value("NULL"));
        assert!(DataTable::is_missing_value("None"));
        assert!(DataTable::is_missing_value("."));
        assert!(DataTable::is_missing_value("-"));
        assert!(!DataTable::is_missing_value("0"));
        assert!(!DataTable::is_missing_value("value"));
    }

    #[test]
    fn test_column_access() {
        let table = DataTable::new(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into(), "x".into()], vec!["2".into(), "y".into()]],
            b',',
        );

        assert_eq!(table.column_index("b"), Some(1));
        assert_eq!(table.column_index("c"), None);
        assert_eq!(table.column_by_name("a").unwrap(), vec!["1", "2"]);
        assert_eq!(table.get(1, 1), Some("y"));
    }

    #[test]
    fn test_write_csv_round_trip() {
        let table = DataTable::new(
            vec!["name".into(), "value".into()],
            vec![vec!["alpha".into(), "1".into()]],
            b',',
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        table.write_csv(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "name,value\nalpha,1\n");
    }
}
