//! Prediction table storage.
//!
//! Loads the pre-computed per-task-type duration statistics from a CSV file
//! once at startup. The table is read-only for the process lifetime.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read predictions file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Predictions file has no header row")]
    MissingHeader,

    #[error("Missing required column in predictions file: {0}")]
    MissingColumn(&'static str),

    #[error("Row {row}: expected at least {expected} fields, found {found}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row}: invalid value for {column}: {value:?}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Duration statistics for a single task type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionEntry {
    /// Expected duration in days
    pub predicted_mean: f64,

    /// Margin added to the mean for the upper bound
    pub error: f64,
}

/// Mapping from task type to its duration statistics.
///
/// Keys are case-sensitive as stored in the file; iteration follows file
/// order. A duplicate task type overwrites the value but keeps the original
/// position.
#[derive(Debug, Clone, Default)]
pub struct PredictionTable {
    entries: IndexMap<String, PredictionEntry>,
}

impl PredictionTable {
    /// Load the table from a CSV file with columns `task_type`,
    /// `predicted_mean` and `error` (header-keyed, column order free).
    ///
    /// Any unreadable or unparseable row fails the whole load. There is no
    /// partial table: the caller treats an error as fatal at startup.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse CSV contents. Fields are comma-separated and trimmed; blank
    /// lines are skipped. The format carries no quoted or embedded commas.
    fn parse(contents: &str) -> Result<Self, LoadError> {
        let mut lines = contents.lines();

        let header = lines.next().ok_or(LoadError::MissingHeader)?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        let task_type_idx = column_index(&columns, "task_type")?;
        let mean_idx = column_index(&columns, "predicted_mean")?;
        let error_idx = column_index(&columns, "error")?;
        let width = task_type_idx.max(mean_idx).max(error_idx) + 1;

        let mut entries = IndexMap::new();
        for (offset, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            // 1-based data row number, for error messages
            let row = offset + 1;

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() < width {
                return Err(LoadError::ShortRow {
                    row,
                    expected: width,
                    found: fields.len(),
                });
            }

            let task_type = fields[task_type_idx].to_string();
            let predicted_mean = parse_field(fields[mean_idx], row, "predicted_mean")?;
            let error = parse_field(fields[error_idx], row, "error")?;

            entries.insert(task_type, PredictionEntry { predicted_mean, error });
        }

        Ok(Self { entries })
    }

    /// Build a table from in-memory entries (useful for testing).
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, PredictionEntry)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Look up a task type by its exact (case-sensitive) key.
    pub fn get(&self, task_type: &str) -> Option<&PredictionEntry> {
        self.entries.get(task_type)
    }

    /// Task type keys in load order.
    pub fn task_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn column_index(columns: &[&str], name: &'static str) -> Result<usize, LoadError> {
    columns
        .iter()
        .position(|c| *c == name)
        .ok_or(LoadError::MissingColumn(name))
}

fn parse_field(value: &str, row: usize, column: &'static str) -> Result<f64, LoadError> {
    value.parse().map_err(|_| LoadError::InvalidNumber {
        row,
        column,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "task_type,predicted_mean,error").unwrap();
        writeln!(file, "Cleaning,1.2,0.6").unwrap();
        writeln!(file, "Tests,3.6,1.4").unwrap();
        file.flush().unwrap();

        let table = PredictionTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("Cleaning"),
            Some(&PredictionEntry {
                predicted_mean: 1.2,
                error: 0.6
            })
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PredictionTable::load(Path::new("/nonexistent/predictions.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_header_order_is_free() {
        let table =
            PredictionTable::parse("error,task_type,predicted_mean\n0.5,Cleaning,2.0\n").unwrap();
        let entry = table.get("Cleaning").unwrap();
        assert_eq!(entry.predicted_mean, 2.0);
        assert_eq!(entry.error, 0.5);
    }

    #[test]
    fn test_missing_column_fails() {
        let err = PredictionTable::parse("task_type,predicted_mean\nCleaning,2.0\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("error")));
    }

    #[test]
    fn test_unparseable_number_fails_whole_load() {
        let err = PredictionTable::parse(
            "task_type,predicted_mean,error\nCleaning,1.2,0.6\nTests,n/a,1.4\n",
        )
        .unwrap_err();
        match err {
            LoadError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "predicted_mean");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_short_row_fails() {
        let err = PredictionTable::parse("task_type,predicted_mean,error\nCleaning,1.2\n")
            .unwrap_err();
        assert!(matches!(err, LoadError::ShortRow { row: 1, .. }));
    }

    #[test]
    fn test_duplicate_task_type_last_write_wins() {
        let table = PredictionTable::parse(
            "task_type,predicted_mean,error\nCleaning,1.2,0.6\nTests,3.6,1.4\nCleaning,9.0,0.1\n",
        )
        .unwrap();

        // Value from the last row, position from the first
        assert_eq!(table.get("Cleaning").unwrap().predicted_mean, 9.0);
        let keys: Vec<&str> = table.task_types().collect();
        assert_eq!(keys, vec!["Cleaning", "Tests"]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = PredictionTable::parse(
            "task_type,predicted_mean,error\n\nCleaning,1.2,0.6\n\n",
        )
        .unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_task_types_preserve_load_order() {
        let table = PredictionTable::parse(
            "task_type,predicted_mean,error\nTests,3.6,1.4\nCleaning,1.2,0.6\nSpecial Procedure,5.2,2.3\n",
        )
        .unwrap();
        let keys: Vec<&str> = table.task_types().collect();
        assert_eq!(keys, vec!["Tests", "Cleaning", "Special Procedure"]);
    }
}
