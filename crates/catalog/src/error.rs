//! Error types for luach-catalog.

use std::path::PathBuf;

/// Error type for loading a product catalogue.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Returned when the catalogue file cannot be opened or read.
    #[error("cannot read {}: {reason}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps a parse error from the CSV reader.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a required column is blank.
    #[error("row {row}: field '{field}' is empty")]
    EmptyField {
        /// One-based data row, not counting the header.
        row: usize,
        /// Name of the blank column.
        field: &'static str,
    },
}

impl From<csv::Error> for CatalogError {
    fn from(e: csv::Error) -> Self {
        CatalogError::Csv {
            reason: e.to_string(),
        }
    }
}
