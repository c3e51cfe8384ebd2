// src/error.rs

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result alias used by the fetch / extract / run stages.
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Everything that can stop a scrape.
///
/// `Network`, `Extraction` and `SchemaMismatch` are raised before any output
/// file is touched; `Export` is raised while writing it.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Connection failure, timeout or non-success HTTP status.
    #[error("GET {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page did not contain what we were looking for.
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// A source row could not be mapped onto the fixed column schema.
    #[error("row {row} has {found} cells, expected {expected}")]
    SchemaMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Export(#[from] ExportError),

    /// A configured value could not be used.
    #[error("invalid config value for {key}: {message}")]
    Config { key: String, message: String },
}

/// Failures while serialising a table to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unable to access existing file {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ExportError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => ExportError::PermissionDenied { path, source },
            _ => ExportError::Io { path, source },
        }
    }

    /// Classify a CSV writer failure, unwrapping the I/O error underneath if there is one.
    pub fn from_csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        let path = path.into();
        if !source.is_io_error() {
            return ExportError::Csv { path, source };
        }
        match source.into_kind() {
            csv::ErrorKind::Io(io_err) => ExportError::from_io(path, io_err),
            other => ExportError::from_io(path, io::Error::new(io::ErrorKind::Other, format!("{other:?}"))),
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            ExportError::PermissionDenied { path, .. }
            | ExportError::Io { path, .. }
            | ExportError::Csv { path, .. } => path,
        }
    }
}
