//! Error types for surf journal core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for surf journal operations.
pub type Result<T> = std::result::Result<T, SurfError>;

/// Core error type for surf journal operations.
#[derive(Debug, Error)]
pub enum SurfError {
    /// The initial list query could not be executed.
    ///
    /// This is a configuration fault, not a data condition; callers are
    /// expected to treat it as fatal.
    #[error("Startup configuration error: {0}")]
    StartupConfiguration(String),

    /// A query against the store failed
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The export destination could not be opened for writing
    #[error("Cannot open export file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single entry could not be strictly encoded as UTF-8
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Deleting, saving or committing a draft failed
    #[error("Persist error: {0}")]
    Persist(String),

    /// An export was requested while another one is still running
    #[error("An export is already in progress")]
    ExportInProgress,

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SurfError {
    /// Re-tag a storage failure as a persistence failure.
    ///
    /// Used on the delete/save/commit paths so the caller can tell a failed
    /// write apart from a failed read.
    pub fn into_persist(self) -> Self {
        match self {
            SurfError::Persist(_) => self,
            other => SurfError::Persist(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_persist_wraps_storage_errors() {
        let err = SurfError::Storage("disk full".to_string()).into_persist();
        match err {
            SurfError::Persist(message) => assert!(message.contains("disk full")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_into_persist_keeps_persist_message() {
        let err = SurfError::Persist("locked".to_string()).into_persist();
        assert_eq!(err.to_string(), "Persist error: locked");
    }

    #[test]
    fn test_file_open_message_names_path() {
        let err = SurfError::FileOpen {
            path: PathBuf::from("/nowhere/export.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nowhere/export.csv"));
    }
}
