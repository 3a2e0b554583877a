use std::{error::Error, path::PathBuf};
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by key-value backends regardless of where the documents live.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend cannot be used at all.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// What was attempted.
        message: String,
        /// Underlying failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// Document exists but could not be read.
    #[error("failed to read document `{key}` from `{}`", path.display())]
    Read {
        /// Key being read.
        key: String,
        /// File backing the key.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Document could not be written.
    #[error("failed to write document `{key}` to `{}`", path.display())]
    Write {
        /// Key being written.
        key: String,
        /// Path whose write or rename failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Key rejected before touching the backend.
    #[error("invalid storage key `{key}`")]
    InvalidKey {
        /// Rejected key.
        key: String,
    },
    /// The last write of these keys failed; the stored documents are stale.
    #[error("last write failed for {}", keys.join(", "))]
    FailedWrites {
        /// Affected keys, sorted.
        keys: Vec<String>,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}
