//! Error types for merge operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from extraction, merging or writing documents.
///
/// The merge workflow downgrades these to per-pair warnings; only the
/// direct two-file review surfaces them to the caller.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The file could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be decoded.
    #[error("Could not extract text from {path}: {message}")]
    Extract { path: PathBuf, message: String },

    /// The merged document could not be written.
    #[error("Could not write merged document {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// A confirmed deletion failed.
    #[error("Could not delete {path}: {message}")]
    Delete { path: PathBuf, message: String },
}

impl MergeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn extract(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Extract {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Write {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub(crate) fn delete(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Delete {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
