//! Application layer errors.
//!
//! Exactly one class of failure exists at generation time: a filesystem I/O
//! error. It is surfaced unmodified (no retry, no rollback) and aborts the
//! remaining sequence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur while materializing a manifest.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed (permission denied, invalid path, disk
    /// full, ...).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions in the current directory".into(),
                "Already-created directories and files are left in place".into(),
            ],
        }
    }
}
