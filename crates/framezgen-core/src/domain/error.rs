//! Domain layer errors: manifest validation failures.

use thiserror::Error;

/// Errors raised while validating a [`crate::domain::Manifest`].
///
/// These never occur at generation time for the built-in manifest (which is
/// validated by tests), only when a caller constructs a manifest by hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The manifest contains no directories and no files.
    #[error("Manifest is empty: nothing to generate")]
    EmptyManifest,

    /// A manifest entry uses an absolute path.
    #[error("Absolute path not allowed in manifest: {path}")]
    AbsolutePathNotAllowed { path: String },

    /// The same path appears twice within one manifest list.
    #[error("Duplicate path in manifest: {path}")]
    DuplicatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyManifest => vec![
                "Add at least one directory or file to the manifest".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' is absolute", path),
                "Manifest paths are resolved relative to the working directory".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("'{}' is listed more than once", path),
                "Each manifest entry must have a unique path".into(),
            ],
        }
    }
}
