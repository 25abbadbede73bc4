//! The manifest: the fixed list of directories and files the generator
//! reproduces.
//!
//! A [`Manifest`] is an immutable configuration value passed into the
//! generator. It contains no business logic beyond validation, only data.
//! The two lists are independent and intentionally overlapping: a file entry
//! like `src/components/.gitkeep` creates `src/components/` on its own even
//! though that directory is also listed explicitly.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// A directory to ensure exists. No attributes beyond the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    pub path: PathBuf,
}

impl DirectorySpec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// A file to write: relative path plus its complete, final content.
///
/// The content carries no placeholders to fill in; it is written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

impl FileSpec {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// A zero-byte placeholder file (e.g. `.gitkeep`).
    pub fn placeholder(path: impl Into<PathBuf>) -> Self {
        Self::new(path, "")
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Ordered directory and file lists driving one generation run.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    directories: Vec<DirectorySpec>,
    files: Vec<FileSpec>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directories.push(DirectorySpec::new(path));
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.push(FileSpec::new(path, content));
        self
    }

    pub fn with_placeholder(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(FileSpec::placeholder(path));
        self
    }

    pub fn directories(&self) -> &[DirectorySpec] {
        &self.directories
    }

    pub fn files(&self) -> &[FileSpec] {
        &self.files
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Check manifest invariants: non-empty, relative paths only, and no
    /// duplicates within either list.
    ///
    /// A path may appear in *both* lists (a directory that also receives a
    /// placeholder file lives in both); duplicates are only rejected within
    /// a single list.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.directories.is_empty() && self.files.is_empty() {
            return Err(DomainError::EmptyManifest);
        }

        check_list(self.directories.iter().map(|d| d.path.as_path()))?;
        check_list(self.files.iter().map(|f| f.path.as_path()))?;

        Ok(())
    }
}

fn check_list<'a>(paths: impl Iterator<Item = &'a Path>) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for path in paths {
        if path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        let key = path.display().to_string();
        if !seen.insert(key.clone()) {
            return Err(DomainError::DuplicatePath { path: key });
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
