//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generator needs from external systems.
//! The `framezgen-adapters` crate implements [`Filesystem`]; the CLI crate
//! implements [`Reporter`] on top of its output manager.

use std::path::Path;

use crate::error::FramezResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `framezgen_adapters::filesystem::LocalFilesystem` (production)
/// - `framezgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing ancestors. Succeeds silently when
    /// the directory already exists.
    fn create_dir_all(&self, path: &Path) -> FramezResult<()>;

    /// Write content to a file, truncating any existing file. UTF-8 text.
    fn write_file(&self, path: &Path, content: &str) -> FramezResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for operator-facing progress output.
///
/// One call per completed action; the generator never writes to stdout
/// itself. Reporting is best-effort and infallible: a reporter that cannot
/// write must not abort the run.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    /// The directory-creation phase is starting.
    fn begin_directories(&self, total: usize);

    /// A directory was created (or already existed).
    fn directory_created(&self, path: &Path);

    /// The file-creation phase is starting.
    fn begin_files(&self, total: usize);

    /// A file was written.
    fn file_created(&self, path: &Path);
}
