//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use framezgen_core::{application::ports::Filesystem, error::FramezResult};

/// Production filesystem implementation using `std::fs`.
///
/// `create_dir_all` is idempotent (no error on an existing directory) and
/// `write_file` truncates, both courtesy of the underlying std primitives.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> FramezResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> FramezResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> framezgen_core::error::FramezError {
    use framezgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
