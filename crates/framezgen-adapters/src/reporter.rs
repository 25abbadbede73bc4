//! Reporter port implementations.
//!
//! The CLI crate provides the console reporter; this module only carries the
//! no-op variant for embedding the generator without operator output.

use std::path::Path;

use framezgen_core::application::ports::Reporter;

/// Discards all progress events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl NullReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for NullReporter {
    fn begin_directories(&self, _total: usize) {}

    fn directory_created(&self, _path: &Path) {}

    fn begin_files(&self, _total: usize) {}

    fn file_created(&self, _path: &Path) {}
}
