//! Console reporter: progress lines on stdout.
//!
//! Implements the core `Reporter` port over [`OutputManager`]. The line
//! formats are part of the output contract:
//!
//! ```text
//! Creating directories...
//! ✓ Created directory: src/components
//!
//! Creating files...
//! ✓ Created: .gitignore
//! ```
//!
//! Reporting is best-effort: a failed console write never aborts the
//! generation run, so write results are deliberately discarded here.

use std::path::Path;

use framezgen_core::application::ports::Reporter;

use crate::output::OutputManager;

/// Writes one confirmation line per completed action.
pub struct ConsoleReporter {
    output: OutputManager,
}

impl ConsoleReporter {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

impl Reporter for ConsoleReporter {
    fn begin_directories(&self, _total: usize) {
        let _ = self.output.header("Creating directories...");
    }

    fn directory_created(&self, path: &Path) {
        let _ = self
            .output
            .success(&format!("Created directory: {}", path.display()));
    }

    fn begin_files(&self, _total: usize) {
        let _ = self.output.print("");
        let _ = self.output.header("Creating files...");
    }

    fn file_created(&self, path: &Path) {
        let _ = self.output.success(&format!("Created: {}", path.display()));
    }
}
