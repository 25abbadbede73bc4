//! Error handling for the Framezgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::error;

use framezgen_core::error::{ErrorCategory, FramezError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `framezgen-core`.
    ///
    /// In practice this is always a filesystem I/O failure: the built-in
    /// manifest never fails validation (tests pin that down).
    #[error("Generation failed: {0}")]
    Core(#[from] FramezError),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Writing console output itself failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Map to a process exit code.
    ///
    /// | Code | Meaning                 |
    /// |------|-------------------------|
    /// |  1   | Internal / system error |
    /// |  2   | User / input error      |
    /// |  4   | Configuration error     |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(e) => match e.category() {
                ErrorCategory::Validation => 2,
                ErrorCategory::Internal => 1,
            },
            Self::Config { .. } => 4,
            Self::Io { .. } => 1,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(e) => e.suggestions(),
            Self::Config { message } => vec![
                format!("Configuration issue: {message}"),
                "Check the TOML syntax, or remove the file to use defaults".into(),
            ],
            Self::Io { .. } => vec!["Check that the terminal/stdout is writable".into()],
        }
    }

    /// Emit a structured log event at error severity.
    pub fn log(&self) {
        error!(exit_code = self.exit_code(), "{self}");
    }

    /// Plain-text rendering for non-TTY stderr.
    pub fn format_plain(&self) -> String {
        let mut out = format!("\u{2717} {self}\n");
        for suggestion in self.suggestions() {
            out.push_str(&format!("  \u{2192} {suggestion}\n"));
        }
        out
    }

    /// Coloured rendering for TTY stderr.
    pub fn format_colored(&self) -> String {
        let mut out = format!("{} {}\n", "\u{2717}".red().bold(), self.to_string().red());
        for suggestion in self.suggestions() {
            out.push_str(&format!("  {} {}\n", "\u{2192}".yellow(), suggestion));
        }
        out
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
