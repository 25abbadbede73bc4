//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and environment hookups. The generator itself takes no functional
//! arguments: the file set is fixed, so the surface is `--help`,
//! `--version`, and the global output/logging flags.

use std::path::PathBuf;

use clap::Parser;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "framezgen",
    bin_name = "framezgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Generate the Framez project skeleton",
    long_about = "Framezgen materializes the fixed Framez mobile-app skeleton \
                  (Expo / React Native / Supabase boilerplate) in the current \
                  working directory. Re-running overwrites file content; \
                  existing directories are left untouched.",
    after_help = "EXAMPLES:\n\
        \x20 mkdir framez && cd framez && framezgen\n\
        \x20 framezgen -v        # with progress-level logging\n\
        \x20 framezgen --quiet   # files only, no console output"
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments.
#[derive(Debug, clap::Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(long = "no-color", env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
