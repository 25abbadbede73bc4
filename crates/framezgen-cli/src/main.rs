//! # Framezgen CLI
//!
//! Single-purpose scaffolding tool: writes the fixed Framez mobile-app
//! skeleton into the current working directory.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + defaults).
//! 4. Build the [`OutputManager`] and wire the adapters into the generator.
//! 5. Run the generation pass and print the completion banner.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use framezgen_adapters::{LocalFilesystem, framez_manifest};
use framezgen_core::application::ScaffoldGenerator;

use crate::{
    cli::{Cli, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
    reporter::ConsoleReporter,
};

mod cli;
mod config;
mod error;
mod logging;
mod output;
mod reporter;

fn main() -> ExitCode {
    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Render clap's own error (already user-friendly) and exit 2.
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(CliError::Config {
                message: format!("{e:#}"),
            });
        }
    };

    // ── 4/5. Run + 6. Error handling ──────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    match run(&cli.global, &output) {
        Ok(()) => {
            info!("Framezgen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e),
    }
}

/// One full generation pass in the current working directory.
///
/// The completion banner is only printed after every directory and file has
/// been materialized; a failed run exits before any banner line appears.
#[instrument(skip_all)]
fn run(global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let filesystem = Box::new(LocalFilesystem::new());
    let reporter = Box::new(ConsoleReporter::new(output.clone()));
    let generator = ScaffoldGenerator::new(filesystem, reporter);

    let manifest = framez_manifest();
    info!(
        directories = manifest.directory_count(),
        files = manifest.file_count(),
        "generation started"
    );

    let summary = generator.run(&manifest)?;

    info!(
        directories = summary.directories,
        files = summary.files,
        "generation finished"
    );

    // Completion banner with next-step instructions.
    if !global.quiet {
        output.print("")?;
        output.print("\u{2705} Framez project structure created successfully!")?;
        output.print("")?;
        output.print("Next steps:")?;
        output.print("1. Run: npm install")?;
        output.print("2. Setup Supabase and update .env file")?;
        output.print("3. Copy the code from artifacts into respective files")?;
        output.print("4. Run: npm start")?;
    }

    Ok(())
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes — the format/suggestion machinery in `CliError`
/// is all exercised here.
fn handle_error(err: CliError) -> ExitCode {
    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print a user-friendly message.  We write directly to stderr so the
    //    message appears even when stdout is redirected.
    //
    //    Colour is disabled when stderr is not a TTY (same logic as logging.rs).
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored()
    } else {
        err.format_plain()
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
