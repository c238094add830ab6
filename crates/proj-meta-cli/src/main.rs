//! # proj-meta CLI
//!
//! Prints this program's own project identity.
//!
//! ## Startup sequence
//!
//! 1. Validate the built-in identity (name literal + embedded `version.txt`).
//! 2. Build the clap command, stamp the identity on it, parse arguments
//!    (clap handles `--help` / `--version` early-exit).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Load configuration (file + env + defaults).
//! 5. Build the [`OutputManager`].
//! 6. Dispatch to the appropriate command handler.
//! 7. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                             |
//! |------|-------------------------------------|
//! |  0   | Success                             |
//! |  1   | Internal error / invalid identity   |
//! |  2   | User / input error                  |
//! |  4   | Configuration error                 |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};
use tracing::{debug, info, instrument};

use proj_meta_adapters::{VersionArgs, update_command};
use proj_meta_core::domain::ProjectIdentity;

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

/// Name this program reports for itself.
const PROJECT_NAME: &str = "proj-meta";

/// Version written at release time; surrounding whitespace is ignored.
const VERSION_FILE: &str = include_str!("../version.txt");

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    let _ = dotenvy::dotenv();

    // ── 1. Identity ───────────────────────────────────────────────────────
    let identity = match ProjectIdentity::new(PROJECT_NAME, VERSION_FILE) {
        Ok(identity) => identity,
        Err(e) => {
            // No flags parsed yet; always show the cause chain.
            return handle_error(CliError::from(e), std::io::stderr().is_terminal(), true);
        }
    };

    // ── 2. Parse arguments ────────────────────────────────────────────────
    let cli = match parse_args(&identity) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version output also arrive here, with exit code 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        version = identity.version(),
        "CLI started"
    );

    // ── 4. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            };
            let color = !cli.global.no_color && std::io::stderr().is_terminal();
            return handle_error(err, color, cli.global.verbose > 0);
        }
    };

    // ── 5. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let color = output.supports_color() && std::io::stderr().is_terminal();
    let verbose = cli.global.verbose > 0;

    // ── 6. Dispatch + 7. Error handling ──────────────────────────────────
    match run(cli, &identity, &config, &output) {
        Ok(()) => {
            info!("proj-meta completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, color, verbose),
    }
}

/// Parse `std::env::args` against the identity-stamped command.
fn parse_args(identity: &ProjectIdentity) -> Result<Cli, clap::Error> {
    let matches = update_command(identity, Cli::command()).try_get_matches()?;
    Cli::from_arg_matches(&matches)
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(
    cli: Cli,
    identity: &ProjectIdentity,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cli.command {
        None => commands::version::execute(&VersionArgs::default(), identity, output),
        Some(Commands::Version(args)) => commands::version::execute(&args, identity, output),
        Some(Commands::Completions(args)) => commands::completions::execute(args, identity),
        Some(Commands::Config(cmd)) => commands::config::execute(cmd, config, output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, color: bool, verbose: bool) -> ExitCode {
    err.log();

    // Written to stderr so the message appears even when stdout is redirected.
    let msg = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
