//! Flags accepted before or after any `proj-meta` subcommand.
//!
//! They only steer diagnostics and configuration. The version line itself
//! is shaped by the `version` subcommand's own flags.

use clap::Args;
use std::path::PathBuf;

/// Diagnostics, colour and configuration flags shared by all subcommands.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Raise the level of the tracing diagnostics written to stderr.
    ///
    /// Stdout only ever carries the requested version text, so `-vv` is safe
    /// to combine with `proj-meta version -s > VERSION`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Show diagnostics on stderr (-v, -vv, -vvv)",
        long_help = "Show diagnostics on stderr; stdout is unaffected:
    (none)  - Warnings and errors only
    -v      - Info: startup and completion
    -vv     - Debug: identity validation and selected display mode
    -vvv    - Trace"
    )]
    pub verbose: u8,

    /// Only errors reach stderr; the version line is still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only report errors on stderr"
    )]
    pub quiet: bool,

    /// Plain error and log output.
    ///
    /// `NO_COLOR` follows <https://no-color.org>: any non-empty value other
    /// than a falsey one (`0`, `false`, `no`, `off`) turns colour off.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored error and log output"
    )]
    pub no_color: bool,

    /// Settings file read instead of the platform default.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE (see 'proj-meta config path')"
    )]
    pub config: Option<PathBuf>,
}
