//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.  The root `--version`
//! string is not known at compile time; `main` stamps it on with
//! [`proj_meta_adapters::update_command`] after the identity is validated.

use clap::{Args, Parser, Subcommand, ValueEnum};

use proj_meta_adapters::VersionArgs;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "proj-meta",
    bin_name = "proj-meta",
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Project Metadata CLI",
    long_about = "Prints the project name and semantic version, in full or \
                  reduced to the short, major, major.minor or prerelease part.",
    after_help = "EXAMPLES:\n\
        \x20 proj-meta\n\
        \x20 proj-meta version --short\n\
        \x20 proj-meta version --major-minor\n\
        \x20 proj-meta completions bash > /usr/share/bash-completion/completions/proj-meta",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; without one the full identity is printed.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print program version.
    #[command(
        about = "Print program version",
        after_help = "EXAMPLES:\n\
            \x20 proj-meta version               # proj-meta v0.1.0\n\
            \x20 proj-meta version --short       # v0.1.0\n\
            \x20 proj-meta version --major       # 0\n\
            \x20 proj-meta version --major-minor # 0.1\n\
            \x20 proj-meta version --prerelease  # (empty for releases)"
    )]
    Version(VersionArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 proj-meta completions bash > ~/.local/share/bash-completion/completions/proj-meta\n\
            \x20 proj-meta completions zsh  > ~/.zfunc/_proj-meta\n\
            \x20 proj-meta completions fish > ~/.config/fish/completions/proj-meta.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the proj-meta configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 proj-meta config show\n\
            \x20 proj-meta config path"
    )]
    Config(ConfigCommands),
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `proj-meta completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `proj-meta config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path of the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
