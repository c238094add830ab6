//! Command-line adapters for proj-meta.
//!
//! This crate exposes a [`ProjectIdentity`](proj_meta_core::domain::ProjectIdentity)
//! through clap, in the two styles clap offers:
//!
//! - [`VersionArgs`]: a derive-API `Args` struct to embed in a `Subcommand`.
//! - [`version_command`] / [`update_command`]: builder-API helpers that mount
//!   a `version` subcommand on an existing root `Command` and set its
//!   `--version` string.
//!
//! Both share one flag definition, so the accepted flags, help text and
//! conflict rules are identical.

pub mod command;
pub mod error;
pub mod output;

// Re-export commonly used adapters
pub use command::{VERSION_COMMAND, VersionArgs, mode_from_matches, update_command, version_command};
pub use error::{AdapterError, AdapterResult};
pub use output::write_version;
