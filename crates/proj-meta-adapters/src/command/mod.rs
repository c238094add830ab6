//! clap adapters for the `version` subcommand.

mod builder;
mod derive;

pub use builder::{VERSION_COMMAND, mode_from_matches, update_command, version_command};
pub use derive::VersionArgs;
