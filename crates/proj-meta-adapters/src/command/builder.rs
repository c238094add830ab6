//! clap builder adapter: mount `version` on a root `Command`.

use clap::{ArgMatches, Args, Command, FromArgMatches};
use tracing::debug;

use proj_meta_core::domain::{DisplayMode, ProjectIdentity};

use super::derive::VersionArgs;
use crate::error::AdapterResult;

/// Name of the mounted subcommand.
pub const VERSION_COMMAND: &str = "version";

/// A standalone `version` subcommand carrying the [`VersionArgs`] flags.
pub fn version_command() -> Command {
    // augment_args applies the struct's doc as about text; override after.
    VersionArgs::augment_args(Command::new(VERSION_COMMAND))
        .about("Print program version")
        .long_about(None)
}

/// Stamp `identity` onto a root command.
///
/// Sets the root `--version` string to the canonical version and mounts
/// [`version_command`], unless the root already defines a `version`
/// subcommand (e.g. through a derive `Subcommand` holding [`VersionArgs`]).
pub fn update_command(identity: &ProjectIdentity, cmd: Command) -> Command {
    let cmd = cmd.version(identity.version().to_owned());
    if cmd.find_subcommand(VERSION_COMMAND).is_some() {
        debug!("root command already defines `{VERSION_COMMAND}`");
        cmd
    } else {
        cmd.subcommand(version_command())
    }
}

/// Read the display mode out of the `version` subcommand's matches.
pub fn mode_from_matches(matches: &ArgMatches) -> AdapterResult<DisplayMode> {
    VersionArgs::from_arg_matches(matches)?.mode()
}
