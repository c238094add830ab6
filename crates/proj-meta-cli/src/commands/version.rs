//! `proj-meta version` and the bare `proj-meta` invocation.

use tracing::instrument;

use proj_meta_adapters::VersionArgs;
use proj_meta_core::domain::ProjectIdentity;

use crate::{error::CliResult, output::OutputManager};

/// Print the identity for the mode selected by `args`.
///
/// The bare invocation dispatches here with default args, so it prints the
/// same `name version` line as `proj-meta version`.
#[instrument(skip_all, fields(name = identity.name()))]
pub fn execute(
    args: &VersionArgs,
    identity: &ProjectIdentity,
    output: &OutputManager,
) -> CliResult<()> {
    args.run(identity, &mut output.writer())?;
    Ok(())
}
