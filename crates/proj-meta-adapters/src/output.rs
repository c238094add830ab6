//! Line output for rendered identities.

use std::io::Write;

use proj_meta_core::domain::{DisplayMode, ProjectIdentity};

use crate::error::AdapterResult;

/// Write `identity` rendered for `mode` as one line.
///
/// Nothing at all is written when the rendering is empty (a prerelease
/// request on a release version), not even a newline.
pub fn write_version<W: Write>(
    identity: &ProjectIdentity,
    mode: DisplayMode,
    out: &mut W,
) -> AdapterResult<()> {
    let line = identity.format(mode);
    if !line.is_empty() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
