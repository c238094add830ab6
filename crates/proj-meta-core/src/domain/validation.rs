use crate::domain::error::{IdentityError, IdentityResult};

/// Characters trimmed from both ends of raw input and forbidden inside names.
pub(crate) const CUTSET: &[char] = &['\t', '\n', '\r', ' '];

/// Optional marker accepted in front of a raw version.
const VERSION_PREFIX: char = 'v';

/// Centralized identity validation.
///
/// All trimming and parsing rules live here, not scattered across the
/// identity type and its adapters.
pub(crate) struct IdentityValidator;

impl IdentityValidator {
    /// Trim and check a project name; returns the trimmed name.
    pub(crate) fn validate_name(raw: &str) -> IdentityResult<String> {
        let name = raw.trim_matches(CUTSET);
        if name.is_empty() {
            return Err(IdentityError::EmptyName);
        }
        if name.contains(CUTSET) {
            return Err(IdentityError::MultiWordName {
                name: name.to_owned(),
            });
        }
        Ok(name.to_owned())
    }

    /// Trim and parse a version, accepting at most one leading `v`.
    pub(crate) fn validate_version(raw: &str) -> IdentityResult<semver::Version> {
        let version = raw.trim_matches(CUTSET);
        if version.is_empty() {
            return Err(IdentityError::EmptyVersion);
        }

        let digits = version.strip_prefix(VERSION_PREFIX).unwrap_or(version);
        semver::Version::parse(digits).map_err(|source| IdentityError::InvalidSemver {
            version: version.to_owned(),
            source,
        })
    }

    /// Canonical rendering: `vMAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
    pub(crate) fn canonical(version: &semver::Version) -> String {
        format!("{VERSION_PREFIX}{version}")
    }
}
