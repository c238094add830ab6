//! The project identity value object.

use std::fmt;

use tracing::{debug, instrument};

use crate::domain::{
    display::DisplayMode,
    error::IdentityResult,
    validation::IdentityValidator,
};

/// A validated project name and canonical semantic version.
///
/// Invariants, enforced at construction:
/// - `name` is non-empty and contains no space, tab, CR or LF.
/// - `version` is `vMAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// There are no setters; clone it freely and share it across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectIdentity {
    name: String,
    version: String,
    semver: semver::Version,
}

impl ProjectIdentity {
    /// Validate `name` then `version` and build the identity.
    ///
    /// Surrounding whitespace is trimmed from both. The version may carry a
    /// single leading `v`; the stored form always does.
    #[instrument(level = "debug", skip_all, err(Display))]
    pub fn new(name: &str, version: &str) -> IdentityResult<Self> {
        let name = IdentityValidator::validate_name(name)?;
        let semver = IdentityValidator::validate_version(version)?;
        let version = IdentityValidator::canonical(&semver);

        debug!(%name, %version, "project identity validated");
        Ok(Self {
            name,
            version,
            semver,
        })
    }

    /// Like [`Self::new`] for hosts whose name and version are literals.
    ///
    /// # Panics
    /// Panics with the validation error if either value is rejected.
    pub fn must(name: &str, version: &str) -> Self {
        match Self::new(name, version) {
            Ok(identity) => identity,
            Err(e) => panic!("invalid project identity: {e}"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical version, including the leading `v`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The parsed version backing [`Self::version`].
    pub fn semver(&self) -> &semver::Version {
        &self.semver
    }

    /// `"{name} {version}"`.
    pub fn full(&self) -> String {
        format!("{} {}", self.name, self.version)
    }

    /// Render the identity for `mode`.
    ///
    /// Only [`DisplayMode::Prerelease`] can yield an empty string, when the
    /// version has no prerelease component.
    pub fn format(&self, mode: DisplayMode) -> String {
        match mode {
            DisplayMode::Full => self.full(),
            DisplayMode::Short => self.version.clone(),
            DisplayMode::Major => self.semver.major.to_string(),
            DisplayMode::MajorMinor => format!("{}.{}", self.semver.major, self.semver.minor),
            DisplayMode::Prerelease => self.semver.pre.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::IdentityError;

    // ========================================================================
    // Construction
    // ========================================================================

    #[test]
    fn empty_names_are_rejected() {
        for name in ["", "   ", "\n\t", "\t   "] {
            let err = ProjectIdentity::new(name, "v1.0.0").unwrap_err();
            assert!(matches!(err, IdentityError::EmptyName), "name={name:?}");
        }
    }

    #[test]
    fn multi_word_names_are_rejected() {
        for name in ["G Unit", "The\tBeatles", "Marquee\nMoon", "Frank\rZappa"] {
            let err = ProjectIdentity::new(name, "v1.0.0").unwrap_err();
            assert!(
                matches!(err, IdentityError::MultiWordName { .. }),
                "name={name:?}"
            );
        }
    }

    #[test]
    fn empty_versions_are_rejected() {
        for version in ["", "   ", "\n\t", "\t   "] {
            let err = ProjectIdentity::new("EHG", version).unwrap_err();
            assert!(
                matches!(err, IdentityError::EmptyVersion),
                "version={version:?}"
            );
        }
    }

    #[test]
    fn malformed_versions_are_rejected() {
        for version in ["LTS", "1", "1.0", "version1.0.0", "va.b.c", "v1.0.0-beta!!"] {
            let err = ProjectIdentity::new("EHG", version).unwrap_err();
            assert!(
                matches!(err, IdentityError::InvalidSemver { .. }),
                "version={version:?}"
            );
        }
    }

    #[test]
    fn name_is_checked_before_version() {
        let err = ProjectIdentity::new("G Unit", "LTS").unwrap_err();
        assert!(matches!(err, IdentityError::MultiWordName { .. }));
    }

    #[test]
    fn valid_identities() {
        let cases = [
            ("Television", "v5.4.3", "Television", "v5.4.3"),
            ("Radiohead", "v2.0.0-beta.1", "Radiohead", "v2.0.0-beta.1"),
            (" Television\t", "v5.4.3", "Television", "v5.4.3"),
            (" Television", "   v5.4.3\n", "Television", "v5.4.3"),
            ("EHG", "1.0.0", "EHG", "v1.0.0"),
        ];
        for (name, version, expected_name, expected_version) in cases {
            let p = ProjectIdentity::new(name, version).unwrap();
            assert_eq!(p.name(), expected_name);
            assert_eq!(p.version(), expected_version);
        }
    }

    #[test]
    fn trimming_is_idempotent() {
        assert_eq!(
            ProjectIdentity::new(" X\t", " v1.2.3\n").unwrap(),
            ProjectIdentity::new("X", "v1.2.3").unwrap()
        );
    }

    #[test]
    fn build_metadata_is_preserved() {
        let p = ProjectIdentity::new("Wire", "1.5.4+20240101").unwrap();
        assert_eq!(p.version(), "v1.5.4+20240101");
        assert_eq!(p.format(DisplayMode::Prerelease), "");
    }

    #[test]
    fn must_returns_valid_identity() {
        assert_eq!(ProjectIdentity::must("Wire", "v1.0.0").name(), "Wire");
    }

    #[test]
    #[should_panic(expected = "multi-word project name")]
    fn must_panics_on_invalid_identity() {
        ProjectIdentity::must("Pink Floyd", "v1.0.0");
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    #[test]
    fn television_scenario() {
        let p = ProjectIdentity::new("Television", "v5.4.3").unwrap();
        assert_eq!(p.format(DisplayMode::Full), "Television v5.4.3");
        assert_eq!(p.format(DisplayMode::Short), "v5.4.3");
        assert_eq!(p.format(DisplayMode::Major), "5");
        assert_eq!(p.format(DisplayMode::MajorMinor), "5.4");
        assert_eq!(p.format(DisplayMode::Prerelease), "");
    }

    #[test]
    fn prerelease_without_separator() {
        let p = ProjectIdentity::new("Radiohead", "v2.0.0-beta.1").unwrap();
        assert_eq!(p.format(DisplayMode::Prerelease), "beta.1");

        let p = ProjectIdentity::new("Maths+English", "v20.0.7-rc3+sha.1").unwrap();
        assert_eq!(p.format(DisplayMode::Prerelease), "rc3");
    }

    #[test]
    fn multi_digit_components() {
        let p = ProjectIdentity::new("marquee-moon", "v19.7.7-dev").unwrap();
        assert_eq!(p.format(DisplayMode::Major), "19");
        assert_eq!(p.format(DisplayMode::MajorMinor), "19.7");
    }

    #[test]
    fn short_is_stable() {
        let p = ProjectIdentity::new("Wire", " 1.2.3 ").unwrap();
        assert_eq!(
            p.format(DisplayMode::Short),
            p.format(DisplayMode::Short)
        );
    }

    #[test]
    fn display_matches_full() {
        let p = ProjectIdentity::new("Television", "v5.4.3").unwrap();
        assert_eq!(p.to_string(), p.full());
        assert_eq!(p.to_string(), p.format(DisplayMode::default()));
    }
}
