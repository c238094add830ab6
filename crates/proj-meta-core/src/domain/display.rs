//! Version display modes.
//!
//! A `DisplayMode` selects which part of a [`ProjectIdentity`] the version
//! command prints. Modes are mutually exclusive by construction; adapters
//! that expose them as independent flags must reject combinations before
//! building one.
//!
//! [`ProjectIdentity`]: super::ProjectIdentity

use std::fmt;

/// What to print for a version request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// `name vX.Y.Z`
    #[default]
    Full,
    /// `vX.Y.Z[-PRE][+BUILD]`
    Short,
    /// `X`
    Major,
    /// `X.Y`
    MajorMinor,
    /// The prerelease identifier, or nothing.
    Prerelease,
}

impl DisplayMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Short => "short",
            Self::Major => "major",
            Self::MajorMinor => "major-minor",
            Self::Prerelease => "prerelease",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
