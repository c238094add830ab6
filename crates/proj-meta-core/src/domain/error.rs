// ============================================================================
// domain/error.rs - IDENTITY ERRORS
// ============================================================================

use thiserror::Error;

/// Failure to construct a [`ProjectIdentity`](super::ProjectIdentity).
///
/// All errors are:
/// - Terminal (a bad name or version literal never fixes itself)
/// - Attributable to one field (see [`IdentityError::field`])
/// - Actionable (provides suggestions)
#[derive(Debug, Error)]
pub enum IdentityError {
    // ========================================================================
    // Name
    // ========================================================================
    #[error("empty project name")]
    EmptyName,

    #[error("multi-word project name '{name}'")]
    MultiWordName { name: String },

    // ========================================================================
    // Version
    // ========================================================================
    #[error("empty project version")]
    EmptyVersion,

    #[error("invalid semantic version '{version}'")]
    InvalidSemver {
        version: String,
        #[source]
        source: semver::Error,
    },
}

/// Which half of the identity was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Version,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Version => f.write_str("version"),
        }
    }
}

impl IdentityError {
    /// The field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            Self::EmptyName | Self::MultiWordName { .. } => Field::Name,
            Self::EmptyVersion | Self::InvalidSemver { .. } => Field::Version,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "The project name must contain at least one non-whitespace character".into(),
            ],
            Self::MultiWordName { name } => vec![
                format!("'{}' contains whitespace", name),
                "Use a single word, e.g. join words with '-' or '_'".into(),
            ],
            Self::EmptyVersion => vec![
                "The embedded version string is empty".into(),
                "Write a semantic version such as v0.1.0 to the version file".into(),
            ],
            Self::InvalidSemver { version, .. } => vec![
                format!("'{}' is not MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]", version),
                "A single leading 'v' is allowed, e.g. v1.2.3 or v2.0.0-beta.1".into(),
            ],
        }
    }
}

/// Convenient result type alias.
pub type IdentityResult<T> = Result<T, IdentityError>;
