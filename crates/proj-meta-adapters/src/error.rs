//! Adapter errors.

use thiserror::Error;

/// Errors raised while turning command-line input into a version display.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// More than one display-mode flag was set.
    ///
    /// clap rejects this at parse time through the flag group; this variant
    /// covers `VersionArgs` values built in code.
    #[error("flags {} cannot be used together", .flags.join(", "))]
    ConflictingFlags { flags: Vec<&'static str> },

    /// Matches did not come from a command carrying the version flags.
    #[error("could not read version flags: {0}")]
    Matches(#[from] clap::Error),

    /// Writing the rendered line failed.
    #[error("failed to write version output: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient result type alias.
pub type AdapterResult<T> = Result<T, AdapterError>;
