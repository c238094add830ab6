//! Error handling for the proj-meta CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use proj_meta_adapters::AdapterError;
use proj_meta_core::domain::IdentityError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// The compiled-in name or version failed validation.
    #[error("Error initializing project: {0}")]
    Identity(#[from] IdentityError),

    /// The version subcommand could not render its output.
    #[error("Version command failed: {0}")]
    Version(#[from] AdapterError),

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or rendered.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Identity(e) => {
                let mut s = e.suggestions();
                s.push(format!(
                    "The project {} is fixed at build time; rebuild after correcting it",
                    e.field()
                ));
                s
            }

            Self::Version(AdapterError::ConflictingFlags { .. }) => vec![
                "Pass at most one of --short, --major, --major-minor, --prerelease".into(),
                "Use 'proj-meta version --help' for usage information".into(),
            ],
            Self::Version(_) => vec!["Check that stdout is writable".into()],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file (see 'proj-meta config path')".into(),
                "Environment overrides use the PROJ_META__ prefix".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that stdout is writable".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Identity(_) => ErrorCategory::Internal,
            Self::Version(AdapterError::ConflictingFlags { .. } | AdapterError::Matches(_)) => {
                ErrorCategory::UserError
            }
            Self::Version(AdapterError::Io(_)) => ErrorCategory::Internal,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Text of the tracing event emitted by [`Self::log`].
    ///
    /// Configuration errors already read "Configuration error: ..." and are
    /// logged as-is.
    fn log_message(&self) -> String {
        match self.category() {
            ErrorCategory::UserError => format!("User error: {self}"),
            ErrorCategory::Configuration => self.to_string(),
            ErrorCategory::Internal => format!("Internal error: {self}"),
        }
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        let message = self.log_message();
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("{}", message),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!("{}", message)
            }
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (conflicting flags).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error, including a malformed built-in identity.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proj_meta_core::domain::ProjectIdentity;
    use std::io;

    fn identity_error(name: &str, version: &str) -> CliError {
        CliError::from(ProjectIdentity::new(name, version).unwrap_err())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn identity_error_exits_one() {
        assert_eq!(identity_error("G Unit", "v1.0.0").exit_code(), 1);
        assert_eq!(identity_error("EHG", "LTS").exit_code(), 1);
    }

    #[test]
    fn conflicting_flags_exit_two() {
        let err = CliError::from(AdapterError::ConflictingFlags {
            flags: vec!["short", "major"],
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "e")).exit_code(),
            1
        );
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn identity_suggestions_name_the_field() {
        let err = identity_error("EHG", "");
        assert!(err.suggestions().iter().any(|s| s.contains("version")));
        let err = identity_error("", "v1.0.0");
        assert!(err.suggestions().iter().any(|s| s.contains("name")));
    }

    #[test]
    fn conflict_suggestions_list_flags() {
        let err = CliError::from(AdapterError::ConflictingFlags {
            flags: vec!["short", "major"],
        });
        assert!(err.suggestions().iter().any(|s| s.contains("--major-minor")));
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = identity_error("G Unit", "v1.0.0").format_plain(false);
        assert!(s.contains("Error: Error initializing project: multi-word project name"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn config_log_message_has_single_prefix() {
        let err = CliError::ConfigError {
            message: "failed to read configuration file".into(),
            source: None,
        };
        let msg = err.log_message();
        assert_eq!(
            msg,
            "Configuration error: failed to read configuration file"
        );
        assert_eq!(msg.matches("Configuration error:").count(), 1);
    }

    #[test]
    fn internal_log_message_is_prefixed() {
        let msg = identity_error("G Unit", "v1.0.0").log_message();
        assert!(msg.starts_with("Internal error: Error initializing project:"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let s = identity_error("EHG", "v1.0.0-beta!!").format_plain(true);
        assert!(s.contains("Caused by:"));
        assert!(!s.contains("--verbose"));
    }
}
