//! proj-meta Core - project identity domain
//!
//! This crate models the identity of a command-line program: a single-word
//! project name plus a canonical semantic version. Adapters (see
//! `proj-meta-adapters`) expose it as a `version` subcommand and a root
//! `--version` flag.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          proj-meta-cli (binary)         │
//! │   (startup identity, logging, config)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     proj-meta-adapters (clap glue)      │
//! │  (VersionArgs, version_command, ...)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectIdentity, DisplayMode, errors) │
//! │                No I/O                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use proj_meta_core::prelude::*;
//!
//! let identity = ProjectIdentity::new("Television", " v5.4.3\n").unwrap();
//! assert_eq!(identity.version(), "v5.4.3");
//! assert_eq!(identity.format(DisplayMode::MajorMinor), "5.4");
//! ```

pub mod domain;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::domain::{DisplayMode, Field, IdentityError, IdentityResult, ProjectIdentity};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
