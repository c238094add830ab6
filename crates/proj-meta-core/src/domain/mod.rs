//! Core domain layer for proj-meta.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Formatting returns strings; printing is the adapters' job
//! - **Immutable values**: `ProjectIdentity` is set once and never mutated
//!
// Public API - what the world sees
pub mod display;
pub mod error;
pub mod identity;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use display::DisplayMode;
pub use error::{Field, IdentityError, IdentityResult};
pub use identity::ProjectIdentity;
