//! Application layer
//!
//! Use cases that orchestrate domain logic.

pub mod dto;
mod error;
mod resolve_missing;

pub use error::{DirectoryRole, ResolveError};
pub use resolve_missing::{ResolveMissingUseCase, ResolveProgressCallback};
