//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories and services.
//! This layer contains all external dependencies: image decoding and
//! filesystem access.

pub mod matchers;
pub mod persistence;
