//! Domain services
//!
//! Decisions made about individual image files.

mod corner_matcher;

pub use corner_matcher::{CornerCheckError, CornerMatcher};
