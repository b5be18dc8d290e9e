//! Data Transfer Objects

mod copy_report;
mod resolve_options;

pub use copy_report::{CopiedFile, CopyFailure, CopyReport, Outcome};
pub use resolve_options::ResolveOptions;
