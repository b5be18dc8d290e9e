//! Domain entities
//!
//! Core objects of the missing-image comparison: directory entries,
//! colours and base-name snapshots.

mod color;
mod image_file;
mod snapshot;

pub use color::{ColorParseError, ColorSpec, Corners, RgbColor, DEFAULT_THRESHOLD};
pub use image_file::{EntryKind, ImageFile};
pub use snapshot::DirectorySnapshot;
