//! Corner matcher trait
//!
//! Defines the interface for checking an image's corner pixels against a
//! target colour.

use crate::domain::entities::{ColorSpec, Corners};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while sampling corner pixels
#[derive(Error, Debug)]
pub enum CornerCheckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot decode image: {0}")]
    Decode(String),

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// Trait for checking whether an image's corners match a colour
///
/// Implementations only have to sample the four corners; the comparison
/// and the error policy are shared.
///
/// # Example
///
/// ```ignore
/// let matcher = ImageCornerMatcher::new();
/// let spec = ColorSpec::with_default_threshold(RgbColor::BLACK);
/// if matcher.matches(Path::new("scan_001.png"), &spec) {
///     println!("black border");
/// }
/// ```
pub trait CornerMatcher {
    /// Reads the four corner pixels of the image at `path`
    ///
    /// Only the first three channels are returned; alpha is dropped.
    fn sample_corners(&self, path: &Path) -> Result<Corners, CornerCheckError>;

    /// Returns true if all four corners are within the spec's threshold
    ///
    /// Never fails: unreadable, corrupt or empty images are logged and
    /// reported as non-matching.
    fn matches(&self, path: &Path, spec: &ColorSpec) -> bool {
        match self.sample_corners(path) {
            Ok(corners) => spec.matches_corners(&corners),
            Err(e) => {
                tracing::warn!("Error processing image {}: {}", path.display(), e);
                false
            }
        }
    }
}
