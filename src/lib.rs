//! Copy source images that have no upscaled counterpart
//!
//! Images in a source directory are compared by case-insensitive base name
//! against an upscaled directory; those without a counterpart are copied to
//! a missing directory, optionally only when their four corner pixels
//! match a target colour.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use application::dto::ResolveOptions;
use application::{ResolveError, ResolveMissingUseCase};
use domain::entities::{ColorSpec, RgbColor};
use infrastructure::matchers::ImageCornerMatcher;
use infrastructure::persistence::LocalImageStore;
use std::path::Path;

/// Runs a resolve with the local filesystem and `image`-backed matcher
///
/// Returns the number of files copied.
pub fn resolve_and_copy(
    source_dir: &Path,
    upscaled_dir: &Path,
    missing_dir: &Path,
    filter_enabled: bool,
    target_color: RgbColor,
    threshold: u8,
) -> Result<usize, ResolveError> {
    let mut options = ResolveOptions::new(source_dir, upscaled_dir, missing_dir);
    if filter_enabled {
        options = options.with_corner_check(ColorSpec::new(target_color, threshold));
    }

    let use_case = ResolveMissingUseCase::new(LocalImageStore::new(), ImageCornerMatcher::new());
    Ok(use_case.execute(&options, None)?.copied_count())
}
