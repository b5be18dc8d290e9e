//! Resolve options DTO

use crate::domain::entities::ColorSpec;
use std::path::PathBuf;

/// Options for one missing-image run
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Directory holding the original images
    pub source_dir: PathBuf,
    /// Directory holding the upscaled images
    pub upscaled_dir: PathBuf,
    /// Destination for images missing from the upscaled directory
    pub missing_dir: PathBuf,
    /// Corner colour filter (None = disabled)
    pub corner_check: Option<ColorSpec>,
    /// Report what would be copied without touching the filesystem
    pub dry_run: bool,
}

impl ResolveOptions {
    /// Creates options with the corner check disabled
    pub fn new(
        source_dir: impl Into<PathBuf>,
        upscaled_dir: impl Into<PathBuf>,
        missing_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            upscaled_dir: upscaled_dir.into(),
            missing_dir: missing_dir.into(),
            corner_check: None,
            dry_run: false,
        }
    }

    /// Enables the corner check
    pub fn with_corner_check(mut self, spec: ColorSpec) -> Self {
        self.corner_check = Some(spec);
        self
    }

    /// Sets dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn corner_check_enabled(&self) -> bool {
        self.corner_check.is_some()
    }
}
