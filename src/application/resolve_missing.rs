//! Resolve missing images use case
//!
//! Finds the source images that have no counterpart in the upscaled
//! directory and copies them to the missing directory.

use crate::application::dto::{CopyReport, ResolveOptions};
use crate::application::error::{DirectoryRole, ResolveError};
use crate::domain::entities::{DirectorySnapshot, ImageFile};
use crate::domain::repositories::ImageStore;
use crate::domain::services::CornerMatcher;
use std::path::Path;
use std::time::Instant;

/// Progress callback: (current entry, total entries)
pub type ResolveProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Resolve missing images use case
///
/// A source file is copied if its case-folded base name is absent from the
/// upscaled directory and, when the corner check is enabled, its four
/// corners match the target colour.
pub struct ResolveMissingUseCase<S: ImageStore, M: CornerMatcher> {
    store: S,
    matcher: M,
}

impl<S: ImageStore, M: CornerMatcher> ResolveMissingUseCase<S, M> {
    /// Creates a new resolve use case
    pub fn new(store: S, matcher: M) -> Self {
        Self { store, matcher }
    }

    /// Executes the run
    ///
    /// Invalid input directories abort before anything is created. A
    /// failed copy is logged and recorded in the report; the remaining
    /// files are still processed.
    pub fn execute(
        &self,
        options: &ResolveOptions,
        progress_callback: Option<ResolveProgressCallback>,
    ) -> Result<CopyReport, ResolveError> {
        let start_time = Instant::now();

        self.validate(options)?;

        if !options.dry_run {
            self.store
                .ensure_directory(&options.missing_dir)
                .map_err(|source| ResolveError::CreateMissingDir {
                    path: options.missing_dir.clone(),
                    source,
                })?;
        }

        let upscaled = self.list(&options.upscaled_dir)?;
        let snapshot = DirectorySnapshot::capture(&upscaled);
        let sources = self.list(&options.source_dir)?;
        let total = sources.len();

        tracing::info!(
            "Comparing {} source entries against {} upscaled base names",
            total,
            snapshot.len()
        );
        if let Some(spec) = &options.corner_check {
            tracing::info!(
                "Corner check enabled: target {} threshold {}",
                spec.target(),
                spec.threshold()
            );
        }

        let mut report = CopyReport::new(
            &options.source_dir,
            &options.upscaled_dir,
            &options.missing_dir,
            options.dry_run,
        );

        for (index, file) in sources.iter().enumerate() {
            if let Some(ref callback) = progress_callback {
                callback(index + 1, total);
            }

            self.process(file, &snapshot, options, &mut report);
        }

        report.duration = start_time.elapsed();

        tracing::info!(
            "Resolve complete: {} files flagged as missing in {:.2}s",
            report.copied_count(),
            report.duration.as_secs_f64()
        );

        Ok(report)
    }

    fn validate(&self, options: &ResolveOptions) -> Result<(), ResolveError> {
        let inputs = [
            (DirectoryRole::Source, &options.source_dir),
            (DirectoryRole::Upscaled, &options.upscaled_dir),
        ];

        for (role, path) in inputs {
            if !self.store.is_directory(path) {
                return Err(ResolveError::InvalidDirectory {
                    role,
                    path: path.clone(),
                });
            }
        }
        Ok(())
    }

    fn list(&self, dir: &Path) -> Result<Vec<ImageFile>, ResolveError> {
        self.store
            .list(dir)
            .map_err(|source| ResolveError::ListDirectory {
                path: dir.to_path_buf(),
                source,
            })
    }

    fn process(
        &self,
        file: &ImageFile,
        snapshot: &DirectorySnapshot,
        options: &ResolveOptions,
        report: &mut CopyReport,
    ) {
        if !file.is_file() {
            tracing::debug!("Skipping {}: not a regular file", file.file_name());
            report.skipped_non_files += 1;
            return;
        }

        if snapshot.contains(file.base_name()) {
            tracing::debug!("Skipping {}: present in upscaled", file.file_name());
            report.present_in_upscaled += 1;
            return;
        }

        if let Some(spec) = &options.corner_check {
            if !self.matcher.matches(file.path(), spec) {
                tracing::debug!("Skipping {}: corners do not match", file.file_name());
                report.rejected_by_corner_check += 1;
                return;
            }
        }

        if options.dry_run {
            let destination = options.missing_dir.join(file.path().file_name().unwrap_or_default());
            report.add_copied(file.path(), destination);
            return;
        }

        match self.store.copy_into(file, &options.missing_dir) {
            Ok(destination) => report.add_copied(file.path(), destination),
            Err(e) => {
                tracing::warn!("Failed to copy {}: {}", file.path().display(), e);
                report.add_failure(file.path(), e.to_string());
            }
        }
    }
}
