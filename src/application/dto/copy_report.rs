//! Copy report DTO

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A source file flagged as missing and copied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// A source file that was flagged but could not be copied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyFailure {
    pub source: PathBuf,
    pub error: String,
}

/// Summary outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    NoneMissing,
    Copied(usize),
}

impl Outcome {
    /// Returns the user-facing status message
    pub fn message(&self) -> String {
        match self {
            Outcome::NoneMissing => "No files were flagged as missing.".to_string(),
            Outcome::Copied(n) => format!(
                "Flagged {} files as missing and copied to the missing directory.",
                n
            ),
        }
    }
}

/// Result of a resolve run
#[derive(Debug, Clone, Serialize)]
pub struct CopyReport {
    pub source_dir: PathBuf,
    pub upscaled_dir: PathBuf,
    pub missing_dir: PathBuf,
    /// Nothing was created or copied
    pub dry_run: bool,
    /// Files copied (or, in a dry run, that would have been)
    pub copied: Vec<CopiedFile>,
    /// Source files with a same-base-name counterpart in the upscaled directory
    pub present_in_upscaled: usize,
    /// Missing files whose corners did not match the target colour
    pub rejected_by_corner_check: usize,
    /// Source entries that are not regular files
    pub skipped_non_files: usize,
    pub failures: Vec<CopyFailure>,
    pub duration: Duration,
}

impl CopyReport {
    /// Creates an empty report
    pub fn new(source_dir: &Path, upscaled_dir: &Path, missing_dir: &Path, dry_run: bool) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
            upscaled_dir: upscaled_dir.to_path_buf(),
            missing_dir: missing_dir.to_path_buf(),
            dry_run,
            copied: Vec::new(),
            present_in_upscaled: 0,
            rejected_by_corner_check: 0,
            skipped_non_files: 0,
            failures: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    pub fn add_copied(&mut self, source: &Path, destination: PathBuf) {
        self.copied.push(CopiedFile {
            source: source.to_path_buf(),
            destination,
        });
    }

    pub fn add_failure(&mut self, source: &Path, error: String) {
        self.failures.push(CopyFailure {
            source: source.to_path_buf(),
            error,
        });
    }

    pub fn copied_count(&self) -> usize {
        self.copied.len()
    }

    /// Number of source entries looked at
    pub fn examined(&self) -> usize {
        self.copied.len()
            + self.present_in_upscaled
            + self.rejected_by_corner_check
            + self.skipped_non_files
            + self.failures.len()
    }

    pub fn outcome(&self) -> Outcome {
        match self.copied_count() {
            0 => Outcome::NoneMissing,
            n => Outcome::Copied(n),
        }
    }

    /// Returns the status line shown to the user
    pub fn message(&self) -> String {
        match (self.outcome(), self.dry_run) {
            (Outcome::Copied(n), true) => {
                format!("Flagged {} files as missing (dry run, nothing copied).", n)
            }
            (outcome, _) => outcome.message(),
        }
    }

    /// Returns a multi-line summary
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str(&self.message());
        summary.push('\n');
        summary.push_str(&format!(
            "Examined {} entries in {:.2}s\n",
            self.examined(),
            self.duration.as_secs_f64()
        ));
        summary.push_str(&format!(
            "  - present in upscaled: {}\n",
            self.present_in_upscaled
        ));
        if self.rejected_by_corner_check > 0 {
            summary.push_str(&format!(
                "  - rejected by corner check: {}\n",
                self.rejected_by_corner_check
            ));
        }
        if self.skipped_non_files > 0 {
            summary.push_str(&format!(
                "  - not regular files: {}\n",
                self.skipped_non_files
            ));
        }
        if !self.failures.is_empty() {
            summary.push_str(&format!("\n{} copies failed\n", self.failures.len()));
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_none_missing() {
        let report = CopyReport::new(Path::new("s"), Path::new("u"), Path::new("m"), false);
        assert_eq!(report.outcome(), Outcome::NoneMissing);
        assert_eq!(report.message(), "No files were flagged as missing.");
    }

    #[test]
    fn test_copied_message_includes_count() {
        let mut report = CopyReport::new(Path::new("s"), Path::new("u"), Path::new("m"), false);
        report.add_copied(Path::new("s/a.png"), PathBuf::from("m/a.png"));
        report.add_copied(Path::new("s/b.png"), PathBuf::from("m/b.png"));

        assert_eq!(report.outcome(), Outcome::Copied(2));
        assert_eq!(
            report.message(),
            "Flagged 2 files as missing and copied to the missing directory."
        );
    }

    #[test]
    fn test_failures_do_not_count_as_copied() {
        let mut report = CopyReport::new(Path::new("s"), Path::new("u"), Path::new("m"), false);
        report.add_failure(Path::new("s/gone.png"), "Not found".to_string());

        assert_eq!(report.copied_count(), 0);
        assert_eq!(report.examined(), 1);
        assert!(report.summary().contains("1 copies failed"));
    }
}
