//! CLI commands using clap

use crate::application::dto::ResolveOptions;
use crate::domain::entities::{ColorSpec, RgbColor, DEFAULT_THRESHOLD};
use clap::Parser;
use std::path::PathBuf;

/// missing-imgs - Find images that were never upscaled
///
/// Copies every file of the source directory whose base name (extension
/// ignored, case-insensitive) does not appear in the upscaled directory
/// into the missing directory. Directories left out on the command line
/// are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "missing-imgs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Copy images missing from an upscaled folder", long_about = None)]
pub struct Cli {
    /// Directory with the original images
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Directory with the upscaled images
    #[arg(short, long)]
    pub upscaled: Option<PathBuf>,

    /// Directory that receives the missing images (created if needed)
    #[arg(short, long)]
    pub missing: Option<PathBuf>,

    /// Only copy images whose four corners match --color
    #[arg(short = 'c', long)]
    pub corner_check: bool,

    /// Corner colour as #RRGGBB
    #[arg(long, default_value = "#000000")]
    pub color: RgbColor,

    /// Maximum per-channel difference from --color (0-255)
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Report what would be copied without copying
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Returns the corner colour spec built from --color and --threshold
    pub fn color_spec(&self) -> ColorSpec {
        ColorSpec::new(self.color, self.threshold)
    }

    /// Builds options when all three directories were given
    pub fn resolve_options(&self) -> Option<ResolveOptions> {
        let (Some(source), Some(upscaled), Some(missing)) =
            (&self.source, &self.upscaled, &self.missing)
        else {
            return None;
        };

        let mut options = ResolveOptions::new(source, upscaled, missing).with_dry_run(self.dry_run);
        if self.corner_check {
            options = options.with_corner_check(self.color_spec());
        }
        Some(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_directories_build_options() {
        let cli = Cli::parse_from([
            "missing-imgs",
            "-s",
            "src",
            "-u",
            "up",
            "-m",
            "miss",
            "-c",
            "--color",
            "#FF0000",
            "-t",
            "25",
        ]);

        let options = cli.resolve_options().unwrap();
        assert_eq!(options.source_dir, PathBuf::from("src"));
        assert_eq!(
            options.corner_check,
            Some(ColorSpec::new(RgbColor::new(255, 0, 0), 25))
        );
        assert!(!options.dry_run);
    }

    #[test]
    fn test_missing_directory_falls_back_to_wizard() {
        let cli = Cli::parse_from(["missing-imgs", "-s", "src", "-u", "up"]);
        assert!(cli.resolve_options().is_none());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["missing-imgs"]);
        assert_eq!(cli.color, RgbColor::BLACK);
        assert_eq!(cli.threshold, 10);
        assert!(!cli.corner_check);
    }

    #[test]
    fn test_malformed_color_is_rejected() {
        assert!(Cli::try_parse_from(["missing-imgs", "--color", "#12345"]).is_err());
        assert!(Cli::try_parse_from(["missing-imgs", "--color", "#zzzzzz"]).is_err());
    }

    #[test]
    fn test_threshold_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["missing-imgs", "-t", "256"]).is_err());
    }
}
