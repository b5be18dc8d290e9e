//! Result output

use crate::application::dto::CopyReport;
use crate::application::ResolveError;
use anyhow::Result;
use console::style;

/// Prints the human-readable outcome of a run
pub fn print_report(report: &CopyReport) {
    println!();
    if report.copied_count() == 0 {
        println!("{}", style(report.message()).yellow());
    } else {
        println!("{}", style(report.message()).green().bold());
    }
    println!();

    println!("Present in upscaled: {}", report.present_in_upscaled);
    if report.rejected_by_corner_check > 0 {
        println!(
            "Corner mismatch:     {}",
            style(report.rejected_by_corner_check).yellow()
        );
    }
    if report.skipped_non_files > 0 {
        println!("Not regular files:   {}", report.skipped_non_files);
    }
    if !report.failures.is_empty() {
        println!(
            "Failed copies:       {}",
            style(report.failures.len()).red()
        );
        for failure in &report.failures {
            println!("  {} ({})", failure.source.display(), failure.error);
        }
    }
    println!("Missing folder:      {}", report.missing_dir.display());
    println!();
}

/// Prints the report as pretty JSON on stdout
pub fn print_json(report: &CopyReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Prints a validation failure
pub fn print_invalid_directory(error: &ResolveError) {
    eprintln!("\n[!] {}", style(error).red().bold());
}
