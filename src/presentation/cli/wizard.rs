//! Interactive parameter collection

use crate::application::dto::ResolveOptions;
use crate::domain::entities::{ColorSpec, RgbColor};
use crate::presentation::cli::Cli;
use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::path::PathBuf;

/// Asks for whatever the command line left out
///
/// Returns `None` when the user declines the confirmation.
pub fn run_interactive_wizard(cli: &Cli) -> Result<Option<ResolveOptions>> {
    println!();
    println!("{}", style("missing-imgs - Find images that were never upscaled").cyan().bold());
    println!();

    let theme = ColorfulTheme::default();

    let source = ask_directory(&theme, "Source directory", cli.source.as_ref())?;
    let upscaled = ask_directory(&theme, "Upscaled directory", cli.upscaled.as_ref())?;
    let missing = ask_directory(&theme, "Missing directory", cli.missing.as_ref())?;

    let corner_check = Confirm::with_theme(&theme)
        .with_prompt("Enable corner color check?")
        .default(cli.corner_check)
        .interact()
        .context("Failed to read corner check choice")?;

    let mut options = ResolveOptions::new(source, upscaled, missing).with_dry_run(cli.dry_run);

    if corner_check {
        let color: RgbColor = Input::with_theme(&theme)
            .with_prompt("Corner color (#RRGGBB)")
            .default(cli.color)
            .interact_text()
            .context("Failed to read corner color")?;

        let threshold: u8 = Input::with_theme(&theme)
            .with_prompt("Threshold (0-255)")
            .default(cli.threshold)
            .interact_text()
            .context("Failed to read threshold")?;

        options = options.with_corner_check(ColorSpec::new(color, threshold));
    }

    print_operation_summary(&options);

    if !cli.yes {
        let confirmed = Confirm::with_theme(&theme)
            .with_prompt("Find and copy missing images?")
            .default(true)
            .interact()
            .context("Failed to confirm")?;

        if !confirmed {
            println!("\nOperation cancelled.");
            return Ok(None);
        }
    }

    Ok(Some(options))
}

fn ask_directory(
    theme: &ColorfulTheme,
    prompt: &str,
    given: Option<&PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = given {
        return Ok(path.clone());
    }

    let answer: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .with_context(|| format!("Failed to read {}", prompt.to_lowercase()))?;

    Ok(PathBuf::from(answer.trim()))
}

fn print_operation_summary(options: &ResolveOptions) {
    println!();
    println!("{}", style("Operation Summary:").cyan().bold());
    println!("Source:   {}", options.source_dir.display());
    println!("Upscaled: {}", options.upscaled_dir.display());
    println!("Missing:  {}", options.missing_dir.display());
    match &options.corner_check {
        Some(spec) => println!(
            "Corners:  {} (threshold {})",
            spec.target(),
            spec.threshold()
        ),
        None => println!("Corners:  not checked"),
    }
    if options.dry_run {
        println!("Mode:     dry run");
    }
    println!();
}
