use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use missing_imgs::application::dto::ResolveOptions;
use missing_imgs::application::ResolveMissingUseCase;
use missing_imgs::infrastructure::matchers::ImageCornerMatcher;
use missing_imgs::infrastructure::persistence::LocalImageStore;
use missing_imgs::presentation::cli::{
    init_logging, print_invalid_directory, print_json, print_report, run_interactive_wizard, Cli,
    ProgressReporter,
};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let options = match cli.resolve_options() {
        Some(options) => options,
        None => match run_interactive_wizard(&cli)? {
            Some(options) => options,
            None => return Ok(ExitCode::SUCCESS),
        },
    };

    run_resolve(&options, cli.json)
}

fn run_resolve(options: &ResolveOptions, json: bool) -> Result<ExitCode> {
    let use_case = ResolveMissingUseCase::new(LocalImageStore::new(), ImageCornerMatcher::new());

    let reporter = if json {
        ProgressReporter::hidden()
    } else {
        ProgressReporter::for_resolve()
    };

    let report = match use_case.execute(options, Some(reporter.resolve_callback())) {
        Ok(report) => report,
        Err(e) if e.is_validation() => {
            reporter.abandon();
            print_invalid_directory(&e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            reporter.abandon();
            return Err(e).context("Failed to copy missing images");
        }
    };

    reporter.finish("done");

    if json {
        print_json(&report)?;
    } else {
        print_report(&report);
    }

    Ok(ExitCode::SUCCESS)
}
