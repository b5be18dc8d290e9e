//! CLI module

mod commands;
mod logging;
mod output;
mod progress;
mod wizard;

pub use commands::Cli;
pub use logging::init_logging;
pub use output::{print_invalid_directory, print_json, print_report};
pub use progress::ProgressReporter;
pub use wizard::run_interactive_wizard;
