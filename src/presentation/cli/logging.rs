//! Logging setup

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects debug, `--verbose`
/// info, and warnings only are shown by default.
pub fn init_logging(verbose: bool, debug: bool) {
    let default_level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
