//! Logging setup using the `tracing` ecosystem.
//!
//! Diagnostics go to stderr so they never mix with the report printed on
//! stdout. The level is picked from the CLI flags first, then `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "transpile=warn";

/// Build the filter for the given verbosity flags.
///
/// `verbose` wins over `quiet`. Without either flag `RUST_LOG` is honoured,
/// falling back to warnings only.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("transpile=debug")
    } else if quiet {
        EnvFilter::new("transpile=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the global tracing subscriber.
///
/// Must be called at most once per process; later calls are ignored.
pub fn init_logger(verbose: bool, quiet: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .compact();

    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}
