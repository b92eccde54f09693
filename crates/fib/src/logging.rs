//! Tracing subscriber setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::EnvFilter;

/// Crates raised to `debug` by `--verbose`.
const VERBOSE_TARGETS: [&str; 4] = ["fib_core", "fib_orchestration", "fib_cli", "fib_lib"];

/// Build the filter from `RUST_LOG`: its directives win, `warn` applies when
/// it is unset or empty, and `verbose` adds `debug` for this workspace's crates.
///
/// # Errors
///
/// Returns an error if a built-in directive fails to parse.
pub fn env_filter(verbose: bool) -> Result<EnvFilter, ParseError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    filter_for(&rust_log, verbose)
}

/// Build the filter for the given `RUST_LOG` value.
///
/// # Errors
///
/// Returns an error if a built-in directive fails to parse.
pub fn filter_for(rust_log: &str, verbose: bool) -> Result<EnvFilter, ParseError> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(rust_log);
    if verbose {
        for target in VERBOSE_TARGETS {
            filter = filter.add_directive(format!("{target}=debug").parse::<Directive>()?);
        }
    }
    Ok(filter)
}

/// Install the global subscriber, writing to stderr.
///
/// Does nothing if a subscriber is already installed.
///
/// # Errors
///
/// Returns an error if a built-in directive fails to parse.
pub fn init(verbose: bool) -> Result<(), ParseError> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose)?)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
