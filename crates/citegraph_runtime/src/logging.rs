//! Log output for the command-line tool.
//!
//! The library crates only emit `tracing` events; installing a subscriber
//! is left to the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `citegraph_language=trace`.
pub const LOG_ENV: &str = "CITEGRAPH_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter for a run; `force_trace` overrides the environment.
#[must_use]
pub fn filter(force_trace: bool) -> EnvFilter {
    if force_trace {
        return EnvFilter::new("trace");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a formatting subscriber writing to stderr.
///
/// Does nothing if a global subscriber is already installed.
pub fn init(force_trace: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(force_trace))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
