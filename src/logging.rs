//! Logging setup
//!
//! Services emit `tracing` events; the binary installs a subscriber that
//! writes them to stderr so table output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `debug` or
/// `expense_tracker::services=info`
pub const LOG_ENV_VAR: &str = "EXPENSES_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter from `EXPENSES_LOG`, falling back to `warn`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber
///
/// `verbose` raises the default level to `info` when `EXPENSES_LOG` is unset.
/// Calling this twice is harmless; the second install is ignored.
pub fn init(verbose: bool) {
    let filter = if verbose && std::env::var_os(LOG_ENV_VAR).is_none() {
        EnvFilter::new("info")
    } else {
        env_filter()
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
