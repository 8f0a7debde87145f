//! Diagnostic logging for the binary.
//!
//! Logs go to stderr so stdout carries only the report. The filter comes from
//! `TRACKER_LOG`, then `RUST_LOG`, and defaults to `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TRACKER_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Calling it twice is harmless.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .try_init();
}
