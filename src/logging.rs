//! Diagnostic logging setup for the binary.
//!
//! The library only emits `tracing` events. The CLI installs a subscriber
//! writing to stderr, so stdout stays clean for command output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter, e.g. `chapnav=debug`.
pub const LOG_ENV: &str = "CHAPNAV_LOG";

/// Filter directive for a `-v` count: 0 → warn, 1 → info, 2+ → debug.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "chapnav=warn",
        1 => "chapnav=info",
        _ => "chapnav=debug",
    }
}

/// Install the stderr subscriber. `CHAPNAV_LOG` wins over `verbosity`.
#[cfg(not(tarpaulin_include))]
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
