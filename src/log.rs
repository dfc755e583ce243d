// src/log.rs
//
// Log output for the binary. Library code only emits `tracing` events;
// this wires them to stderr so stdout stays clean for results.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_ENV};

/// Filter from `BABYNAMES_LOG` if set, else by `-v` count.
fn filter_for(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => DEFAULT_LOG_FILTER,
            1 => "info",
            _ => "debug",
        })
    })
}

/// Install the global subscriber. Safe to call twice; the second call is a no-op.
pub fn init(verbosity: u8) {
    let _ = fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
