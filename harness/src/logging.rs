//! Tracing initialization for the binaries.
//!
//! Library code only emits events; installing a subscriber is left to
//! `main`, so tests and embedders stay in control of output.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PATHFIND_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "pathfind=info";

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls do nothing.
///
/// Reads per-target levels from `PATHFIND_LOG`, e.g.
/// `PATHFIND_LOG=pathfind_search=trace,pathfind_harness=debug`. Events go to
/// stderr so that rendered results on stdout stay clean.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
