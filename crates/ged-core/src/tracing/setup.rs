//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the GED tracing/logging system.
///
/// Reads the `GED_LOG` environment variable for per-module log levels.
/// Format: `GED_LOG=ged_analysis::ingest=debug,ged_analysis::cache=info`
///
/// Falls back to `ged=info` if `GED_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("GED_LOG").unwrap_or_else(|_| EnvFilter::new("ged=info"));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
