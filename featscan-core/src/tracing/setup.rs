//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "FEATSCAN_LOG";

static INIT: Once = Once::new();

/// Initialize the featscan logging system.
///
/// Reads `FEATSCAN_LOG` for per-module levels, e.g.
/// `FEATSCAN_LOG=featscan_analysis::engine=debug,featscan_core=warn`.
/// Falls back to `featscan=info` when unset or invalid.
///
/// Idempotent; later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("featscan=info"));

        // A host may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
