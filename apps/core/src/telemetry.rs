//! Tracing initialization.
//!
//! `SUPPORTBOT_LOG` holds an `EnvFilter` directive (default `supportbot=info,supportbot_core=info`).
//! `SUPPORTBOT_LOG_FORMAT=json` switches to JSON lines.

use std::env;
use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive variable
pub const ENV_LOG: &str = "SUPPORTBOT_LOG";
/// Output format variable (`json` or anything else for plain text)
pub const ENV_LOG_FORMAT: &str = "SUPPORTBOT_LOG_FORMAT";

const DEFAULT_FILTER: &str = "supportbot=info,supportbot_core=info";

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let json = env::var(ENV_LOG_FORMAT)
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        // Logs go to stderr so the terminal harness can keep stdout for replies
        if json {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
