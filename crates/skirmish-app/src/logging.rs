//! Subscriber setup for the host binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global fmt subscriber. `RUST_LOG` wins over `default_filter`;
/// an unparsable filter falls back to `info`. Safe to call more than once.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_thread_names(true))
        .try_init();
}
