pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// Filtering follows `RUST_LOG` and defaults to `payment_analytics=info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("payment_analytics=info"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
