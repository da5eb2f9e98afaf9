//! Development-time tracing for the harness and fixture binaries.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's choice. Reports and persisted directories are unaffected by
//! `RUST_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Calling this twice in one process is a no-op for the second call.
///
/// ```bash
/// RUST_LOG=contingency_search=trace cargo run --bin plan_fixture
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
