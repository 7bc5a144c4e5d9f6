//! Logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize the global `tracing` subscriber.
///
/// Respects `RUST_LOG` if set, otherwise defaults to `info`.
/// Call once at the start of `main`; calling twice panics.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
