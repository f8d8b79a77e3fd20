//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber with the `info` default filter.
///
/// Safe to call multiple times (subsequent calls are no-ops), so tests can
/// call it unconditionally.
pub fn init() {
    init_with_filter("info");
}

/// Install with an explicit default filter; `RUST_LOG` still wins when set.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON lines + timestamps.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
