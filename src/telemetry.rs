//! Tracing setup
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host. These helpers install a compact stderr subscriber scoped to
//! this crate's events unless a wider filter is asked for.

use tracing_subscriber::EnvFilter;

/// Filter used when the caller's filter string does not parse.
pub const DEFAULT_FILTER: &str = "ringbuffer=debug";

fn filter_or_default(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing from `RUST_LOG`. Does nothing when it is unset.
pub fn init_tracing() {
    if let Ok(filter) = std::env::var("RUST_LOG") {
        init_tracing_with_filter(&filter);
    }
}

/// Install a stderr subscriber with `filter`. A second call is a no-op.
pub fn init_tracing_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or_default(filter))
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}

/// Subscriber for tests: buffer events down to `trace`, captured per test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or_default("ringbuffer=trace"))
        .with_test_writer()
        .try_init();
}
