//! Tracing setup for the server binary.

use tracing_subscriber::EnvFilter;

/// Initialises the global fmt subscriber.
///
/// Honours `RUST_LOG` via [`EnvFilter`] and defaults to `info`. Safe to call
/// more than once; later calls are ignored when a subscriber is already
/// installed.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ignored = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
