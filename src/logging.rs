//! Logging setup
//!
//! The library itself only emits `tracing` events; applications that want
//! console output can call [`enable_logging`] once at startup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install a console subscriber filtered by `RUST_LOG`, defaulting to the
/// given level for this crate when the environment variable is unset.
///
/// Returns quietly if a global subscriber is already set.
pub fn enable_logging(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("inat_client={level}")));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
