//! Tracing Setup
//!
//! Console logging for the command-line builder. Output goes to stderr so
//! stdout carries only the request JSON.
//!
//! - `RUST_LOG`: Log filter (default: info)

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
