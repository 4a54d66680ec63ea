//! Log output setup for the binary
//!
//! Logs go to stderr so they never interleave with prompt output on stdout.

use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` when set, otherwise `default_level`
pub fn env_filter(default_level: tracing::Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()))
}

/// Installs the global subscriber. Call once, from `main`.
pub fn init_logging(default_level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(level = %default_level, "Logging initialized");
}
