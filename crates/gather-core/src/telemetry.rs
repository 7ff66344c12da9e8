//! Tracing subscriber setup for binaries and tools embedding the crates.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::constants::DEFAULT_LOG_LEVEL;

/// ## Summary
/// Parses a filter directive, falling back to the default level when invalid.
#[must_use]
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|err| {
        tracing::warn!(level, error = %err, "Invalid log level in config, using default");
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    })
}

/// ## Summary
/// Installs the global tracing subscriber.
///
/// ## Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    tracing::info!(level = %config.level, "Tracing initialized");
    Ok(())
}
