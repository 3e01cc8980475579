//! Tracing subscriber setup

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LoggingConfig};

/// Initialize tracing/logging
///
/// `RUST_LOG` wins over the configured filter. Fails if a global subscriber
/// is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.filter))?;

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let result = if config.json {
        // JSON logging for production (better for log aggregation)
        subscriber.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        // Pretty logging for development
        subscriber.with(tracing_subscriber::fmt::layer().pretty()).try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        json = config.json,
        "Logging initialized"
    );
    Ok(())
}
