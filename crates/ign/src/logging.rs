//! Structured logging with tracing
//!
//! Level comes from configuration unless the `IGN_LOG` environment variable
//! overrides it with a full filter expression.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use ign_domain::{Error, Result};

use crate::constants::LOG_ENV_VAR;
pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// A second initialization in the same process is a no-op, so embedding
/// applications and tests may call this freely.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    // validate the configured level even when IGN_LOG overrides it
    parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json_format {
        let _ = tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    }
    Ok(())
}

/// Parse a log level string to a tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}
