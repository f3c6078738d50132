//! Structured logging with tracing
//!
//! Centralized logging configuration using the tracing ecosystem. The
//! filter is taken from the `SASH_LOG` environment variable when set,
//! falling back to the configured level.

use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use sash_domain::error::{Error, Result};

use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;

/// Initialize logging with the provided configuration
///
/// Safe to call more than once; only the first initialization wins, which
/// keeps repeated boots inside one process (tests, embedding) quiet.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    // json_format switches layer types, so the branches cannot share an init
    let initialized = if config.json_format {
        let stdout = fmt::layer().json().with_target(true);
        Registry::default().with(filter).with(stdout).try_init()
    } else {
        let stdout = fmt::layer().with_target(true);
        Registry::default().with(filter).with(stdout).try_init()
    };

    if initialized.is_ok() {
        info!("logging initialized with level: {}", level);
    }
    Ok(())
}

/// Parse log level string to tracing Level
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
