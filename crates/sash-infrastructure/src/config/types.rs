//! Configuration types

use serde::{Deserialize, Serialize};

use crate::constants::{COMMAND_REGISTRY_ID, COMMAND_TAG, DEFAULT_LOG_LEVEL};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shell wiring configuration
    pub shell: ShellConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Wiring of the command-discovery bridge
///
/// Both values are construction parameters of the discovery pass; nothing
/// in the container core hard-codes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Service id the command registry is registered under
    pub registry_id: String,

    /// Tag that marks a service definition as a console command
    pub command_tag: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            registry_id: COMMAND_REGISTRY_ID.to_string(),
            command_tag: COMMAND_TAG.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}
