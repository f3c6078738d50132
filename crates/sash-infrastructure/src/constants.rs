//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `sash_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "sash.toml";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SASH";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for a log filter before the config value
pub const LOG_FILTER_ENV: &str = "SASH_LOG";

// Re-export domain constants for convenience
pub use sash_domain::constants::*;
