//! Infrastructure layer for the sash administration shell.
//!
//! Cross-cutting technical concerns: configuration loading, structured
//! logging, error-context helpers, and the composition root that boots the
//! service container from configuration.

pub mod boot;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use boot::boot;
pub use config::{AppConfig, ConfigLoader, LoggingConfig, ShellConfig};
pub use logging::init_logging;
