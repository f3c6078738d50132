//! Shell configuration
//!
//! Configuration types plus the figment-based loader that merges defaults,
//! the TOML file, and environment overrides.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, ShellConfig};
