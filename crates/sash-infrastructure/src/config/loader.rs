//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values, merged with Figment.

use std::env;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use tracing::{info, warn};

use sash_domain::error::Result;

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix; double underscore separates
    ///    nesting so key names may themselves contain underscores
    ///    (e.g. `SASH_SHELL__REGISTRY_ID`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                info!("configuration loaded from {}", config_path.display());
            } else {
                warn!("configuration file not found: {}", config_path.display());
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            info!("configuration loaded from {}", default_path.display());
        }

        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .config_context("failed to extract configuration")?;

        self.validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string)?;
        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find a default configuration file in the working directory
    fn find_default_config_path() -> Option<PathBuf> {
        let candidate = env::current_dir().ok()?.join(DEFAULT_CONFIG_FILENAME);
        candidate.exists().then_some(candidate)
    }

    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        parse_log_level(&config.logging.level)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
