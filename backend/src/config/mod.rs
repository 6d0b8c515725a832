//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! `regret-minimizer.toml` file and environment variables using the `config`
//! and `dotenvy` crates. Environment variables use the `REGRET_MINIMIZER`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use regret_minimizer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("History stored in {}", config.storage.data_dir.display());
//! ```

mod error;
mod logging;
mod scoring;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use scoring::ScoringConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

use crate::application::SessionConfig;

/// Base name of the optional configuration file (any format `config` reads).
pub const CONFIG_FILE_NAME: &str = "regret-minimizer";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where and how history is stored
    #[serde(default)]
    pub storage: StorageConfig,

    /// Loss-aversion factor control
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `regret-minimizer.{toml,yaml,json}` from the working directory if present
    /// 3. Reads environment variables with `REGRET_MINIMIZER` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `REGRET_MINIMIZER__STORAGE__DATA_DIR=/tmp/x` -> `storage.data_dir = /tmp/x`
    /// - `REGRET_MINIMIZER__SCORING__DEFAULT_FACTOR=2.5` -> `scoring.default_factor = 2.5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(
                config::Environment::default()
                    .prefix("REGRET_MINIMIZER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.scoring.validate()?;
        Ok(())
    }

    /// Session tunables derived from this configuration
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            history_key: self.storage.history_key.clone(),
            max_history: self.storage.max_history,
            factor_policy: self.scoring.factor_policy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            "REGRET_MINIMIZER__STORAGE__DATA_DIR",
            "REGRET_MINIMIZER__STORAGE__MAX_HISTORY",
            "REGRET_MINIMIZER__SCORING__DEFAULT_FACTOR",
            "REGRET_MINIMIZER__LOGGING__JSON",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_with_empty_env_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();

        assert_eq!(config.storage.history_key, "decision_history");
        assert_eq!(config.storage.max_history, 10);
        assert_eq!(config.scoring.default_factor, 2.0);
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_reads_nested_env_vars() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("REGRET_MINIMIZER__STORAGE__DATA_DIR", "/tmp/regret-test");
        env::set_var("REGRET_MINIMIZER__STORAGE__MAX_HISTORY", "5");
        env::set_var("REGRET_MINIMIZER__SCORING__DEFAULT_FACTOR", "3.5");

        let config = AppConfig::load().unwrap();
        clear_env();

        assert_eq!(config.storage.data_dir.to_str(), Some("/tmp/regret-test"));
        assert_eq!(config.storage.max_history, 5);
        assert_eq!(config.scoring.default_factor, 3.5);
    }

    #[test]
    fn test_session_config_carries_policy_and_cap() {
        let config = AppConfig::default();
        let session = config.session_config();
        assert_eq!(session.max_history, 10);
        assert_eq!(session.history_key, "decision_history");
        assert_eq!(session.factor_policy.max, 5.0);
    }

    #[test]
    fn test_validate_propagates_section_errors() {
        let mut config = AppConfig::default();
        config.storage.max_history = 0;
        assert!(config.validate().is_err());
    }
}
