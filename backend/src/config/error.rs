//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid history key: {0}")]
    InvalidHistoryKey(String),

    #[error("History size must be between 1 and {max}, got {actual}")]
    InvalidHistorySize { max: usize, actual: usize },

    #[error("Invalid scoring configuration: {0}")]
    InvalidScoring(#[from] crate::domain::foundation::ValidationError),
}
