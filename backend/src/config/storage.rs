//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::application::DEFAULT_HISTORY_KEY;
use crate::domain::decision::DEFAULT_MAX_RETAINED;
use crate::ports::validate_key;

/// Upper bound accepted for `max_history`
pub const MAX_HISTORY_LIMIT: usize = 100;

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the history file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key the history is stored under
    #[serde(default = "default_history_key")]
    pub history_key: String,

    /// Number of finalized decisions retained
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__DATA_DIR"));
        }
        if validate_key(&self.history_key).is_err() {
            return Err(ValidationError::InvalidHistoryKey(self.history_key.clone()));
        }
        if self.max_history == 0 || self.max_history > MAX_HISTORY_LIMIT {
            return Err(ValidationError::InvalidHistorySize {
                max: MAX_HISTORY_LIMIT,
                actual: self.max_history,
            });
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            history_key: default_history_key(),
            max_history: default_max_history(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_history_key() -> String {
    DEFAULT_HISTORY_KEY.to_string()
}

fn default_max_history() -> usize {
    DEFAULT_MAX_RETAINED
}
