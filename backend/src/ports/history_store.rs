//! History Store Port - Interface for persisting the decision history.
//!
//! The store is a plain key-value byte store. It knows nothing about
//! decisions; encoding lives in the application layer.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Invalid store key '{0}'")]
    InvalidKey(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl StoreError {
    pub fn io(message: impl Into<String>) -> Self {
        StoreError::Io(message.into())
    }

    pub fn permission_denied(path: impl Into<String>) -> Self {
        StoreError::PermissionDenied(path.into())
    }
}

/// Port for loading and saving serialized history.
///
/// Calls are synchronous and complete before returning.
pub trait HistoryStore: Send + Sync {
    /// Load the bytes stored under `key`.
    ///
    /// # Returns
    /// `Ok(None)` when nothing has been stored under the key yet.
    ///
    /// # Errors
    /// Returns `StoreError` if the store could not be read.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the bytes stored under `key`.
    ///
    /// # Errors
    /// Returns `StoreError` if the write failed. Previously stored bytes
    /// must survive a failed write.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;
}

/// Checks a key is usable by every adapter.
///
/// Keys are non-empty and limited to ASCII letters, digits, `-`, `_` and `.`,
/// without a leading dot.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
