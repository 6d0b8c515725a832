//! In-Memory History Store Adapter
//!
//! Stores bytes in memory. Useful for testing and for sessions that
//! should leave nothing on disk.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::{validate_key, HistoryStore, StoreError};

/// In-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryHistoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one key.
    pub fn with_entry(key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.into(), bytes.into());
        }
        store
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw bytes under `key`, bypassing key validation.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().ok().and_then(|e| e.get(key).cloned())
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_key(key)?;
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::io("in-memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::io("in-memory store lock poisoned"))?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
