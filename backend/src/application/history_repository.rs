//! Loads and persists the decision history through a [`HistoryStore`].

use std::sync::Arc;

use thiserror::Error;

use super::{CodecError, HistoryCodec};
use crate::domain::decision::DecisionHistory;
use crate::ports::{HistoryStore, StoreError};

/// Storage key used when none is configured.
pub const DEFAULT_HISTORY_KEY: &str = "decision_history";

/// Failure to read or write persisted history.
///
/// Never fatal: the in-memory history stays authoritative for the session.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("History store failed: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Binds a store handle to the key and codec used for history.
#[derive(Clone)]
pub struct HistoryRepository {
    store: Arc<dyn HistoryStore>,
    key: String,
}

impl HistoryRepository {
    pub fn new(store: Arc<dyn HistoryStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored history.
    ///
    /// Absent data yields an empty history.
    ///
    /// # Errors
    /// `PersistenceError` when the store fails or the bytes are malformed.
    pub fn load(&self) -> Result<DecisionHistory, PersistenceError> {
        match self.store.load(&self.key)? {
            Some(bytes) => Ok(HistoryCodec::decode(&bytes)?),
            None => Ok(DecisionHistory::new()),
        }
    }

    /// Reads the stored history, degrading any failure to an empty history.
    ///
    /// The failure, if any, is logged and handed back so the caller can
    /// tell the user.
    pub fn load_or_empty(&self) -> (DecisionHistory, Option<PersistenceError>) {
        match self.load() {
            Ok(history) => {
                tracing::debug!(key = %self.key, entries = history.len(), "History loaded");
                (history, None)
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "History unavailable, starting empty");
                (DecisionHistory::new(), Some(e))
            }
        }
    }

    /// Writes the full history under the configured key.
    pub fn save(&self, history: &DecisionHistory) -> Result<(), PersistenceError> {
        let bytes = HistoryCodec::encode(history)?;
        self.store.save(&self.key, &bytes)?;
        tracing::debug!(key = %self.key, entries = history.len(), "History saved");
        Ok(())
    }
}

impl std::fmt::Debug for HistoryRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryRepository")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryHistoryStore;
    use crate::domain::decision::{Decision, DecisionOption, DEFAULT_MAX_RETAINED};

    fn repository(store: &InMemoryHistoryStore) -> HistoryRepository {
        HistoryRepository::new(Arc::new(store.clone()), DEFAULT_HISTORY_KEY)
    }

    fn one_entry_history() -> DecisionHistory {
        let decision = Decision::draft()
            .with_title("Commute")
            .accept_options(vec![DecisionOption::new("Car"), DecisionOption::new("Bike")])
            .unwrap();
        DecisionHistory::new().append(decision, DEFAULT_MAX_RETAINED)
    }

    #[test]
    fn load_without_stored_data_is_empty() {
        let store = InMemoryHistoryStore::new();
        let history = repository(&store).load().unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn save_then_load_returns_same_history() {
        let store = InMemoryHistoryStore::new();
        let repo = repository(&store);
        let history = one_entry_history();

        repo.save(&history).unwrap();

        assert_eq!(repo.load().unwrap(), history);
        assert!(store.get(DEFAULT_HISTORY_KEY).is_some());
    }

    #[test]
    fn load_or_empty_degrades_malformed_data() {
        let store = InMemoryHistoryStore::with_entry(DEFAULT_HISTORY_KEY, "not json");
        let (history, error) = repository(&store).load_or_empty();
        assert!(history.is_empty());
        assert!(matches!(error, Some(PersistenceError::Codec(_))));
    }

    #[test]
    fn load_or_empty_reports_no_error_on_success() {
        let store = InMemoryHistoryStore::new();
        let (history, error) = repository(&store).load_or_empty();
        assert!(history.is_empty());
        assert!(error.is_none());
    }

    #[test]
    fn invalid_key_surfaces_as_store_error() {
        let store = InMemoryHistoryStore::new();
        let repo = HistoryRepository::new(Arc::new(store), "bad/key");
        assert!(matches!(
            repo.save(&DecisionHistory::new()),
            Err(PersistenceError::Store(StoreError::InvalidKey(_)))
        ));
    }
}
