//! History of finalized decisions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Decision;
use crate::domain::foundation::{DecisionId, Timestamp};

/// Default number of decisions kept in history.
pub const DEFAULT_MAX_RETAINED: usize = 10;

/// Finalized decisions, most recent first, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionHistory {
    entries: Vec<Decision>,
}

impl DecisionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps entries that are already ordered most-recent-first.
    pub fn from_entries(entries: Vec<Decision>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Decision] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: DecisionId) -> Option<&Decision> {
        self.entries.iter().find(|d| d.id() == id)
    }

    /// Returns a new history with `decision` at the front.
    ///
    /// Any entry sharing the decision's id is dropped first, so re-finalizing
    /// moves the decision to the front with its new content. The result is
    /// truncated to `max_retained`, evicting the oldest entries.
    pub fn append(&self, decision: Decision, max_retained: usize) -> Self {
        let id = decision.id();
        let entries = std::iter::once(decision)
            .chain(self.entries.iter().filter(|d| d.id() != id).cloned())
            .take(max_retained)
            .collect();
        Self { entries }
    }

    /// One-line summaries for list displays.
    pub fn summaries(&self) -> Vec<HistoryEntrySummary> {
        self.entries.iter().map(HistoryEntrySummary::from).collect()
    }
}

/// Compact view of a history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntrySummary {
    pub id: DecisionId,
    pub title: String,
    pub timestamp: Timestamp,
    pub option_count: usize,
}

impl From<&Decision> for HistoryEntrySummary {
    fn from(decision: &Decision) -> Self {
        Self {
            id: decision.id(),
            title: decision.title().to_string(),
            timestamp: decision.timestamp(),
            option_count: decision.options().len(),
        }
    }
}

impl fmt::Display for HistoryEntrySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} • {} options considered",
            self.timestamp.date_label(),
            self.option_count
        )
    }
}
