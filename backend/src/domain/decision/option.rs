//! Candidate options of a decision.

use serde::{Deserialize, Serialize};

use super::Item;
use crate::domain::foundation::{DomainError, ErrorCode, ItemId, OptionId};

/// One candidate choice, with its anticipated pros and cons.
///
/// Scores are never stored here; the regret engine derives them on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: OptionId,
    pub name: String,
    #[serde(default)]
    pub pros: Vec<Item>,
    #[serde(default)]
    pub cons: Vec<Item>,
}

impl DecisionOption {
    /// Creates an option with the given name and no pros or cons.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(),
            name: name.into(),
            pros: Vec::new(),
            cons: Vec::new(),
        }
    }

    /// Creates an unnamed placeholder option.
    pub fn blank() -> Self {
        Self::new("")
    }

    /// True when the trimmed name is non-empty.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Returns a copy with the given item appended to the pros.
    pub fn with_pro(mut self, item: Item) -> Self {
        self.pros.push(item);
        self
    }

    /// Returns a copy with the given item appended to the cons.
    pub fn with_con(mut self, item: Item) -> Self {
        self.cons.push(item);
        self
    }

    /// Returns the pros with `item_id` removed.
    ///
    /// # Errors
    ///
    /// `ITEM_NOT_FOUND` if no pro carries that id.
    pub fn pros_without(&self, item_id: ItemId) -> Result<Vec<Item>, DomainError> {
        Self::without(&self.pros, item_id)
    }

    /// Returns the cons with `item_id` removed.
    ///
    /// # Errors
    ///
    /// `ITEM_NOT_FOUND` if no con carries that id.
    pub fn cons_without(&self, item_id: ItemId) -> Result<Vec<Item>, DomainError> {
        Self::without(&self.cons, item_id)
    }

    fn without(items: &[Item], item_id: ItemId) -> Result<Vec<Item>, DomainError> {
        if !items.iter().any(|i| i.id == item_id) {
            return Err(DomainError::not_found(ErrorCode::ItemNotFound, "Item", item_id));
        }
        Ok(items.iter().filter(|i| i.id != item_id).cloned().collect())
    }
}
