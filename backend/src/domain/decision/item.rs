//! Pro and con items.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ItemId, ValidationError};

/// A single anticipated outcome attached to an option.
///
/// Whether an item is a pro or a con is decided by the list that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
}

impl Item {
    /// Creates an item from raw user input.
    ///
    /// The text is trimmed; blank input is rejected.
    pub fn from_input(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field("item_text"));
        }
        Ok(Self {
            id: ItemId::new(),
            text: text.to_string(),
        })
    }
}
