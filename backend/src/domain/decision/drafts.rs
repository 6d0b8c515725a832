//! Editable option list used while options are being defined.

use super::{Decision, DecisionOption, MIN_OPTIONS};
use crate::domain::foundation::{DomainError, ErrorCode, OptionId, ValidationError};

/// Working copy of a decision's options before they are accepted.
///
/// Mirrors the "define options" form: options can be added, renamed and
/// removed, but never below [`MIN_OPTIONS`] rows.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDrafts {
    options: Vec<DecisionOption>,
}

impl OptionDrafts {
    /// Starts from the options currently held by the decision.
    pub fn from_decision(decision: &Decision) -> Self {
        let mut options = decision.options().to_vec();
        while options.len() < MIN_OPTIONS {
            options.push(DecisionOption::blank());
        }
        Self { options }
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    /// Appends a blank row and returns its id.
    pub fn add_blank(&mut self) -> OptionId {
        let option = DecisionOption::blank();
        let id = option.id;
        self.options.push(option);
        id
    }

    /// Renames the option with the given id.
    pub fn rename(&mut self, option_id: OptionId, name: impl Into<String>) -> Result<(), DomainError> {
        let option = self
            .options
            .iter_mut()
            .find(|o| o.id == option_id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::OptionNotFound, "Option", option_id))?;
        option.name = name.into();
        Ok(())
    }

    /// Removes a row, refusing to go below the minimum row count.
    pub fn remove(&mut self, option_id: OptionId) -> Result<(), DomainError> {
        let index = self
            .options
            .iter()
            .position(|o| o.id == option_id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::OptionNotFound, "Option", option_id))?;
        if self.options.len() <= MIN_OPTIONS {
            return Err(ValidationError::too_few_options(MIN_OPTIONS, self.options.len() - 1).into());
        }
        self.options.remove(index);
        Ok(())
    }

    /// Number of rows with a non-blank name.
    pub fn named_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_named()).count()
    }

    /// Whether accepting now would succeed.
    pub fn can_accept(&self) -> bool {
        self.named_count() >= MIN_OPTIONS
    }

    pub fn into_candidates(self) -> Vec<DecisionOption> {
        self.options
    }
}
