//! The Decision aggregate.

use serde::{Deserialize, Deserializer, Serialize};

use super::{DecisionOption, Item};
use crate::domain::analysis::DEFAULT_LOSS_AVERSION_FACTOR;
use crate::domain::foundation::{
    DecisionId, DomainError, ErrorCode, OptionId, Timestamp, ValidationError,
};

/// Minimum number of named options a decision must carry once accepted.
pub const MIN_OPTIONS: usize = 2;

/// A decision in progress or completed.
///
/// # Invariants
///
/// - After [`Decision::accept_options`] succeeds, the decision holds at least
///   [`MIN_OPTIONS`] options and every option name is non-blank.
/// - `last_factor_used` is the loss-aversion factor in effect at the most
///   recent finalization (the default factor for a fresh draft).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    id: DecisionId,
    title: String,
    options: Vec<DecisionOption>,
    timestamp: Timestamp,
    #[serde(default = "default_factor", deserialize_with = "deserialize_factor")]
    last_factor_used: f64,
}

fn default_factor() -> f64 {
    DEFAULT_LOSS_AVERSION_FACTOR
}

/// Reads a stored factor, treating `null`, zero and non-finite values as
/// unset. Older stores wrote an unusable factor as `null`.
fn deserialize_factor<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Option::<f64>::deserialize(deserializer)?;
    Ok(stored
        .filter(|f| f.is_finite() && *f != 0.0)
        .unwrap_or(DEFAULT_LOSS_AVERSION_FACTOR))
}

impl Decision {
    /// Creates a fresh draft: empty title, two blank options, current time,
    /// default scoring factor.
    pub fn draft() -> Self {
        Self {
            id: DecisionId::new(),
            title: String::new(),
            options: vec![DecisionOption::blank(), DecisionOption::blank()],
            timestamp: Timestamp::now(),
            last_factor_used: DEFAULT_LOSS_AVERSION_FACTOR,
        }
    }

    /// Reconstitutes a decision from stored parts without re-validating.
    pub fn reconstitute(
        id: DecisionId,
        title: impl Into<String>,
        options: Vec<DecisionOption>,
        timestamp: Timestamp,
        last_factor_used: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            options,
            timestamp,
            last_factor_used,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> DecisionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn last_factor_used(&self) -> f64 {
        self.last_factor_used
    }

    /// Finds an option by id.
    pub fn option(&self, option_id: OptionId) -> Option<&DecisionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    // ───────────────────────────────────────────────────────────────
    // Operations
    // ───────────────────────────────────────────────────────────────

    /// Returns the decision with its title set.
    ///
    /// Blank-title rejection is the caller's job; the title is stored as given.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    /// Replaces the options with the named subset of `candidates`.
    ///
    /// Options whose trimmed name is empty are dropped; order is preserved.
    ///
    /// # Errors
    ///
    /// `TooFewOptions` if fewer than [`MIN_OPTIONS`] named candidates remain.
    /// The decision is consumed either way; callers keep a clone if they
    /// need to recover.
    pub fn accept_options(
        self,
        candidates: Vec<DecisionOption>,
    ) -> Result<Self, ValidationError> {
        let named: Vec<DecisionOption> = candidates.into_iter().filter(|o| o.is_named()).collect();
        if named.len() < MIN_OPTIONS {
            return Err(ValidationError::too_few_options(MIN_OPTIONS, named.len()));
        }
        Ok(Self {
            options: named,
            ..self
        })
    }

    /// Replaces the pros and cons of one option.
    ///
    /// # Errors
    ///
    /// `OPTION_NOT_FOUND` if no option carries `option_id`. Nothing is
    /// changed in that case.
    pub fn update_option_items(
        self,
        option_id: OptionId,
        pros: Vec<Item>,
        cons: Vec<Item>,
    ) -> Result<Self, DomainError> {
        let index = self
            .options
            .iter()
            .position(|o| o.id == option_id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::OptionNotFound, "Option", option_id))?;

        let mut options = self.options;
        options[index].pros = pros;
        options[index].cons = cons;
        Ok(Self { options, ..self })
    }

    /// Returns the snapshot committed to history at finalization.
    pub fn finalized(self, factor: f64) -> Self {
        Self {
            last_factor_used: factor,
            ..self
        }
    }

    /// True once the decision satisfies the accepted-options invariant.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && self.options.len() >= MIN_OPTIONS
            && self.options.iter().all(DecisionOption::is_named)
    }
}
