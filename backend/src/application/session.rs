//! DecisionSession - Top-level controller for the decision wizard.
//!
//! Owns the single active decision, the active loss-aversion factor, the
//! in-memory history and the current wizard step. Every mutation goes
//! through the pure domain operations; persistence happens only at
//! finalization and never blocks progress.

use std::sync::Arc;

use thiserror::Error;

use super::{HistoryRepository, PersistenceError, DEFAULT_HISTORY_KEY};
use crate::domain::analysis::{FactorPolicy, Ranking, RegretEngine};
use crate::domain::decision::{
    Decision, DecisionHistory, DecisionOption, Item, DEFAULT_MAX_RETAINED, MIN_OPTIONS,
};
use crate::domain::foundation::{
    DecisionId, DomainError, ErrorCode, ItemId, OptionId, StateMachine, ValidationError,
};
use crate::domain::wizard::WizardStep;
use crate::ports::HistoryStore;

/// Errors returned by session operations.
///
/// None of them leave the session partially mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Cannot {operation} while on the {step} step")]
    InvalidStep {
        operation: &'static str,
        step: WizardStep,
    },
}

impl SessionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SessionError::Domain(e) if e.is_not_found())
    }
}

/// Tunables for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub history_key: String,
    pub max_history: usize,
    pub factor_policy: FactorPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            max_history: DEFAULT_MAX_RETAINED,
            factor_policy: FactorPolicy::default(),
        }
    }
}

/// Which side of an option an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Pro,
    Con,
}

/// Result of finalizing a decision.
#[derive(Debug)]
pub struct FinalizeOutcome {
    pub decision_id: DecisionId,
    pub ranking: Ranking,
    /// Set when the history could not be persisted. The in-memory history
    /// was still updated.
    pub persistence_error: Option<PersistenceError>,
}

/// Result of moving past the option currently being detailed.
#[derive(Debug)]
pub enum DetailAdvance {
    /// Moved on to the option at this zero-based index.
    NextOption(usize),
    /// The last option was done; the decision was finalized.
    Finalized(FinalizeOutcome),
}

/// Stateful controller driven by the interactive shell.
pub struct DecisionSession {
    repository: HistoryRepository,
    config: SessionConfig,
    decision: Decision,
    factor: f64,
    history: DecisionHistory,
    step: WizardStep,
    detail_index: usize,
    pending_warning: Option<PersistenceError>,
}

impl DecisionSession {
    /// Opens a session, loading history from the store.
    ///
    /// A load failure starts the session with empty history; the failure
    /// is kept for [`DecisionSession::take_warning`].
    pub fn open(store: Arc<dyn HistoryStore>, config: SessionConfig) -> Self {
        let repository = HistoryRepository::new(store, config.history_key.clone());
        let (history, pending_warning) = repository.load_or_empty();
        let factor = config.factor_policy.default;

        Self {
            repository,
            config,
            decision: Decision::draft(),
            factor,
            history,
            step: WizardStep::Start,
            detail_index: 0,
            pending_warning,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Queries
    // ───────────────────────────────────────────────────────────────

    pub fn decision(&self) -> &Decision {
        &self.decision
    }

    pub fn history(&self) -> &DecisionHistory {
        &self.history
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn factor_policy(&self) -> &FactorPolicy {
        &self.config.factor_policy
    }

    /// Takes the last persistence failure not yet shown to the user.
    pub fn take_warning(&mut self) -> Option<PersistenceError> {
        self.pending_warning.take()
    }

    /// Fresh ranking of the active decision under the active factor.
    pub fn ranking(&self) -> Ranking {
        RegretEngine::rank(self.decision.options(), self.factor)
    }

    /// The option being detailed, while on the input-details step.
    pub fn current_option(&self) -> Option<&DecisionOption> {
        if self.step != WizardStep::InputDetails {
            return None;
        }
        self.decision.options().get(self.detail_index)
    }

    /// `(zero-based index, total)` of the option being detailed.
    pub fn detail_position(&self) -> (usize, usize) {
        (self.detail_index, self.decision.options().len())
    }

    // ───────────────────────────────────────────────────────────────
    // Wizard flow
    // ───────────────────────────────────────────────────────────────

    /// Names the decision and moves on to defining options.
    pub fn start(&mut self, title: &str) -> Result<(), SessionError> {
        self.require_step(WizardStep::Start, "start a decision")?;
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }

        let next = self.step.transition_to(WizardStep::DefineOptions)?;
        self.decision = self.decision.clone().with_title(title);
        self.step = next;
        tracing::debug!(decision_id = %self.decision.id(), "Decision titled");
        Ok(())
    }

    /// Accepts the named candidates and moves on to entering details.
    ///
    /// Blank-named candidates are dropped. Fails without changing anything
    /// when fewer than two named candidates remain.
    pub fn define_options(&mut self, candidates: Vec<DecisionOption>) -> Result<(), SessionError> {
        self.require_step(WizardStep::DefineOptions, "define options")?;
        let next = self.step.transition_to(WizardStep::InputDetails)?;

        self.decision = self.decision.clone().accept_options(candidates)?;
        self.step = next;
        self.detail_index = 0;
        tracing::debug!(
            decision_id = %self.decision.id(),
            options = self.decision.options().len(),
            "Options accepted"
        );
        Ok(())
    }

    /// Replaces the pros and cons of an option.
    ///
    /// An unknown option id is logged and returned as a not-found error;
    /// the decision is left as it was.
    pub fn update_option(
        &mut self,
        option_id: OptionId,
        pros: Vec<Item>,
        cons: Vec<Item>,
    ) -> Result<(), SessionError> {
        self.require_step(WizardStep::InputDetails, "edit option details")?;
        match self.decision.clone().update_option_items(option_id, pros, cons) {
            Ok(decision) => {
                self.decision = decision;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(decision_id = %self.decision.id(), %option_id, error = %e, "Ignoring update for unknown option");
                Err(e.into())
            }
        }
    }

    /// Adds a pro or con to the option being detailed.
    ///
    /// Blank input is rejected. Returns the new item's id.
    pub fn add_item(&mut self, kind: ItemKind, text: &str) -> Result<ItemId, SessionError> {
        let option = self.require_current_option("add an item")?;
        let item = Item::from_input(text)?;
        let item_id = item.id;
        let option_id = option.id;

        let mut pros = option.pros.clone();
        let mut cons = option.cons.clone();
        match kind {
            ItemKind::Pro => pros.push(item),
            ItemKind::Con => cons.push(item),
        }

        self.update_option(option_id, pros, cons)?;
        Ok(item_id)
    }

    /// Removes a pro or con from the option being detailed.
    pub fn remove_item(&mut self, kind: ItemKind, item_id: ItemId) -> Result<(), SessionError> {
        let option = self.require_current_option("remove an item")?;
        let (pros, cons) = match kind {
            ItemKind::Pro => (option.pros_without(item_id)?, option.cons.clone()),
            ItemKind::Con => (option.pros.clone(), option.cons_without(item_id)?),
        };
        let option_id = option.id;
        self.update_option(option_id, pros, cons)
    }

    /// Moves to the next option, finalizing after the last one.
    pub fn next_option(&mut self) -> Result<DetailAdvance, SessionError> {
        self.require_step(WizardStep::InputDetails, "advance to the next option")?;
        if self.detail_index + 1 < self.decision.options().len() {
            self.detail_index += 1;
            return Ok(DetailAdvance::NextOption(self.detail_index));
        }
        self.finalize().map(DetailAdvance::Finalized)
    }

    /// Moves to the previous option, staying on the first one.
    pub fn previous_option(&mut self) -> Result<usize, SessionError> {
        self.require_step(WizardStep::InputDetails, "go to the previous option")?;
        self.detail_index = self.detail_index.saturating_sub(1);
        Ok(self.detail_index)
    }

    /// Scores the decision, commits it to history and shows results.
    ///
    /// The snapshot records the active factor. Persistence failure is
    /// reported in the outcome; the in-memory history is updated regardless.
    pub fn finalize(&mut self) -> Result<FinalizeOutcome, SessionError> {
        self.require_step(WizardStep::InputDetails, "finalize")?;
        if self.decision.title().trim().is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }
        if !self.decision.is_complete() {
            let named = self.decision.options().iter().filter(|o| o.is_named()).count();
            return Err(ValidationError::too_few_options(MIN_OPTIONS, named).into());
        }
        let next = self.step.transition_to(WizardStep::Results)?;

        let snapshot = self.decision.clone().finalized(self.factor);
        self.history = self.history.append(snapshot.clone(), self.config.max_history);
        self.decision = snapshot;
        self.step = next;

        let persistence_error = self.persist();
        let ranking = self.ranking();

        tracing::info!(
            decision_id = %self.decision.id(),
            options = self.decision.options().len(),
            factor = self.factor,
            history = self.history.len(),
            winner = ranking.winner().map(|w| w.option.name.as_str()).unwrap_or(""),
            "Decision finalized"
        );

        Ok(FinalizeOutcome {
            decision_id: self.decision.id(),
            ranking,
            persistence_error,
        })
    }

    /// Changes the active factor, snapped to the control's range and step.
    ///
    /// Returns the factor actually applied. Nothing is persisted until the
    /// next finalization.
    pub fn set_factor(&mut self, value: f64) -> Result<f64, SessionError> {
        let snapped = self.config.factor_policy.snap(value)?;
        self.factor = snapped;
        Ok(snapped)
    }

    /// Discards the active decision and starts a fresh draft.
    pub fn reset(&mut self) {
        tracing::debug!(discarded = %self.decision.id(), "Session reset");
        self.decision = Decision::draft();
        self.factor = self.config.factor_policy.default;
        self.step = WizardStep::Start;
        self.detail_index = 0;
    }

    /// Opens the history list.
    pub fn show_history(&mut self) -> Result<(), SessionError> {
        self.require_step(WizardStep::Start, "open history")?;
        self.step = self.step.transition_to(WizardStep::History)?;
        Ok(())
    }

    /// Reinstates a history entry as the active decision and shows results.
    ///
    /// The entry's last factor becomes the active factor.
    pub fn load_history_entry(&mut self, id: DecisionId) -> Result<Ranking, SessionError> {
        self.require_step(WizardStep::History, "load a past decision")?;
        let entry = self
            .history
            .find(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(ErrorCode::DecisionNotFound, "Decision", id))?;
        let next = self.step.transition_to(WizardStep::Results)?;

        self.factor = if entry.last_factor_used().is_finite() {
            entry.last_factor_used()
        } else {
            self.config.factor_policy.default
        };
        self.decision = entry;
        self.step = next;
        self.detail_index = 0;
        Ok(self.ranking())
    }

    /// Follows the back action of the current step.
    pub fn go_back(&mut self) -> Result<WizardStep, SessionError> {
        let target = self.step.back().ok_or(SessionError::InvalidStep {
            operation: "go back",
            step: self.step,
        })?;
        self.step = self.step.transition_to(target)?;
        self.detail_index = 0;
        Ok(self.step)
    }

    // ───────────────────────────────────────────────────────────────
    // Helpers
    // ───────────────────────────────────────────────────────────────

    fn require_step(&self, expected: WizardStep, operation: &'static str) -> Result<(), SessionError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidStep {
                operation,
                step: self.step,
            })
        }
    }

    fn require_current_option(&self, operation: &'static str) -> Result<&DecisionOption, SessionError> {
        self.require_step(WizardStep::InputDetails, operation)?;
        self.decision
            .options()
            .get(self.detail_index)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::OptionNotFound, "No option is being detailed").into()
            })
    }

    fn persist(&mut self) -> Option<PersistenceError> {
        match self.repository.save(&self.history) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(
                    key = %self.repository.key(),
                    error = %e,
                    "Failed to persist history; keeping in-memory copy"
                );
                Some(e)
            }
        }
    }
}
