//! Wizard step state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Screen the decision wizard is on.
///
/// ```text
/// Start ──► DefineOptions ──► InputDetails ──► Results
///   │  ◄──back──┘   ◄──back──┘     ◄──back──┘     ▲
///   ▼                                             │
/// History ───────────── load entry ───────────────┘
/// ```
///
/// Reset returns to `Start` from anywhere and is not modelled as a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardStep {
    #[default]
    Start,
    DefineOptions,
    InputDetails,
    Results,
    History,
}

impl WizardStep {
    /// Steps shown in the progress indicator, in order.
    pub const PROGRESS: [WizardStep; 4] = [
        WizardStep::Start,
        WizardStep::DefineOptions,
        WizardStep::InputDetails,
        WizardStep::Results,
    ];

    /// Where the back action leads, if it is offered on this step.
    pub fn back(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Start => None,
            WizardStep::DefineOptions => Some(WizardStep::Start),
            WizardStep::InputDetails => Some(WizardStep::DefineOptions),
            WizardStep::Results => Some(WizardStep::InputDetails),
            WizardStep::History => Some(WizardStep::Start),
        }
    }

    /// Zero-based position in the progress indicator; `None` for `History`.
    pub fn progress_index(&self) -> Option<usize> {
        Self::PROGRESS.iter().position(|s| s == self)
    }

    /// Whether the history list can be opened from here.
    pub fn offers_history(&self) -> bool {
        *self == WizardStep::Start
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Start => vec![DefineOptions, History],
            DefineOptions => vec![InputDetails, Start],
            InputDetails => vec![Results, DefineOptions],
            Results => vec![InputDetails],
            History => vec![Start, Results],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WizardStep::Start => "start",
            WizardStep::DefineOptions => "define options",
            WizardStep::InputDetails => "input details",
            WizardStep::Results => "results",
            WizardStep::History => "history",
        };
        write!(f, "{}", label)
    }
}
