//! Decision module - The decision being made and the history of past ones.
//!
//! # Lifecycle
//!
//! A [`Decision`] starts as a draft with two blank options. The surrounding
//! controller sets its title, accepts a validated option list, fills in each
//! option's pros and cons, and finally snapshots it into a [`DecisionHistory`].
//!
//! Every operation here is pure: it takes the current value and returns the
//! updated one. Ownership of the single authoritative decision and history
//! stays with the caller.

mod decision;
mod drafts;
mod history;
mod item;
mod option;

pub use decision::{Decision, MIN_OPTIONS};
pub use drafts::OptionDrafts;
pub use history::{DecisionHistory, HistoryEntrySummary, DEFAULT_MAX_RETAINED};
pub use item::Item;
pub use option::DecisionOption;
