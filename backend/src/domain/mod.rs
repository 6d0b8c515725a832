//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamp, errors, state machine)
//! - `decision` - Decision, options, items and the history of finalized decisions
//! - `analysis` - Pure regret scoring and ranking
//! - `wizard` - Step sequence driven by the interactive shell

pub mod analysis;
pub mod decision;
pub mod foundation;
pub mod wizard;
