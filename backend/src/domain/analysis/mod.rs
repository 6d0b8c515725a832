//! Analysis Module - Pure regret scoring for decision options.
//!
//! # Components
//!
//! - `RegretEngine` - Score computation and stable ascending ranking
//! - `RegretBand` - Qualitative band for a score
//! - `Ranking` / `RankedOption` - Derived, never-persisted view of scored options
//! - `FactorPolicy` - Range and step policy for the loss-aversion factor control
//!
//! All functions are pure and stateless. Scores are recomputed from the
//! option lists on every call; nothing is cached.

mod band;
mod factor;
mod ranking;
mod regret_engine;

pub use band::RegretBand;
pub use factor::{FactorPolicy, DEFAULT_LOSS_AVERSION_FACTOR};
pub use ranking::{RankedOption, Ranking};
pub use regret_engine::RegretEngine;
