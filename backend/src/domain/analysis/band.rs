//! Qualitative bands for regret scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of three fixed bands a regret score falls into.
///
/// Band edges are inclusive on the upper side: `0` is `Safe`, `3` is `Solid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegretBand {
    /// `score <= 0`
    Safe,
    /// `0 < score <= 3`
    Solid,
    /// `score > 3`
    Heavy,
}

impl RegretBand {
    /// Upper edge (inclusive) of the `Safe` band.
    pub const SAFE_MAX: f64 = 0.0;
    /// Upper edge (inclusive) of the `Solid` band.
    pub const SOLID_MAX: f64 = 3.0;

    /// Classifies a score.
    ///
    /// NaN compares false against both edges and lands in `Heavy`.
    pub fn for_score(score: f64) -> Self {
        if score <= Self::SAFE_MAX {
            RegretBand::Safe
        } else if score <= Self::SOLID_MAX {
            RegretBand::Solid
        } else {
            RegretBand::Heavy
        }
    }

    /// Human-readable description shown next to a ranked option.
    pub fn description(&self) -> &'static str {
        match self {
            RegretBand::Safe => "A very safe path forward.",
            RegretBand::Solid => "A solid choice with manageable tradeoffs.",
            RegretBand::Heavy => "This path might feel quite heavy later on.",
        }
    }
}

impl fmt::Display for RegretBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RegretBand::Safe => "safe",
            RegretBand::Solid => "solid",
            RegretBand::Heavy => "heavy",
        };
        write!(f, "{}", label)
    }
}
