//! Loss-aversion factor policy for interactive controls.
//!
//! The engine accepts any factor. This policy only describes what the
//! factor control offers: a closed range walked in fixed steps.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Factor applied when nothing else has been chosen.
pub const DEFAULT_LOSS_AVERSION_FACTOR: f64 = 2.0;

/// Range and step for the factor control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorPolicy {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl Default for FactorPolicy {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 5.0,
            step: 0.5,
            default: DEFAULT_LOSS_AVERSION_FACTOR,
        }
    }
}

impl FactorPolicy {
    /// Checks the policy itself is coherent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("min_factor", self.min),
            ("max_factor", self.max),
            ("factor_step", self.step),
            ("default_factor", self.default),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::not_finite(field));
            }
        }
        if self.step <= 0.0 {
            return Err(ValidationError::invalid_format("factor_step", "must be positive"));
        }
        if self.min > self.max {
            return Err(ValidationError::invalid_format(
                "min_factor",
                "must not exceed max_factor",
            ));
        }
        if !self.contains(self.default) {
            return Err(ValidationError::invalid_format(
                "default_factor",
                format!("must lie within [{}, {}]", self.min, self.max),
            ));
        }
        Ok(())
    }

    /// True when `value` lies in the closed range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps to the range and rounds to the nearest step counted from `min`.
    ///
    /// # Errors
    ///
    /// `NotFinite` for NaN or infinite input.
    pub fn snap(&self, value: f64) -> Result<f64, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite("loss_aversion_factor"));
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        Ok((self.min + steps * self.step).min(self.max))
    }

    /// Every selectable value, ascending.
    pub fn values(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).floor() as usize;
        (0..=count).map(|i| self.min + i as f64 * self.step).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_one_to_five_by_halves() {
        let policy = FactorPolicy::default();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.values().len(), 9);
        assert_eq!(policy.values()[0], 1.0);
        assert_eq!(policy.values()[8], 5.0);
    }

    #[test]
    fn snap_rounds_to_nearest_step() {
        let policy = FactorPolicy::default();
        assert_eq!(policy.snap(2.2).unwrap(), 2.0);
        assert_eq!(policy.snap(2.3).unwrap(), 2.5);
        assert_eq!(policy.snap(3.5).unwrap(), 3.5);
    }

    #[test]
    fn snap_clamps_out_of_range_values() {
        let policy = FactorPolicy::default();
        assert_eq!(policy.snap(0.0).unwrap(), 1.0);
        assert_eq!(policy.snap(-3.0).unwrap(), 1.0);
        assert_eq!(policy.snap(12.0).unwrap(), 5.0);
    }

    #[test]
    fn snap_rejects_non_finite() {
        let policy = FactorPolicy::default();
        assert!(policy.snap(f64::NAN).is_err());
        assert!(policy.snap(f64::INFINITY).is_err());
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let policy = FactorPolicy {
            min: 5.0,
            max: 1.0,
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_step() {
        let policy = FactorPolicy {
            step: 0.0,
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn validate_rejects_default_outside_range() {
        let policy = FactorPolicy {
            default: 6.0,
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }
}
