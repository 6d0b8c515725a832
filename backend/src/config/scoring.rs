//! Scoring configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{FactorPolicy, DEFAULT_LOSS_AVERSION_FACTOR};

/// Loss-aversion factor control configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Factor applied to new decisions and after a reset
    #[serde(default = "default_factor")]
    pub default_factor: f64,

    /// Lowest selectable factor
    #[serde(default = "default_min_factor")]
    pub min_factor: f64,

    /// Highest selectable factor
    #[serde(default = "default_max_factor")]
    pub max_factor: f64,

    /// Step between selectable factors
    #[serde(default = "default_factor_step")]
    pub factor_step: f64,
}

impl ScoringConfig {
    pub fn factor_policy(&self) -> FactorPolicy {
        FactorPolicy {
            min: self.min_factor,
            max: self.max_factor,
            step: self.factor_step,
            default: self.default_factor,
        }
    }

    /// Replaces the default factor with `value` snapped onto the policy.
    ///
    /// Returns the value actually applied.
    pub fn override_default_factor(&mut self, value: f64) -> Result<f64, ValidationError> {
        let snapped = self.factor_policy().snap(value)?;
        self.default_factor = snapped;
        Ok(snapped)
    }

    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.factor_policy().validate()?;
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_factor: default_factor(),
            min_factor: default_min_factor(),
            max_factor: default_max_factor(),
            factor_step: default_factor_step(),
        }
    }
}

fn default_factor() -> f64 {
    DEFAULT_LOSS_AVERSION_FACTOR
}

fn default_min_factor() -> f64 {
    1.0
}

fn default_max_factor() -> f64 {
    5.0
}

fn default_factor_step() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_config_defaults_match_policy_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.factor_policy(), FactorPolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_default_outside_range() {
        let config = ScoringConfig {
            default_factor: 9.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidScoring(_))
        ));
    }

    #[test]
    fn test_factor_override_snaps_to_nearest_step() {
        let mut config = ScoringConfig::default();
        assert_eq!(config.override_default_factor(2.3).unwrap(), 2.5);
        assert_eq!(config.default_factor, 2.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_factor_override_clamps_to_range() {
        let mut config = ScoringConfig::default();
        assert_eq!(config.override_default_factor(0.2).unwrap(), 1.0);
        assert_eq!(config.override_default_factor(40.0).unwrap(), 5.0);
    }

    #[test]
    fn test_factor_override_rejects_nan_and_keeps_default() {
        let mut config = ScoringConfig::default();
        assert!(matches!(
            config.override_default_factor(f64::NAN),
            Err(ValidationError::InvalidScoring(_))
        ));
        assert_eq!(config.default_factor, DEFAULT_LOSS_AVERSION_FACTOR);
    }

    #[test]
    fn test_validation_rejects_negative_step() {
        let config = ScoringConfig {
            factor_step: -0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
