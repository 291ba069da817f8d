//! Field rules checked before any durable write.

use weightbank_core::config::StorageConfig;
use weightbank_core::errors::{WeightsError, WeightsResult};

/// Rules a weight record must satisfy to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRules {
    pub require_finite: bool,
    pub max_abs_weight: Option<f64>,
}

impl Default for RecordRules {
    fn default() -> Self {
        Self {
            require_finite: true,
            max_abs_weight: None,
        }
    }
}

impl RecordRules {
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            require_finite: config.require_finite,
            max_abs_weight: config.max_abs_weight,
        }
    }

    pub fn check(&self, feature: &str, weight: f64) -> WeightsResult<()> {
        if feature.is_empty() {
            return Err(WeightsError::validation(feature, "feature must not be empty"));
        }
        // SQLite stores NaN as NULL, so it is never accepted.
        if weight.is_nan() {
            return Err(WeightsError::validation(feature, "weight must be a number"));
        }
        if self.require_finite && weight.is_infinite() {
            return Err(WeightsError::validation(
                feature,
                format!("weight must be finite, got {weight}"),
            ));
        }
        if let Some(bound) = self.max_abs_weight {
            if weight.abs() > bound {
                return Err(WeightsError::validation(
                    feature,
                    format!("weight {weight} exceeds bound {bound}"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_reject_non_finite() {
        let rules = RecordRules::default();
        assert!(rules.check("f", 1.0e300).is_ok());
        assert!(rules.check("f", f64::NAN).unwrap_err().is_validation());
        assert!(rules.check("f", f64::NEG_INFINITY).unwrap_err().is_validation());
    }

    #[test]
    fn nan_is_rejected_even_when_infinities_are_allowed() {
        let rules = RecordRules {
            require_finite: false,
            max_abs_weight: None,
        };
        assert!(rules.check("f", f64::INFINITY).is_ok());
        assert!(rules.check("f", f64::NAN).unwrap_err().is_validation());
    }

    #[test]
    fn empty_feature_is_rejected() {
        assert!(RecordRules::default().check("", 0.0).unwrap_err().is_validation());
    }

    #[test]
    fn bound_is_inclusive() {
        let rules = RecordRules {
            require_finite: true,
            max_abs_weight: Some(2.0),
        };
        assert!(rules.check("f", -2.0).is_ok());
        assert!(rules.check("f", 2.000_001).is_err());
    }
}
