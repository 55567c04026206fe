//! Resolver thresholds and limits

use serde::{Deserialize, Serialize};

use crate::error::{Result, config_invalid};

/// Top score at or above which the best candidate is accepted outright
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Top score at or above which the best candidate is accepted with alternatives
pub const MODERATE_THRESHOLD: f64 = 0.5;

/// Alternatives disclosed next to a moderately confident pick
pub const MAX_ALTERNATIVES: usize = 4;

/// Ranked candidates kept per resolution
pub const MAX_RANKED_RESULTS: usize = 5;

/// Floor for candidates worth showing to a human as closest misses
pub const MIN_CANDIDATE_SCORE: f64 = 0.3;

/// Named configuration constants of the resolution policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    pub high_confidence_threshold: f64,
    pub moderate_threshold: f64,
    pub max_alternatives: usize,
    pub max_ranked_results: usize,
    pub min_candidate_score: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            high_confidence_threshold: HIGH_CONFIDENCE_THRESHOLD,
            moderate_threshold: MODERATE_THRESHOLD,
            max_alternatives: MAX_ALTERNATIVES,
            max_ranked_results: MAX_RANKED_RESULTS,
            min_candidate_score: MIN_CANDIDATE_SCORE,
        }
    }
}

impl ResolverConfig {
    /// Check threshold ordering and bounds
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("high_confidence_threshold", self.high_confidence_threshold),
            ("moderate_threshold", self.moderate_threshold),
            ("min_candidate_score", self.min_candidate_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(config_invalid(
                    format!("{} must be within [0, 1], got {}", name, value),
                ));
            }
        }

        if self.moderate_threshold > self.high_confidence_threshold {
            return Err(config_invalid(format!(
                "moderate_threshold ({}) is above high_confidence_threshold ({})",
                self.moderate_threshold, self.high_confidence_threshold
            )));
        }

        if self.min_candidate_score > self.moderate_threshold {
            return Err(config_invalid(format!(
                "min_candidate_score ({}) is above moderate_threshold ({})",
                self.min_candidate_score, self.moderate_threshold
            )));
        }

        if self.max_ranked_results == 0 {
            return Err(config_invalid("max_ranked_results must be at least 1".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrewmatchError;

    #[test]
    fn test_defaults_validate() {
        assert!(ResolverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_threshold() {
        let config = ResolverConfig {
            high_confidence_threshold: 1.5,
            ..ResolverConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let config = ResolverConfig {
            moderate_threshold: f64::NAN,
            ..ResolverConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_thresholds() {
        let config = ResolverConfig {
            high_confidence_threshold: 0.4,
            moderate_threshold: 0.6,
            ..ResolverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BrewmatchError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn test_floor_above_moderate() {
        let config = ResolverConfig {
            min_candidate_score: 0.6,
            ..ResolverConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_ranked_results() {
        let config = ResolverConfig {
            max_ranked_results: 0,
            ..ResolverConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
