//! Advisory Selection
//!
//! Maps `(residents, predicted_usage)` to the three independent advisories:
//! household tier, per-person usage flag and large-household flag.

use serde::{Deserialize, Serialize};

use super::tier::HouseholdTier;
use crate::config::AdvisoryThresholds;
use crate::error::{EstimatorError, Result};

/// Combined advisory classification for one household
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub household_tier: HouseholdTier,

    /// Predicted liters per resident per day
    pub per_person_usage: f64,

    /// Per-person usage exceeds the recommended limit
    pub per_person_flag: bool,

    /// Household is large enough for the large-household strategies
    pub large_household_flag: bool,

    /// Resident count the large-household flag is measured against
    pub large_household_above: u32,
}

/// Stateless selector over a set of thresholds
#[derive(Debug, Clone, Default)]
pub struct AdvisorySelector {
    thresholds: AdvisoryThresholds,
}

impl AdvisorySelector {
    pub fn new(thresholds: AdvisoryThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &AdvisoryThresholds {
        &self.thresholds
    }

    /// Classify a household. `residents` must be at least 1.
    pub fn classify(&self, residents: u32, predicted_usage: f64) -> Result<Advisory> {
        if residents == 0 {
            return Err(EstimatorError::invalid_input(
                residents,
                "per-person usage is undefined for zero residents",
            ));
        }

        let household_tier = HouseholdTier::from_residents(residents)?;
        let per_person_usage = predicted_usage / residents as f64;

        Ok(Advisory {
            household_tier,
            per_person_usage,
            per_person_flag: per_person_usage > self.thresholds.per_person_limit,
            large_household_flag: residents > self.thresholds.large_household_above,
            large_household_above: self.thresholds.large_household_above,
        })
    }
}

/// Classify with the default thresholds (75 L/person, more than 9 residents)
pub fn classify(residents: u32, predicted_usage: f64) -> Result<Advisory> {
    AdvisorySelector::default().classify(residents, predicted_usage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_household_tiers() {
        assert_eq!(classify(4, 300.0).unwrap().household_tier, HouseholdTier::Moderate);
        assert_eq!(classify(1, 90.0).unwrap().household_tier, HouseholdTier::Low);
        assert_eq!(classify(13, 940.0).unwrap().household_tier, HouseholdTier::Extreme);
        assert_eq!(classify(11, 800.0).unwrap().household_tier, HouseholdTier::VeryHigh);
    }

    #[test]
    fn test_per_person_flag() {
        let high = classify(4, 320.0).unwrap();
        assert!(high.per_person_flag);
        assert_relative_eq!(high.per_person_usage, 80.0);

        let typical = classify(4, 240.0).unwrap();
        assert!(!typical.per_person_flag);
        assert_relative_eq!(typical.per_person_usage, 60.0);
    }

    #[test]
    fn test_per_person_limit_is_strict() {
        assert!(!classify(2, 150.0).unwrap().per_person_flag);
        assert!(classify(2, 150.02).unwrap().per_person_flag);
    }

    #[test]
    fn test_large_household_flag() {
        assert!(classify(10, 0.0).unwrap().large_household_flag);
        assert!(!classify(9, 0.0).unwrap().large_household_flag);
        assert!(classify(10, 1.0e6).unwrap().large_household_flag);
    }

    #[test]
    fn test_zero_residents() {
        let err = classify(0, 100.0).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidInput { residents: 0, .. }));
    }

    #[test]
    fn test_custom_thresholds() {
        let selector = AdvisorySelector::new(AdvisoryThresholds {
            per_person_limit: 50.0,
            large_household_above: 3,
        });
        let advisory = selector.classify(4, 240.0).unwrap();
        assert!(advisory.per_person_flag);
        assert!(advisory.large_household_flag);
        assert_eq!(advisory.large_household_above, 3);
        assert_eq!(advisory.household_tier, HouseholdTier::Moderate);
    }
}
