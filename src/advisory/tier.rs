//! Household Tier Classification
//!
//! Six ordered, non-overlapping bands over the resident count. The last band
//! is open-ended: every household of 13 or more is `Extreme`.

use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};

/// Household-size advisory tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HouseholdTier {
    /// 1-2 residents
    Low,
    /// 3-4 residents
    Moderate,
    /// 5-6 residents
    Elevated,
    /// 7-10 residents
    High,
    /// 11-12 residents
    VeryHigh,
    /// 13 or more residents
    Extreme,
}

impl HouseholdTier {
    /// Classify a resident count. Zero is not a household.
    pub fn from_residents(residents: u32) -> Result<Self> {
        let tier = match residents {
            0 => {
                return Err(EstimatorError::invalid_input(
                    residents,
                    "a household has at least one resident",
                ))
            }
            1..=2 => HouseholdTier::Low,
            3..=4 => HouseholdTier::Moderate,
            5..=6 => HouseholdTier::Elevated,
            7..=10 => HouseholdTier::High,
            11..=12 => HouseholdTier::VeryHigh,
            _ => HouseholdTier::Extreme,
        };
        Ok(tier)
    }

    /// Stable machine label ("low", "very-high", ...)
    pub fn label(&self) -> &'static str {
        match self {
            HouseholdTier::Low => "low",
            HouseholdTier::Moderate => "moderate",
            HouseholdTier::Elevated => "elevated",
            HouseholdTier::High => "high",
            HouseholdTier::VeryHigh => "very-high",
            HouseholdTier::Extreme => "extreme",
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            HouseholdTier::Low => "Low",
            HouseholdTier::Moderate => "Moderate",
            HouseholdTier::Elevated => "Elevated",
            HouseholdTier::High => "High",
            HouseholdTier::VeryHigh => "Very High",
            HouseholdTier::Extreme => "Extreme",
        }
    }

    pub fn range_display(&self) -> &'static str {
        match self {
            HouseholdTier::Low => "1-2 residents",
            HouseholdTier::Moderate => "3-4 residents",
            HouseholdTier::Elevated => "5-6 residents",
            HouseholdTier::High => "7-10 residents",
            HouseholdTier::VeryHigh => "11-12 residents",
            HouseholdTier::Extreme => "13+ residents",
        }
    }

    /// Conservation message shown for the tier
    pub fn message(&self) -> &'static str {
        match self {
            HouseholdTier::Low => "With just 1 or 2 people, you're using less water overall, but there are still great ways to reduce your footprint!",
            HouseholdTier::Moderate => "With 3 to 4 residents, you're still using a moderate amount of water. Consider these conservation tips.",
            HouseholdTier::Elevated => "A household with 5 to 6 people tends to use more water. Try some of these strategies to conserve water.",
            HouseholdTier::High => "With 7 to 10 residents, water use increases. Implementing conservation methods here can have a significant impact.",
            HouseholdTier::VeryHigh => "For households with 11 to 12 residents, it's crucial to adopt large-scale water-saving methods.",
            HouseholdTier::Extreme => "With more than 13 residents, conserving water becomes even more important to reduce environmental impact. Consider advanced strategies.",
        }
    }

    /// Get all tiers in ascending order
    pub fn all() -> &'static [HouseholdTier] {
        &[
            HouseholdTier::Low,
            HouseholdTier::Moderate,
            HouseholdTier::Elevated,
            HouseholdTier::High,
            HouseholdTier::VeryHigh,
            HouseholdTier::Extreme,
        ]
    }
}
