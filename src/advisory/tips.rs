//! Conservation advice content
//!
//! Static text selected by the advisory flags, plus the general tip sections
//! shown to every household.

use serde::Serialize;

/// A titled tip ("**Title**: detail")
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub detail: &'static str,
}

/// A titled group of tips
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TipSection {
    pub heading: &'static str,
    pub tips: &'static [Tip],
}

/// Large-household strategy with a worked example
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Strategy {
    pub title: &'static str,
    pub detail: &'static str,
    pub example: &'static str,
}

pub const PER_PERSON_HIGH_MESSAGE: &str =
    "Per-person usage exceeds recommended limits. Consider the following strategies to reduce your water footprint:";

pub const PER_PERSON_TYPICAL_MESSAGE: &str =
    "Your water usage is within a typical range. Keep practicing good water-saving habits.";

pub const PER_PERSON_STRATEGIES: &[Tip] = &[
    Tip { title: "Shorten showers", detail: "Reducing shower time can save gallons of water each day." },
    Tip { title: "Turn off the tap", detail: "when brushing teeth, washing dishes, or doing other activities." },
    Tip { title: "Fix leaks", detail: "Even small drips can add up to hundreds of liters over time." },
];

/// Warning for households above `large_household_above` residents
pub fn large_household_warning(large_household_above: u32) -> String {
    format!(
        "Households with more than {} residents tend to have a significant impact on local water resources.",
        large_household_above
    )
}

pub const LARGE_HOUSEHOLD_INTRO: &str =
    "With larger households, conserving water becomes even more crucial to ensure sustainable water use. Consider these impactful strategies:";

pub const LARGE_HOUSEHOLD_STRATEGIES: &[Strategy] = &[
    Strategy {
        title: "Efficient Water Use Planning",
        detail: "Large households can implement a detailed plan to monitor and reduce water usage.",
        example: "Use a weekly checklist to track water use, and designate one person to oversee this effort.",
    },
    Strategy {
        title: "Greywater Recycling",
        detail: "For larger households, consider a greywater recycling system to reuse water from baths, sinks, and washing machines.",
        example: "Install a system that collects greywater and reuses it for toilet flushing and irrigation.",
    },
    Strategy {
        title: "Water-Efficient Landscaping",
        detail: "Consider xeriscaping your yard (landscaping that reduces or eliminates the need for irrigation).",
        example: "Replace grass lawns with native plants that require minimal water.",
    },
    Strategy {
        title: "Educate and Encourage Family Members",
        detail: "Everyone in a large household must be aware of the importance of water conservation and be motivated to participate.",
        example: "Set up a monthly family challenge to reduce water usage and track progress together.",
    },
    Strategy {
        title: "Water-Saving Appliances for Larger Loads",
        detail: "Choose appliances that are designed to handle large families but still conserve water, like high-efficiency dishwashers and washing machines.",
        example: "A family of 10 using a water-efficient dishwasher can save hundreds of liters each week compared to using a less efficient model.",
    },
];

pub const LARGE_HOUSEHOLD_REMINDER: &str =
    "Every small change can add up to substantial water savings over time, especially in large households.";

pub const GENERAL_TIPS: &[TipSection] = &[
    TipSection {
        heading: "Bathroom",
        tips: &[
            Tip { title: "Install a low-flow toilet", detail: "High-efficiency toilets use 1.28 gallons per flush, compared to older models that use 3.5 to 7 gallons." },
            Tip { title: "Install a low-flow showerhead", detail: "Reduces water flow without sacrificing pressure." },
            Tip { title: "Take shorter showers", detail: "Reducing shower time by even a few minutes can save gallons of water." },
            Tip { title: "Turn off water while brushing teeth", detail: "This can save 3-5 gallons per minute." },
        ],
    },
    TipSection {
        heading: "Kitchen",
        tips: &[
            Tip { title: "Use a dishwasher only when full", detail: "Dishwashers use less water than washing by hand if they are fully loaded." },
            Tip { title: "Rinse fruits and vegetables in a bowl of water", detail: "Instead of running the tap." },
            Tip { title: "Use a water-saving faucet aerator", detail: "Install aerators on kitchen faucets to reduce water flow without reducing performance." },
            Tip { title: "Defrost food in the fridge or microwave", detail: "Avoid running water over frozen food to defrost it." },
        ],
    },
    TipSection {
        heading: "Laundry",
        tips: &[
            Tip { title: "Wash clothes in cold water", detail: "This saves both water and energy." },
            Tip { title: "Wash full loads", detail: "Ensure the washing machine is full to maximize water use." },
            Tip { title: "Use a high-efficiency washing machine", detail: "These machines use significantly less water than traditional models." },
        ],
    },
    TipSection {
        heading: "Garden & Lawn",
        tips: &[
            Tip { title: "Water plants early in the morning", detail: "Watering in the morning minimizes evaporation." },
            Tip { title: "Install a drip irrigation system", detail: "Drip irrigation uses 30-50% less water than traditional sprinklers." },
            Tip { title: "Use drought-resistant plants", detail: "These plants require less water and are more resilient in dry conditions." },
            Tip { title: "Mulch your garden", detail: "Mulching helps retain soil moisture and reduces the need for frequent watering." },
        ],
    },
    TipSection {
        heading: "Home Maintenance",
        tips: &[
            Tip { title: "Fix leaks immediately", detail: "A small drip from a leaking faucet can waste 20 gallons of water or more each day." },
            Tip { title: "Install water-efficient appliances", detail: "Consider washing machines, dishwashers, and refrigerators that are designed to use less water." },
            Tip { title: "Insulate pipes", detail: "Prevent water waste by ensuring water is at the right temperature immediately after turning on the faucet." },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_household_warning_names_threshold() {
        assert!(large_household_warning(9).contains("more than 9 residents"));
        assert!(large_household_warning(6).contains("more than 6 residents"));
    }
}
