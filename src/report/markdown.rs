use std::fmt::Write;

use crate::advisory::tips::{
    large_household_warning, Tip, GENERAL_TIPS, LARGE_HOUSEHOLD_INTRO,
    LARGE_HOUSEHOLD_REMINDER, LARGE_HOUSEHOLD_STRATEGIES, PER_PERSON_HIGH_MESSAGE,
    PER_PERSON_STRATEGIES, PER_PERSON_TYPICAL_MESSAGE,
};
use crate::data::UsageRecord;
use crate::report::types::{ChartData, Estimate, EstimateOptions};

/// Markdown formatter for estimates
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format an estimate as a full markdown page
    pub fn format(estimate: &Estimate, options: &EstimateOptions) -> String {
        let mut md = String::with_capacity(4096);

        md.push_str("# Daily Household Water Usage Estimator\n\n");
        md.push_str("This tool estimates your household's total daily water consumption based on the number of residents.  \n");
        md.push_str("It encourages water conservation and assists with better resource management for both households and cities.\n\n");

        let _ = writeln!(
            md,
            "## Estimated Daily Water Usage: {:.0} liters\n",
            estimate.predicted_usage
        );

        // Tier + per-person advisories
        let tier = estimate.advisory.household_tier;
        md.push_str("### Water Conservation Recommendations\n\n");
        let _ = writeln!(
            md,
            "**Household tier:** {} ({})\n",
            tier.display_name(),
            tier.range_display()
        );
        let _ = writeln!(md, "ℹ️ {}\n", tier.message());

        if estimate.advisory.per_person_flag {
            let _ = writeln!(md, "⚠️ {}\n", PER_PERSON_HIGH_MESSAGE);
            Self::push_tips(&mut md, PER_PERSON_STRATEGIES);
            md.push('\n');
        } else {
            let _ = writeln!(md, "✅ {}\n", PER_PERSON_TYPICAL_MESSAGE);
        }

        if options.show_equation {
            md.push_str("#### Linear Regression Equation\n\n");
            let _ = writeln!(md, "`{}`\n", estimate.model.equation);
        }

        let _ = writeln!(
            md,
            "## Predicted Daily Water Usage for {} Residents: {:.0} liters\n",
            estimate.residents, estimate.predicted_usage
        );

        if let Some(preview) = &estimate.sample_preview {
            Self::format_sample(&mut md, preview);
        }

        if let Some(chart) = &estimate.chart {
            Self::format_chart(&mut md, chart);
        }

        if options.show_tips {
            md.push_str("### Additional Water Conservation Tips\n\n");
            for section in GENERAL_TIPS {
                let _ = writeln!(md, "#### {}\n", section.heading);
                Self::push_tips(&mut md, section.tips);
                md.push('\n');
            }
        }

        if estimate.advisory.large_household_flag {
            Self::format_large_household(&mut md, estimate.advisory.large_household_above);
        }

        md
    }

    fn push_tips(md: &mut String, tips: &[Tip]) {
        for tip in tips {
            // Details that continue the title's sentence are joined without a colon
            if tip.detail.starts_with(char::is_lowercase) {
                let _ = writeln!(md, "- **{}** {}", tip.title, tip.detail);
            } else {
                let _ = writeln!(md, "- **{}**: {}", tip.title, tip.detail);
            }
        }
    }

    fn format_sample(md: &mut String, rows: &[UsageRecord]) {
        md.push_str("### Sample Data\n\n");
        md.push_str("| | Residents | WaterUsage_Liters |\n");
        md.push_str("|---|---:|---:|\n");
        for (idx, row) in rows.iter().enumerate() {
            let _ = writeln!(md, "| {} | {} | {:.2} |", idx, row.residents, row.usage_liters);
        }
        md.push('\n');
    }

    fn format_chart(md: &mut String, chart: &ChartData) {
        md.push_str("### Household Size vs. Daily Water Usage\n\n");
        md.push_str("| Number of Residents | Prediction Line (L/day) |\n");
        md.push_str("|---:|---:|\n");
        for point in &chart.prediction_line {
            let _ = writeln!(md, "| {} | {:.1} |", point.residents, point.liters);
        }

        let min = chart
            .observations
            .iter()
            .map(|o| o.usage_liters)
            .fold(f64::INFINITY, f64::min);
        let max = chart
            .observations
            .iter()
            .map(|o| o.usage_liters)
            .fold(f64::NEG_INFINITY, f64::max);
        if !chart.observations.is_empty() {
            let _ = writeln!(
                md,
                "\n*Simulated data:* {} households, {:.0}-{:.0} liters/day\n",
                chart.observations.len(),
                min,
                max
            );
        } else {
            md.push('\n');
        }
    }

    fn format_large_household(md: &mut String, large_household_above: u32) {
        md.push_str("### Large Household Water Conservation Strategies\n\n");
        let _ = writeln!(md, "⚠️ {}\n", large_household_warning(large_household_above));
        let _ = writeln!(md, "{}\n", LARGE_HOUSEHOLD_INTRO);
        for strategy in LARGE_HOUSEHOLD_STRATEGIES {
            let _ = writeln!(md, "- **{}**: {}", strategy.title, strategy.detail);
            let _ = writeln!(md, "  - **Example**: {}", strategy.example);
        }
        let _ = writeln!(md, "\n**Remember**: {}", LARGE_HOUSEHOLD_REMINDER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EstimatorConfig;
    use crate::estimator::UsageEstimator;

    fn estimator() -> UsageEstimator {
        UsageEstimator::new(EstimatorConfig::default()).unwrap()
    }

    #[test]
    fn test_format_reference_household() {
        let estimate = estimator().estimate(4).unwrap();
        let md = MarkdownFormatter::format(&estimate, &EstimateOptions::default());

        assert!(md.contains("## Estimated Daily Water Usage: 303 liters"));
        assert!(md.contains("With 3 to 4 residents"));
        assert!(md.contains(PER_PERSON_HIGH_MESSAGE));
        assert!(md.contains("- **Turn off the tap** when brushing teeth"));
        assert!(md.contains("- **Fix leaks**: Even small drips"));
        assert!(md.contains("## Predicted Daily Water Usage for 4 Residents: 303 liters"));
        assert!(!md.contains("Linear Regression Equation"));
        assert!(!md.contains("Large Household"));
        assert!(md.contains("**Household tier:** Moderate (3-4 residents)"));
        assert!(md.contains("### Additional Water Conservation Tips"));
    }

    #[test]
    fn test_tips_can_be_hidden() {
        let options = EstimateOptions {
            show_tips: false,
            ..EstimateOptions::default()
        };
        let estimate = estimator().estimate(4).unwrap();
        let md = MarkdownFormatter::format(&estimate, &options);

        assert!(!md.contains("Additional Water Conservation Tips"));
        assert!(md.contains("## Predicted Daily Water Usage for 4 Residents"));
    }

    #[test]
    fn test_large_household_warning_follows_config() {
        let mut config = EstimatorConfig::default();
        config.advisory.large_household_above = 6;
        let estimate = UsageEstimator::new(config).unwrap().estimate(7).unwrap();
        let md = MarkdownFormatter::format(&estimate, &EstimateOptions::default());

        assert!(md.contains("**Household tier:** High (7-10 residents)"));
        assert!(md.contains("Households with more than 6 residents"));
        assert!(!md.contains("more than 9 residents"));
    }

    #[test]
    fn test_large_household_section() {
        let estimate = estimator().estimate(10).unwrap();
        let md = MarkdownFormatter::format(&estimate, &EstimateOptions::default());

        assert!(md.contains("### Large Household Water Conservation Strategies"));
        assert!(md.contains("Households with more than 9 residents"));
        assert!(md.contains("**Greywater Recycling**"));
        assert!(md.contains("  - **Example**: Replace grass lawns"));
    }

    #[test]
    fn test_typical_usage_message() {
        // Per-person usage drops below 75 L from 5 residents upward
        let estimate = estimator().estimate(5).unwrap();
        let md = MarkdownFormatter::format(&estimate, &EstimateOptions::default());

        assert!(md.contains(PER_PERSON_TYPICAL_MESSAGE));
        assert!(!md.contains(PER_PERSON_HIGH_MESSAGE));
    }

    #[test]
    fn test_full_page() {
        let options = EstimateOptions::full();
        let estimate = estimator().estimate_with(4, options).unwrap();
        let md = MarkdownFormatter::format(&estimate, &options);

        assert!(md.contains("`Water Usage (liters) = 71.02 * Residents + 18.48`"));
        assert!(md.contains("| 0 | 7 | 454.36 |"));
        assert!(md.contains("| 15 | 1083.9 |"));
        assert!(md.contains("*Simulated data:* 100 households"));
        assert!(md.contains("#### Garden & Lawn"));
        assert!(md.contains("- **Insulate pipes**: Prevent water waste"));
    }
}
