//! Pipeline Integration Tests
//!
//! Runs generate -> fit -> predict -> classify through the public API and
//! checks the result against values recorded from the reference application.

use approx::assert_relative_eq;
use water_usage_estimator::{
    classify, generate, EstimateOptions, EstimatorConfig, EstimatorError, HouseholdTier,
    JsonFormatter, LinearModel, MarkdownFormatter, Sample, UsageEstimator, UsageRecord,
};

// Recorded from the reference run (seed 42)
const REFERENCE_COEFFICIENT: f64 = 71.02479668404284;
const REFERENCE_INTERCEPT: f64 = 18.48264728994195;
const REFERENCE_USAGE_FOR_4: f64 = 302.5818340261133;

#[test]
fn test_end_to_end_reference_household() {
    let sample = generate(42);
    let model = LinearModel::fit(&sample).unwrap();

    assert_relative_eq!(model.coefficient, REFERENCE_COEFFICIENT, epsilon = 1e-9);
    assert_relative_eq!(model.intercept, REFERENCE_INTERCEPT, epsilon = 1e-9);

    let predicted = model.predict(4);
    assert_relative_eq!(predicted, REFERENCE_USAGE_FOR_4, epsilon = 1e-9);

    let advisory = classify(4, predicted).unwrap();
    assert_eq!(advisory.household_tier, HouseholdTier::Moderate);
    assert!(!advisory.large_household_flag);
    assert!(advisory.per_person_flag);
}

#[test]
fn test_determinism_across_estimators() {
    let a = UsageEstimator::with_seed(42).unwrap();
    let b = UsageEstimator::with_seed(42).unwrap();

    assert_eq!(a.sample(), b.sample());
    assert_eq!(a.model(), b.model());
    for residents in 1..=15 {
        assert_eq!(
            a.estimate(residents).unwrap().predicted_usage,
            b.estimate(residents).unwrap().predicted_usage
        );
    }
}

#[test]
fn test_clamp_invariant_over_many_seeds() {
    for seed in 0..50 {
        let sample = generate(seed);
        assert_eq!(sample.len(), 100);
        assert!(sample
            .records()
            .iter()
            .all(|r| (30.0..=1000.0).contains(&r.usage_liters)));
    }
}

#[test]
fn test_fit_recovers_noise_free_line() {
    let records: Vec<UsageRecord> = (0..100)
        .map(|i| {
            let residents = 1 + (i % 14) as u32;
            UsageRecord {
                residents,
                usage_liters: 3.0 * residents as f64 + 10.0,
            }
        })
        .collect();
    let model = LinearModel::fit(&Sample::from_records(records)).unwrap();

    assert_relative_eq!(model.coefficient, 3.0, epsilon = 1e-9);
    assert_relative_eq!(model.intercept, 10.0, epsilon = 1e-9);
}

#[test]
fn test_classification_table() {
    assert_eq!(classify(4, 300.0).unwrap().household_tier, HouseholdTier::Moderate);
    assert_eq!(classify(1, 80.0).unwrap().household_tier, HouseholdTier::Low);
    assert_eq!(classify(13, 900.0).unwrap().household_tier, HouseholdTier::Extreme);
    assert_eq!(classify(11, 800.0).unwrap().household_tier, HouseholdTier::VeryHigh);

    assert!(classify(5, 400.0).unwrap().per_person_flag);
    assert!(!classify(5, 300.0).unwrap().per_person_flag);

    assert!(classify(10, 1.0).unwrap().large_household_flag);
    assert!(!classify(9, 1.0).unwrap().large_household_flag);
}

#[test]
fn test_zero_residents_is_invalid_input() {
    assert!(matches!(
        classify(0, 250.0),
        Err(EstimatorError::InvalidInput { residents: 0, .. })
    ));
}

#[test]
fn test_seed_changes_sample_but_not_shape() {
    let estimator = UsageEstimator::new(EstimatorConfig {
        seed: 7,
        ..EstimatorConfig::default()
    })
    .unwrap();

    assert_ne!(estimator.sample(), &generate(42));
    let estimate = estimator.estimate(4).unwrap();
    // ~75 L per person with a small intercept
    assert!(estimate.predicted_usage > 200.0 && estimate.predicted_usage < 400.0);
}

#[test]
fn test_reports_render_for_every_slider_value() {
    let estimator = UsageEstimator::with_seed(42).unwrap();
    let options = EstimateOptions::full();

    for residents in 1..=15 {
        let estimate = estimator.estimate_with(residents, options).unwrap();

        let md = MarkdownFormatter::format(&estimate, &options);
        assert!(md.contains(estimate.advisory.household_tier.message()));
        assert_eq!(
            md.contains("Large Household Water Conservation Strategies"),
            residents > 9
        );

        let json = JsonFormatter::format(&estimate).unwrap();
        assert!(json.contains(estimate.advisory.household_tier.label()));
    }
}
