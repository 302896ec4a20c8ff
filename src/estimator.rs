//! Usage Estimator - coordinator for the estimation pipeline
//!
//! Generates the synthetic sample and fits the model once at construction,
//! then answers any number of estimates against that immutable state.
//! Safe to share across threads (`Arc<UsageEstimator>`).

use crate::advisory::AdvisorySelector;
use crate::config::EstimatorConfig;
use crate::data::{generate_with_config, Sample, UsageRecord};
use crate::error::{EstimatorError, Result};
use crate::model::LinearModel;
use crate::report::{ChartData, Estimate, EstimateOptions, ModelSummary};

/// Rows shown in the sample preview
pub const SAMPLE_PREVIEW_ROWS: usize = 10;

/// Main estimator
#[derive(Debug)]
pub struct UsageEstimator {
    config: EstimatorConfig,
    sample: Sample,
    model: LinearModel,
    selector: AdvisorySelector,
}

impl UsageEstimator {
    /// Generate the sample and fit the model
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;

        let sample = generate_with_config(config.seed, &config.generator)?;
        let model = LinearModel::fit(&sample)?;
        let selector = AdvisorySelector::new(config.advisory.clone());

        tracing::info!(
            seed = config.seed,
            records = sample.len(),
            equation = %model,
            "Usage estimator initialized"
        );

        Ok(Self {
            config,
            sample,
            model,
            selector,
        })
    }

    /// Default configuration with a different seed
    pub fn with_seed(seed: u32) -> Result<Self> {
        Self::new(EstimatorConfig {
            seed,
            ..EstimatorConfig::default()
        })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    pub fn model_summary(&self) -> ModelSummary {
        ModelSummary::new(&self.model, self.config.seed, self.sample.len())
    }

    /// Estimate with no optional sections
    pub fn estimate(&self, residents: u32) -> Result<Estimate> {
        self.estimate_with(residents, EstimateOptions::default())
    }

    /// Predict, classify and attach the requested optional sections
    pub fn estimate_with(&self, residents: u32, options: EstimateOptions) -> Result<Estimate> {
        let range = self.config.input_range();
        if !range.contains(&residents) {
            return Err(EstimatorError::invalid_input(
                residents,
                format!("expected a value in [{}, {}]", range.start(), range.end()),
            ));
        }

        let predicted_usage = self.model.predict(residents);
        let advisory = self.selector.classify(residents, predicted_usage)?;

        tracing::debug!(
            residents,
            predicted_usage,
            tier = advisory.household_tier.label(),
            per_person_flag = advisory.per_person_flag,
            large_household_flag = advisory.large_household_flag,
            "Estimate computed"
        );

        Ok(Estimate {
            residents,
            predicted_usage,
            advisory,
            model: self.model_summary(),
            sample_preview: options
                .show_sample
                .then(|| self.sample_preview(SAMPLE_PREVIEW_ROWS)),
            chart: options.show_chart.then(|| self.chart_data()),
        })
    }

    /// First `limit` sample rows
    pub fn sample_preview(&self, limit: usize) -> Vec<UsageRecord> {
        self.sample.head(limit).to_vec()
    }

    /// Prediction line over the input range plus every sample point
    pub fn chart_data(&self) -> ChartData {
        ChartData {
            prediction_line: self.model.prediction_line(self.config.input_range()),
            observations: self.sample.records().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::HouseholdTier;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_estimate() {
        let estimator = UsageEstimator::new(EstimatorConfig::default()).unwrap();
        let estimate = estimator.estimate(4).unwrap();

        assert_relative_eq!(estimate.predicted_usage, 302.5818340261133, epsilon = 1e-9);
        assert_eq!(estimate.advisory.household_tier, HouseholdTier::Moderate);
        assert!(estimate.advisory.per_person_flag);
        assert!(!estimate.advisory.large_household_flag);
        assert!(estimate.sample_preview.is_none());
        assert!(estimate.chart.is_none());
    }

    #[test]
    fn test_input_range_enforced() {
        let estimator = UsageEstimator::with_seed(42).unwrap();
        assert!(estimator.estimate(0).unwrap_err().is_invalid_input());
        assert!(estimator.estimate(16).unwrap_err().is_invalid_input());
        assert!(estimator.estimate(1).is_ok());
        assert!(estimator.estimate(15).is_ok());
    }

    #[test]
    fn test_optional_sections() {
        let estimator = UsageEstimator::with_seed(42).unwrap();
        let estimate = estimator.estimate_with(12, EstimateOptions::full()).unwrap();

        let preview = estimate.sample_preview.unwrap();
        assert_eq!(preview.len(), SAMPLE_PREVIEW_ROWS);
        assert_eq!(preview[0].residents, 7);

        let chart = estimate.chart.unwrap();
        assert_eq!(chart.prediction_line.len(), 15);
        assert_eq!(chart.prediction_line[0].residents, 1);
        assert_eq!(chart.observations.len(), 100);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = EstimatorConfig::default();
        config.generator.usage_floor = 2000.0;

        let err = UsageEstimator::new(config).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidConfig(_)));
    }

    #[test]
    fn test_model_summary() {
        let estimator = UsageEstimator::with_seed(42).unwrap();
        let summary = estimator.model_summary();
        assert_eq!(summary.seed, 42);
        assert_eq!(summary.sample_size, 100);
        assert_eq!(summary.equation, "Water Usage (liters) = 71.02 * Residents + 18.48");
    }
}
