//! Estimator Configuration
//!
//! Every parameter of the pipeline (seed, sample shape, advisory thresholds,
//! accepted input range) with defaults matching the reference application.
//! Loaded from an optional JSON file; missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use anyhow::{Context, Result};

use crate::error::EstimatorError;

/// Seed used by the reference application
pub const DEFAULT_SEED: u32 = 42;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Seed for the synthetic sample stream
    pub seed: u32,

    pub generator: GeneratorConfig,

    pub advisory: AdvisoryThresholds,

    /// Resident counts accepted by `UsageEstimator::estimate` (slider bounds)
    pub input_min: u32,
    pub input_max: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            generator: GeneratorConfig::default(),
            advisory: AdvisoryThresholds::default(),
            input_min: 1,
            input_max: 15,
        }
    }
}

impl EstimatorConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: EstimatorConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Reject configurations the pipeline cannot run with
    pub fn validate(&self) -> crate::error::Result<()> {
        self.generator.validate()?;
        if self.input_min == 0 || self.input_min > self.input_max {
            return Err(EstimatorError::InvalidConfig(format!(
                "input range must satisfy 1 <= min <= max, got [{}, {}]",
                self.input_min,
                self.input_max
            )));
        }
        Ok(())
    }

    pub fn input_range(&self) -> RangeInclusive<u32> {
        self.input_min..=self.input_max
    }
}

/// Shape of the synthetic sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of records (N)
    pub sample_size: usize,

    /// Inclusive resident bounds
    pub residents_min: u32,
    pub residents_max: u32,

    /// Per-person daily usage distribution (liters)
    pub noise_mean: f64,
    pub noise_std: f64,

    /// Clamp bounds applied to household usage (liters)
    pub usage_floor: f64,
    pub usage_ceiling: f64,
}

impl GeneratorConfig {
    /// Reject sample shapes the generator cannot draw
    pub fn validate(&self) -> crate::error::Result<()> {
        let g = self;
        if g.sample_size < 2 {
            return Err(EstimatorError::InvalidConfig(format!(
                "sample_size must be at least 2, got {}",
                g.sample_size
            )));
        }
        if g.residents_min == 0 || g.residents_min >= g.residents_max {
            return Err(EstimatorError::InvalidConfig(format!(
                "resident range must satisfy 1 <= min < max, got [{}, {}]",
                g.residents_min,
                g.residents_max
            )));
        }
        if !(g.noise_std >= 0.0) {
            return Err(EstimatorError::InvalidConfig(format!(
                "noise_std must be non-negative, got {}",
                g.noise_std
            )));
        }
        if !(g.usage_floor < g.usage_ceiling) {
            return Err(EstimatorError::InvalidConfig(format!(
                "usage clamp must satisfy floor < ceiling, got [{}, {}]",
                g.usage_floor,
                g.usage_ceiling
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_size: 100,
            residents_min: 1,
            residents_max: 14,
            noise_mean: 75.0,
            noise_std: 10.0,
            usage_floor: 30.0,
            usage_ceiling: 1000.0,
        }
    }
}

/// Thresholds for the per-person and large-household advisories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryThresholds {
    /// Liters per person per day above which usage is flagged
    pub per_person_limit: f64,

    /// Households strictly larger than this get the large-household block
    pub large_household_above: u32,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            per_person_limit: 75.0,
            large_household_above: 9,
        }
    }
}
