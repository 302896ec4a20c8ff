use serde::{Deserialize, Serialize};

use crate::advisory::Advisory;
use crate::data::UsageRecord;
use crate::model::{LinearModel, PredictionPoint};

/// Everything the presentation layer shows for one resident count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    pub residents: u32,
    pub predicted_usage: f64,
    pub advisory: Advisory,
    pub model: ModelSummary,

    /// First rows of the sample (10 by default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_preview: Option<Vec<UsageRecord>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartData>,
}

/// Fitted coefficients plus the seed they came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub coefficient: f64,
    pub intercept: f64,
    pub equation: String,
    pub seed: u32,
    pub sample_size: usize,
}

impl ModelSummary {
    pub fn new(model: &LinearModel, seed: u32, sample_size: usize) -> Self {
        Self {
            coefficient: model.coefficient,
            intercept: model.intercept,
            equation: model.equation(),
            seed,
            sample_size,
        }
    }
}

/// Data behind the "household size vs. daily usage" chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    /// Model predictions across the input range
    pub prediction_line: Vec<PredictionPoint>,

    /// Raw simulated households
    pub observations: Vec<UsageRecord>,
}

/// Which optional sections to include
///
/// The general tips are part of the standard page and stay on unless disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EstimateOptions {
    pub show_equation: bool,
    pub show_sample: bool,
    pub show_chart: bool,
    pub show_tips: bool,
}

impl Default for EstimateOptions {
    fn default() -> Self {
        Self {
            show_equation: false,
            show_sample: false,
            show_chart: false,
            show_tips: true,
        }
    }
}

impl EstimateOptions {
    /// Every section on
    pub fn full() -> Self {
        Self {
            show_equation: true,
            show_sample: true,
            show_chart: true,
            show_tips: true,
        }
    }
}
