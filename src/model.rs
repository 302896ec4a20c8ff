//! Single-feature Linear Model
//!
//! Ordinary least squares of household usage on resident count:
//!
//! ```text
//! coefficient = cov(residents, usage) / var(residents)
//! intercept   = mean(usage) - coefficient * mean(residents)
//! ```
//!
//! Sums are taken over centered values (two passes) to keep the fit stable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::data::Sample;
use crate::error::{EstimatorError, Result};

/// Fitted affine model: `usage = coefficient * residents + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficient: f64,
    pub intercept: f64,
}

/// A (residents, liters) point for charting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub residents: u32,
    pub liters: f64,
}

impl LinearModel {
    /// Fit on every record of the sample
    pub fn fit(sample: &Sample) -> Result<Self> {
        let points: Vec<(f64, f64)> = sample
            .records()
            .iter()
            .map(|r| (r.residents as f64, r.usage_liters))
            .collect();
        let model = Self::fit_points(&points)?;

        tracing::info!(
            records = sample.len(),
            coefficient = model.coefficient,
            intercept = model.intercept,
            "Fitted usage model"
        );
        Ok(model)
    }

    /// Fit on raw (x, y) pairs
    pub fn fit_points(points: &[(f64, f64)]) -> Result<Self> {
        if points.len() < 2 {
            return Err(EstimatorError::DegenerateSample(format!(
                "need at least 2 records, got {}",
                points.len()
            )));
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
            let dx = x - mean_x;
            (sxy + dx * (y - mean_y), sxx + dx * dx)
        });

        if sxx == 0.0 {
            return Err(EstimatorError::DegenerateSample(
                "residents column has zero variance".to_string(),
            ));
        }

        let coefficient = sxy / sxx;
        Ok(Self {
            coefficient,
            intercept: mean_y - coefficient * mean_x,
        })
    }

    /// Predicted daily liters; inputs outside the sampled range are extrapolated
    #[inline]
    pub fn predict(&self, residents: u32) -> f64 {
        self.coefficient * residents as f64 + self.intercept
    }

    /// Predictions for every resident count in `range`
    pub fn prediction_line(&self, range: RangeInclusive<u32>) -> Vec<PredictionPoint> {
        range
            .map(|residents| PredictionPoint {
                residents,
                liters: self.predict(residents),
            })
            .collect()
    }

    /// Equation in the reference page's wording
    pub fn equation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Water Usage (liters) = {:.2} * Residents + {:.2}",
            self.coefficient, self.intercept
        )
    }
}
