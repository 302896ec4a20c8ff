//! Error taxonomy for the estimation pipeline
//!
//! Generation never fails. Fitting fails only on a degenerate sample, and
//! classification only on a resident count the per-person division cannot take.

use thiserror::Error;

/// Errors raised by the estimation pipeline
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// Resident count outside the domain the operation accepts
    #[error("invalid resident count {residents}: {reason}")]
    InvalidInput { residents: u32, reason: String },

    /// Sample cannot support a least-squares fit
    #[error("degenerate sample: {0}")]
    DegenerateSample(String),

    /// Configuration the pipeline cannot run with
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("dataframe error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl EstimatorError {
    pub(crate) fn invalid_input(residents: u32, reason: impl Into<String>) -> Self {
        EstimatorError::InvalidInput {
            residents,
            reason: reason.into(),
        }
    }

    /// True when the caller supplied a bad value (as opposed to an internal failure)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EstimatorError::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
