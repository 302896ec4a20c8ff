//! Synthetic Sample Generation
//!
//! Builds the (residents, daily usage) sample the regression is fitted on.
//! The sample is generated once, never mutated, and can be viewed as a Polars
//! DataFrame for display or exported to CSV.

use polars::prelude::*;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::utils::ReferenceStream;

/// Column names used in the DataFrame view (match the reference page's table)
pub const RESIDENTS_COLUMN: &str = "Residents";
pub const USAGE_COLUMN: &str = "WaterUsage_Liters";

/// One simulated household
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub residents: u32,
    pub usage_liters: f64,
}

/// Immutable synthetic sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    records: Vec<UsageRecord>,
}

impl Sample {
    /// Wrap existing records (used for fitting hand-built datasets)
    pub fn from_records(records: Vec<UsageRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `n` records
    pub fn head(&self, n: usize) -> &[UsageRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Columnar view for tabular display
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let residents: Vec<i64> = self.records.iter().map(|r| r.residents as i64).collect();
        let usage: Vec<f64> = self.records.iter().map(|r| r.usage_liters).collect();

        let df = df!(
            RESIDENTS_COLUMN => residents,
            USAGE_COLUMN => usage
        )?;
        Ok(df)
    }

    /// Write the full sample as CSV (with header)
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut df = self.to_dataframe()?;
        let mut file = File::create(path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;

        tracing::info!(path = %path.display(), rows = df.height(), "Exported sample CSV");
        Ok(())
    }
}

/// Generate the reference sample for `seed` with default parameters
pub fn generate(seed: u32) -> Sample {
    // Defaults always validate
    let sample = draw_sample(&mut ReferenceStream::seeded(seed), &GeneratorConfig::default());
    tracing::debug!(seed, records = sample.len(), "Generated synthetic sample");
    sample
}

/// Generate a sample from the MT19937 reference stream
///
/// Fails with `InvalidConfig` when `config` does not validate.
pub fn generate_with_config(seed: u32, config: &GeneratorConfig) -> Result<Sample> {
    config.validate()?;
    let sample = draw_sample(&mut ReferenceStream::seeded(seed), config);

    tracing::debug!(seed, records = sample.len(), "Generated synthetic sample");
    Ok(sample)
}

/// Generate a sample from an arbitrary word source
pub fn generate_with_rng<R: RngCore>(rng: R, config: &GeneratorConfig) -> Result<Sample> {
    config.validate()?;
    Ok(draw_sample(&mut ReferenceStream::new(rng), config))
}

/// All resident draws come first, then all noise draws (stream order matters for parity).
/// `config` must have passed `GeneratorConfig::validate`.
fn draw_sample<R: RngCore>(stream: &mut ReferenceStream<R>, config: &GeneratorConfig) -> Sample {
    let n = config.sample_size;

    let residents: Vec<u32> = (0..n)
        .map(|_| stream.bounded(config.residents_min, config.residents_max))
        .collect();

    let per_person: Vec<f64> = (0..n)
        .map(|_| stream.normal(config.noise_mean, config.noise_std))
        .collect();

    let records = residents
        .into_iter()
        .zip(per_person)
        .map(|(residents, liters_per_person)| UsageRecord {
            residents,
            usage_liters: (residents as f64 * liters_per_person)
                .clamp(config.usage_floor, config.usage_ceiling),
        })
        .collect();

    Sample { records }
}
