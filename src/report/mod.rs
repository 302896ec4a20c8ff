//! Estimate reports
//!
//! The presentation payload for one resident count and its Markdown / JSON
//! renderings.

pub mod types;
pub mod markdown;
pub mod json;

pub use types::{ChartData, Estimate, EstimateOptions, ModelSummary};
pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
