use crate::report::types::Estimate;

/// JSON formatter for estimates
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format estimate as pretty-printed JSON
    pub fn format(estimate: &Estimate) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(estimate)
    }

    /// Format estimate as compact JSON (no whitespace)
    pub fn format_compact(estimate: &Estimate) -> Result<String, serde_json::Error> {
        serde_json::to_string(estimate)
    }
}
