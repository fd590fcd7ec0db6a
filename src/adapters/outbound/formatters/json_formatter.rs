use crate::application::dto::ReconcileResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter for a machine-readable reconciliation report
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &ReconcileResponse) -> Result<String> {
        let mut json = serde_json::to_string_pretty(response)
            .context("Failed to serialize reconciliation report to JSON")?;
        json.push('\n');
        Ok(json)
    }
}
