use crate::application::dto::ReconcileResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering the final reconciliation report
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ReconcileResponse) -> Result<String>;
}
