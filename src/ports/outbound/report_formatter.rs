use crate::application::read_models::SyncReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the cross-reference report
///
/// Implemented once per output format (aligned table, JSON).
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &SyncReport) -> Result<String>;
}
