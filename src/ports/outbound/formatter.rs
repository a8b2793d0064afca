use crate::application::dto::{CheckResponse, MappingResponse};
use crate::shared::Result;

/// ReportFormatter port for rendering use case results
///
/// Implemented once per output format (JSON, Markdown).
pub trait ReportFormatter {
    /// Renders the merged reverse dependency mapping
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_mapping(&self, response: &MappingResponse) -> Result<String>;

    /// Renders the outcome of a minimum-version check
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_check(&self, response: &CheckResponse) -> Result<String>;
}
