use crate::application::dto::{CheckResponse, MappingResponse};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

/// Tool information embedded in every JSON report
#[derive(Debug, Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

impl ToolInfo {
    fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a, T: Serialize> {
    tool: ToolInfo,
    #[serde(flatten)]
    body: &'a T,
}

/// JsonFormatter adapter producing pretty-printed JSON
///
/// Mapping keys keep their first-seen order, so output is stable across runs.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render<T: Serialize>(body: &T) -> Result<String> {
        let report = JsonReport {
            tool: ToolInfo::current(),
            body,
        };
        let mut json =
            serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_mapping(&self, response: &MappingResponse) -> Result<String> {
        Self::render(response)
    }

    fn format_check(&self, response: &CheckResponse) -> Result<String> {
        Self::render(response)
    }
}
