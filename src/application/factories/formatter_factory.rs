use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Keeps the choice of formatter adapter out of the CLI.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pip_via::application::dto::OutputFormat;
    /// use pip_via::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pip_via::application::dto::OutputFormat;
    /// use pip_via::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Markdown);
    /// assert_eq!(message, "📝 Generating Markdown report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::MappingResponse;
    use crate::requirements_analysis::domain::DependencyMapping;

    #[test]
    fn test_create_json_formatter_emits_json() {
        let formatter = FormatterFactory::create(OutputFormat::Json);
        let response = MappingResponse::new(vec![], DependencyMapping::new());
        let output = formatter.format_mapping(&response).unwrap();
        assert!(output.trim_start().starts_with('{'));
    }

    #[test]
    fn test_create_markdown_formatter_emits_markdown() {
        let formatter = FormatterFactory::create(OutputFormat::Markdown);
        let response = MappingResponse::new(vec![], DependencyMapping::new());
        let output = formatter.format_mapping(&response).unwrap();
        assert!(output.starts_with("# "));
    }

    #[test]
    fn test_progress_message_json() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Generating JSON report..."
        );
    }
}
