use crate::application::dto::{CheckResponse, MappingResponse, SourceSummary};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the sources section
const SOURCES_TABLE_HEADER: &str = "| File | Pinned Packages | Dependents |\n";

/// Markdown table separator line for the sources section
const SOURCES_TABLE_SEPARATOR: &str = "|------|-----------------|------------|\n";

const MAPPING_TABLE_HEADER: &str = "| Dependent | Pulls In |\n";

const MAPPING_TABLE_SEPARATOR: &str = "|-----------|----------|\n";

const VIOLATION_TABLE_HEADER: &str =
    "| Package | Pinned Version | Minimum Version | Required By |\n";

const VIOLATION_TABLE_SEPARATOR: &str =
    "|---------|----------------|-----------------|-------------|\n";

/// MarkdownFormatter adapter for human-readable reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn join_cells(names: &[String]) -> String {
        if names.is_empty() {
            return "-".to_string();
        }
        names
            .iter()
            .map(|n| Self::escape_markdown_table_cell(n))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn render_sources(output: &mut String, sources: &[SourceSummary]) {
        output.push_str("## Sources\n\n");
        if sources.is_empty() {
            output.push_str("*No requirements files were read*\n\n");
            return;
        }
        output.push_str(SOURCES_TABLE_HEADER);
        output.push_str(SOURCES_TABLE_SEPARATOR);
        for source in sources {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&source.path),
                source.pinned_count,
                source.dependent_count
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_mapping(&self, response: &MappingResponse) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Reverse Dependency Mapping\n\n");
        Self::render_sources(&mut output, &response.sources);

        output.push_str("## Dependents\n\n");
        output.push_str("Packages named in `# via` annotations and what each one pulled in.\n\n");

        if response.mapping.is_empty() {
            output.push_str("*No via annotations found*\n");
            return Ok(output);
        }

        output.push_str(MAPPING_TABLE_HEADER);
        output.push_str(MAPPING_TABLE_SEPARATOR);
        for (dependent, packages) in response.mapping.iter() {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(dependent),
                Self::join_cells(packages)
            ));
        }
        Ok(output)
    }

    fn format_check(&self, response: &CheckResponse) -> Result<String> {
        let outcome = &response.outcome;
        let mut output = String::new();
        output.push_str("# Minimum Version Check\n\n");
        Self::render_sources(&mut output, &response.sources);

        output.push_str("## Result\n\n");
        output.push_str(&format!(
            "Checked {} pinned version(s); {} below minimum.\n\n",
            outcome.checked,
            outcome.violations.len()
        ));

        if outcome.is_satisfied() {
            output.push_str("*All checked versions meet their minimum*\n");
        } else {
            output.push_str(VIOLATION_TABLE_HEADER);
            output.push_str(VIOLATION_TABLE_SEPARATOR);
            for violation in &outcome.violations {
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&violation.package),
                    Self::escape_markdown_table_cell(&violation.pinned_version),
                    Self::escape_markdown_table_cell(&violation.minimum_version),
                    Self::join_cells(&violation.via)
                ));
            }
        }

        if !outcome.unmatched_minimums.is_empty() {
            output.push_str("\n## Unmatched Minimums\n\n");
            output.push_str("No pinned package matched these configured minimums:\n\n");
            for package in &outcome.unmatched_minimums {
                output.push_str(&format!("- `{}`\n", package));
            }
        }
        Ok(output)
    }
}
