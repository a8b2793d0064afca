use crate::application::dto::SourceSummary;
use crate::ports::outbound::{ProgressReporter, RequirementsReader};
use crate::requirements_analysis::domain::PinnedEntry;
use crate::requirements_analysis::services::RequirementsParser;
use crate::shared::error::ViaError;
use crate::shared::Result;
use anyhow::Context;
use std::path::PathBuf;

/// One requirements file after scanning
pub(crate) struct LoadedSource {
    pub summary: SourceSummary,
    pub entries: Vec<PinnedEntry>,
}

/// Reads and scans every source in order, reporting progress as it goes
///
/// Fails on the first unreadable file; no partial result is returned.
pub(crate) fn load_sources<R, PR>(
    reader: &R,
    progress_reporter: &PR,
    sources: &[PathBuf],
) -> Result<Vec<LoadedSource>>
where
    R: RequirementsReader,
    PR: ProgressReporter,
{
    if sources.is_empty() {
        return Err(ViaError::Validation {
            message: "At least one requirements file must be given".to_string(),
        }
        .into());
    }

    let total = sources.len();
    let mut loaded = Vec::with_capacity(total);

    for (i, path) in sources.iter().enumerate() {
        let label = path.display().to_string();
        progress_reporter.report_progress(i, total, Some(&label));

        let content = reader
            .read_requirements(path)
            .with_context(|| format!("Failed to load requirements from {}", label))?;
        let entries = RequirementsParser::parse_entries(&content);
        let dependent_count = RequirementsParser::mapping_from_entries(&entries).len();

        loaded.push(LoadedSource {
            summary: SourceSummary::new(label, entries.len(), dependent_count),
            entries,
        });
    }

    progress_reporter.report_progress(total, total, None);
    Ok(loaded)
}
