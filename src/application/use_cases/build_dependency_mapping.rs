use super::source_loader::load_sources;
use crate::application::dto::{MappingRequest, MappingResponse};
use crate::ports::outbound::{ProgressReporter, RequirementsReader};
use crate::requirements_analysis::domain::DependencyMapping;
use crate::requirements_analysis::services::{DependencyFilter, MappingMerger, RequirementsParser};
use crate::shared::error::ViaError;
use crate::shared::Result;

/// BuildDependencyMappingUseCase - reads, parses and merges requirements files
///
/// # Type Parameters
/// * `R` - RequirementsReader implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildDependencyMappingUseCase<R, PR> {
    requirements_reader: R,
    progress_reporter: PR,
}

impl<R, PR> BuildDependencyMappingUseCase<R, PR>
where
    R: RequirementsReader,
    PR: ProgressReporter,
{
    pub fn new(requirements_reader: R, progress_reporter: PR) -> Self {
        Self {
            requirements_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// Sources are merged in request order, so the first file decides the
    /// order of keys and packages it shares with later files.
    pub fn execute(&self, request: MappingRequest) -> Result<MappingResponse> {
        // Validate patterns before touching any file
        let filter = DependencyFilter::new(request.exclude_patterns)?;

        self.progress_reporter.report(&format!(
            "📖 Reading {} requirements file(s)...",
            request.sources.len()
        ));
        let loaded = load_sources(
            &self.requirements_reader,
            &self.progress_reporter,
            &request.sources,
        )?;

        let mappings: Vec<DependencyMapping> = loaded
            .iter()
            .map(|source| RequirementsParser::mapping_from_entries(&source.entries))
            .collect();
        let merged = MappingMerger::merge_all(&mappings);

        self.progress_reporter.report(&format!(
            "✅ Found {} dependent(s) pulling in {} package link(s)",
            merged.len(),
            merged.pair_count()
        ));

        let mapping = if filter.is_empty() {
            merged
        } else {
            self.apply_filter(&filter, merged)?
        };

        let summaries = loaded.into_iter().map(|source| source.summary).collect();
        self.progress_reporter
            .report_completion("✅ Dependency mapping complete");

        Ok(MappingResponse::new(summaries, mapping))
    }

    fn apply_filter(
        &self,
        filter: &DependencyFilter,
        merged: DependencyMapping,
    ) -> Result<DependencyMapping> {
        let filtered = filter.filter_mapping(&merged);

        let removed = merged.pair_count() - filtered.pair_count();
        if removed > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} package link(s) based on filters",
                removed
            ));
        }

        if filtered.is_empty() && !merged.is_empty() {
            return Err(ViaError::Validation {
                message: format!(
                    "All {} dependent(s) were excluded by the provided filters. \
                     The mapping would be empty. Please adjust your exclusion patterns.",
                    merged.len()
                ),
            }
            .into());
        }

        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                pattern
            ));
        }

        Ok(filtered)
    }
}
