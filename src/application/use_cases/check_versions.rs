use super::source_loader::load_sources;
use crate::application::dto::{CheckRequest, CheckResponse};
use crate::ports::outbound::{ProgressReporter, RequirementsReader};
use crate::requirements_analysis::domain::PinnedEntry;
use crate::requirements_analysis::policies::MinimumVersionPolicy;
use crate::shared::error::ViaError;
use crate::shared::Result;

/// CheckVersionsUseCase - checks pinned versions against configured minimums
///
/// # Type Parameters
/// * `R` - RequirementsReader implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckVersionsUseCase<R, PR> {
    requirements_reader: R,
    progress_reporter: PR,
}

impl<R, PR> CheckVersionsUseCase<R, PR>
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

    pub fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        if request.minimum_versions.is_empty() {
            return Err(ViaError::Validation {
                message: "No minimum versions configured. Pass --min NAME=VERSION \
                          or add minimum_versions to the config file."
                    .to_string(),
            }
            .into());
        }
        let policy = MinimumVersionPolicy::new(request.minimum_versions)?;

        self.progress_reporter.report(&format!(
            "🔍 Checking pinned versions in {} requirements file(s)...",
            request.sources.len()
        ));
        let loaded = load_sources(
            &self.requirements_reader,
            &self.progress_reporter,
            &request.sources,
        )?;

        let entries: Vec<PinnedEntry> = loaded
            .iter()
            .flat_map(|source| source.entries.iter().cloned())
            .collect();
        let outcome = policy.evaluate(&entries)?;

        for package in &outcome.unmatched_minimums {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Minimum version for '{}' did not match any pinned package.",
                package
            ));
        }

        if outcome.is_satisfied() {
            self.progress_reporter.report_completion(&format!(
                "✅ {} pinned version(s) meet their minimum",
                outcome.checked
            ));
        } else {
            self.progress_reporter.report_warning(&format!(
                "⚠️  {} of {} checked version(s) are below their minimum",
                outcome.violations.len(),
                outcome.checked
            ));
        }

        let summaries = loaded.into_iter().map(|source| source.summary).collect();
        Ok(CheckResponse::new(summaries, outcome))
    }
}
