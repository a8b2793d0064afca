use super::SourceSummary;
use crate::requirements_analysis::policies::PolicyOutcome;
use serde::Serialize;

/// CheckResponse - outcome of the minimum-version check
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub sources: Vec<SourceSummary>,
    #[serde(flatten)]
    pub outcome: PolicyOutcome,
}

impl CheckResponse {
    pub fn new(sources: Vec<SourceSummary>, outcome: PolicyOutcome) -> Self {
        Self { sources, outcome }
    }

    /// Whether any pinned version fell below its minimum
    /// Used to determine exit code for CI integration
    pub fn has_violations(&self) -> bool {
        !self.outcome.is_satisfied()
    }
}
