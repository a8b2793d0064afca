use super::SourceSummary;
use crate::requirements_analysis::domain::DependencyMapping;
use serde::Serialize;

/// MappingResponse - merged reverse mapping plus where it came from
#[derive(Debug, Clone, Serialize)]
pub struct MappingResponse {
    pub sources: Vec<SourceSummary>,
    pub mapping: DependencyMapping,
}

impl MappingResponse {
    pub fn new(sources: Vec<SourceSummary>, mapping: DependencyMapping) -> Self {
        Self { sources, mapping }
    }
}
