use std::path::PathBuf;

/// MappingRequest - request DTO for building a merged reverse mapping
#[derive(Debug, Clone)]
pub struct MappingRequest {
    /// Pinned requirements files, merged in this order
    pub sources: Vec<PathBuf>,
    /// Patterns for excluding dependents or packages from the result
    pub exclude_patterns: Vec<String>,
}

impl MappingRequest {
    pub fn new(sources: Vec<PathBuf>, exclude_patterns: Vec<String>) -> Self {
        Self {
            sources,
            exclude_patterns,
        }
    }
}
