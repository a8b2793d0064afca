use std::collections::BTreeMap;
use std::path::PathBuf;

/// CheckRequest - request DTO for the minimum-version check
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub sources: Vec<PathBuf>,
    /// Package name -> lowest acceptable pinned version
    pub minimum_versions: BTreeMap<String, String>,
}

impl CheckRequest {
    pub fn new(sources: Vec<PathBuf>, minimum_versions: BTreeMap<String, String>) -> Self {
        Self {
            sources,
            minimum_versions,
        }
    }
}
