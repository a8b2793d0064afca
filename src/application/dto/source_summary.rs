use serde::Serialize;

/// Per-file counts reported alongside results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    pub path: String,
    /// Number of `name==version` lines found
    pub pinned_count: usize,
    /// Number of distinct dependents named in via annotations
    pub dependent_count: usize,
}

impl SourceSummary {
    pub fn new(path: impl Into<String>, pinned_count: usize, dependent_count: usize) -> Self {
        Self {
            path: path.into(),
            pinned_count,
            dependent_count,
        }
    }
}
