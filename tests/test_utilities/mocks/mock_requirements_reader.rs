use pip_via::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock RequirementsReader serving file contents from memory
#[derive(Default)]
pub struct MockRequirementsReader {
    files: HashMap<PathBuf, String>,
}

impl MockRequirementsReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl RequirementsReader for MockRequirementsReader {
    fn read_requirements(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock requirements file not found: {}", path.display()))
    }
}
