/// A pinned requirement (`name==version`) together with the dependents
/// named in its via annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedEntry {
    name: String,
    version: String,
    via: Vec<String>,
}

impl PinnedEntry {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            via: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Dependents that pulled this package in, in first-seen order.
    pub fn via(&self) -> &[String] {
        &self.via
    }

    /// Records a dependent. Returns `false` if it was already recorded.
    pub fn add_via(&mut self, dependent: &str) -> bool {
        if self.via.iter().any(|d| d == dependent) {
            return false;
        }
        self.via.push(dependent.to_string());
        true
    }

    /// Name used to match this entry against per-package settings
    pub fn canonical_name(&self) -> String {
        canonical_name(&self.name)
    }
}

/// Normalizes a package name the way PyPI compares them (PEP 503).
///
/// Extras are dropped, letters are lowercased and every run of `-`, `_`
/// or `.` becomes a single `-`, so `PyYAML`, `pyyaml` and `charset_normalizer`
/// / `charset-normalizer` each collapse to one name.
pub fn canonical_name(name: &str) -> String {
    let base = name.split('[').next().unwrap_or(name).trim();
    let mut canonical = String::with_capacity(base.len());
    let mut in_separator = false;
    for c in base.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator {
                canonical.push('-');
            }
            in_separator = true;
        } else {
            canonical.extend(c.to_lowercase());
            in_separator = false;
        }
    }
    canonical
}
