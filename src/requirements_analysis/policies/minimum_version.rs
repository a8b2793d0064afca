use crate::requirements_analysis::domain::{canonical_name, PinnedEntry};
use crate::requirements_analysis::services::VersionComparator;
use crate::shared::error::ViaError;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// A pinned entry whose version is below its configured minimum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionViolation {
    pub package: String,
    pub pinned_version: String,
    pub minimum_version: String,
    pub via: Vec<String>,
}

/// Result of running the policy over a set of pinned entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PolicyOutcome {
    /// Entries that had a minimum configured
    pub checked: usize,
    pub violations: Vec<VersionViolation>,
    /// Configured package names that matched no pinned entry
    pub unmatched_minimums: Vec<String>,
}

impl PolicyOutcome {
    pub fn is_satisfied(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone)]
struct ConfiguredMinimum {
    /// Package name as the user wrote it
    package: String,
    version: String,
}

/// MinimumVersionPolicy - decides whether pinned versions are acceptable
///
/// A pinned entry passes when its version compares greater than or equal
/// to the configured minimum for its name. Names are matched in their
/// PEP 503 form with extras ignored, so a minimum for `PyYAML` covers
/// `pyyaml` and one for `uvicorn` covers `uvicorn[standard]`.
#[derive(Debug, Clone, Default)]
pub struct MinimumVersionPolicy {
    minimums: BTreeMap<String, ConfiguredMinimum>,
}

impl MinimumVersionPolicy {
    /// Builds the policy, rejecting minimums that are not valid versions
    /// and conflicting minimums for what is the same package
    pub fn new(minimums: BTreeMap<String, String>) -> Result<Self> {
        let mut table: BTreeMap<String, ConfiguredMinimum> = BTreeMap::new();

        for (package, minimum) in minimums {
            if package.trim().is_empty() {
                return Err(ViaError::Validation {
                    message: "minimum version entry has an empty package name".to_string(),
                }
                .into());
            }
            // compare against itself purely to validate the format
            VersionComparator::compare(&minimum, &minimum)
                .with_context(|| format!("Invalid minimum version for '{}'", package))?;

            let key = canonical_name(&package);
            if let Some(existing) = table.get(&key) {
                if existing.version != minimum {
                    return Err(ViaError::Validation {
                        message: format!(
                            "Conflicting minimum versions for '{}' ({}) and '{}' ({}): \
                             both name the same package",
                            existing.package, existing.version, package, minimum
                        ),
                    }
                    .into());
                }
                continue;
            }
            table.insert(
                key,
                ConfiguredMinimum {
                    package,
                    version: minimum,
                },
            );
        }

        Ok(Self { minimums: table })
    }

    pub fn is_empty(&self) -> bool {
        self.minimums.is_empty()
    }

    pub fn minimum_for(&self, package: &str) -> Option<&str> {
        self.minimums
            .get(&canonical_name(package))
            .map(|m| m.version.as_str())
    }

    /// Checks every entry that has a minimum configured
    ///
    /// Minimums that no entry matched are listed in
    /// [`PolicyOutcome::unmatched_minimums`] so callers can warn about them.
    ///
    /// # Errors
    /// Fails on the first pinned version that is not a dotted numeric
    /// version, instead of guessing an ordering for it.
    pub fn evaluate(&self, entries: &[PinnedEntry]) -> Result<PolicyOutcome> {
        let mut outcome = PolicyOutcome::default();
        let mut matched: BTreeSet<String> = BTreeSet::new();

        for entry in entries {
            let key = entry.canonical_name();
            let Some(configured) = self.minimums.get(&key) else {
                continue;
            };
            outcome.checked += 1;

            let ordering = VersionComparator::compare(entry.version(), &configured.version)
                .with_context(|| format!("Cannot check pinned version of '{}'", entry.name()))?;

            if ordering == Ordering::Less {
                outcome.violations.push(VersionViolation {
                    package: entry.name().to_string(),
                    pinned_version: entry.version().to_string(),
                    minimum_version: configured.version.clone(),
                    via: entry.via().to_vec(),
                });
            }
            matched.insert(key);
        }

        outcome.unmatched_minimums = self
            .minimums
            .iter()
            .filter(|(key, _)| !matched.contains(*key))
            .map(|(_, configured)| configured.package.clone())
            .collect();

        Ok(outcome)
    }
}
