use crate::requirements_analysis::domain::SemVerTriple;
use crate::shared::Result;
use std::cmp::Ordering;

/// VersionComparator service for numeric comparison of dotted versions
///
/// Each component is compared as an integer, so `"1.2.10"` sorts after
/// `"1.2.9"` and `"01.1.1"` equals `"1.1.1"`.
pub struct VersionComparator;

impl VersionComparator {
    /// Three-way comparison of `v1` against `v2`
    ///
    /// # Errors
    /// Returns `ViaError::InvalidVersionFormat` when either side has a
    /// non-numeric segment. Pre-release and build tags are not supported.
    pub fn compare(v1: &str, v2: &str) -> Result<Ordering> {
        let left = SemVerTriple::parse(v1)?;
        let right = SemVerTriple::parse(v2)?;
        Ok(left.cmp(&right))
    }

    /// Same as [`compare`](Self::compare), reported as `-1`, `0` or `1`
    pub fn compare_to_int(v1: &str, v2: &str) -> Result<i32> {
        Self::compare(v1, v2).map(|ordering| ordering as i32)
    }
}
