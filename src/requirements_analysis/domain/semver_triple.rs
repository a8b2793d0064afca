use crate::shared::error::ViaError;
use crate::shared::Result;
use std::fmt;

/// Numeric (major, minor, patch) decomposition of a dotted version string.
///
/// Field order matters: the derived `Ord` compares major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SemVerTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemVerTriple {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses `"1.02.3"` style strings.
    ///
    /// Leading zeros are ignored and missing trailing segments become `0`.
    /// Segments past the patch are validated but otherwise ignored.
    ///
    /// # Errors
    /// Returns [`ViaError::InvalidVersionFormat`] for empty input, empty
    /// segments, anything other than ASCII digits in a segment, or a segment
    /// too large for `u64`.
    pub fn parse(version: &str) -> Result<Self> {
        let trimmed = version.trim();
        if trimmed.is_empty() {
            return Err(invalid(version, "version string is empty"));
        }

        let mut components = [0u64; 3];
        for (position, segment) in trimmed.split('.').enumerate() {
            let value = parse_segment(version, segment)?;
            if let Some(slot) = components.get_mut(position) {
                *slot = value;
            }
        }

        let [major, minor, patch] = components;
        Ok(Self::new(major, minor, patch))
    }
}

fn parse_segment(version: &str, segment: &str) -> Result<u64> {
    if segment.is_empty() {
        return Err(invalid(version, "empty segment between dots"));
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(
            version,
            &format!("segment '{}' is not a non-negative integer", segment),
        ));
    }
    segment
        .parse::<u64>()
        .map_err(|_| invalid(version, &format!("segment '{}' is too large", segment)))
}

fn invalid(version: &str, reason: &str) -> anyhow::Error {
    ViaError::InvalidVersionFormat {
        version: version.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl fmt::Display for SemVerTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_triple() {
        assert_eq!(
            SemVerTriple::parse("1.2.3").unwrap(),
            SemVerTriple::new(1, 2, 3)
        );
    }

    #[test]
    fn test_parse_strips_leading_zeros() {
        assert_eq!(
            SemVerTriple::parse("01.001.0010").unwrap(),
            SemVerTriple::new(1, 1, 10)
        );
    }

    #[test]
    fn test_parse_missing_segments_default_to_zero() {
        assert_eq!(SemVerTriple::parse("4").unwrap(), SemVerTriple::new(4, 0, 0));
        assert_eq!(
            SemVerTriple::parse("4.7").unwrap(),
            SemVerTriple::new(4, 7, 0)
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            SemVerTriple::parse("  2.0.1\n").unwrap(),
            SemVerTriple::new(2, 0, 1)
        );
    }

    #[test]
    fn test_parse_extra_segments_ignored() {
        assert_eq!(
            SemVerTriple::parse("1.2.3.4").unwrap(),
            SemVerTriple::new(1, 2, 3)
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = SemVerTriple::parse("1.0.0rc1").unwrap_err();
        assert!(err.to_string().contains("Invalid version format"));
        assert!(err.to_string().contains("0rc1"));
    }

    #[test]
    fn test_parse_rejects_bad_trailing_segment() {
        assert!(SemVerTriple::parse("1.2.3.beta").is_err());
    }

    #[test]
    fn test_parse_rejects_signs_and_empty_segments() {
        assert!(SemVerTriple::parse("+1.0.0").is_err());
        assert!(SemVerTriple::parse("1..0").is_err());
        assert!(SemVerTriple::parse("1.0.").is_err());
        assert!(SemVerTriple::parse("").is_err());
        assert!(SemVerTriple::parse("   ").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let err = SemVerTriple::parse("99999999999999999999999.0.0").unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_ordering_is_numeric() {
        assert!(SemVerTriple::new(10, 0, 0) > SemVerTriple::new(2, 10, 10));
        assert!(SemVerTriple::new(1, 2, 3) < SemVerTriple::new(1, 2, 10));
    }

    #[test]
    fn test_display() {
        assert_eq!(SemVerTriple::new(1, 2, 3).to_string(), "1.2.3");
    }

    #[test]
    fn test_error_downcasts_to_via_error() {
        let err = SemVerTriple::parse("x").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ViaError>(),
            Some(ViaError::InvalidVersionFormat { .. })
        ));
    }
}
