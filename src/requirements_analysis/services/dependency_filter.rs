use crate::requirements_analysis::domain::DependencyMapping;
use crate::shared::error::ViaError;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// DependencyFilter - drops excluded names from a dependency mapping
///
/// Supports wildcard patterns using '*' to match zero or more characters.
/// A pattern applies to dependents (keys) and to pulled-in packages alike.
/// Matching is case-sensitive.
#[derive(Debug)]
pub struct DependencyFilter {
    patterns: Vec<ExcludePattern>,
}

impl DependencyFilter {
    /// Creates a new DependencyFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (empty, length, characters, wildcard-only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(ViaError::Validation {
                message: format!(
                    "Too many exclusion patterns: {} (maximum: {})",
                    patterns.len(),
                    MAX_EXCLUDE_PATTERNS
                ),
            }
            .into());
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns a copy of `mapping` without excluded dependents or packages
    ///
    /// Dependents whose package list ends up empty are dropped.
    pub fn filter_mapping(&self, mapping: &DependencyMapping) -> DependencyMapping {
        let mut filtered = mapping.clone();
        filtered.retain(|dependent, package| {
            let drop_dependent = self.matches(dependent);
            let drop_package = self.matches(package);
            !(drop_dependent || drop_package)
        });
        filtered
    }

    /// Checks a name against every pattern, recording which patterns hit
    pub fn matches(&self, name: &str) -> bool {
        // no short-circuit: every matching pattern must be marked as used
        self.patterns
            .iter()
            .fold(false, |hit, pattern| pattern.matches(name) || hit)
    }

    /// Patterns that have not matched anything so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = PatternMatcher::compile(&pattern);
        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, name: &str) -> bool {
        let is_match = self.matcher.matches(name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// No wildcard: "package-name"
    Exact(String),
    /// Literal pieces between wildcards, anchored at whichever ends have no '*'
    Glob {
        parts: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn compile(pattern: &str) -> Self {
        if !pattern.contains('*') {
            return PatternMatcher::Exact(pattern.to_string());
        }
        PatternMatcher::Glob {
            parts: pattern
                .split('*')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            anchored_start: !pattern.starts_with('*'),
            anchored_end: !pattern.ends_with('*'),
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => name == s.as_str(),
            PatternMatcher::Glob {
                parts,
                anchored_start,
                anchored_end,
            } => {
                let mut rest = name;
                let mut middle = parts.as_slice();

                if *anchored_start {
                    if let Some((first, tail)) = middle.split_first() {
                        match rest.strip_prefix(first.as_str()) {
                            Some(r) => rest = r,
                            None => return false,
                        }
                        middle = tail;
                    }
                }

                let mut suffix = None;
                if *anchored_end {
                    if let Some((last, init)) = middle.split_last() {
                        suffix = Some(last);
                        middle = init;
                    }
                }

                for part in middle {
                    match rest.find(part.as_str()) {
                        Some(pos) => rest = &rest[pos + part.len()..],
                        None => return false,
                    }
                }

                suffix.map_or(true, |s| rest.ends_with(s.as_str()))
            }
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let invalid = |message: String| -> anyhow::Error { ViaError::Validation { message }.into() };

    if pattern.is_empty() {
        return Err(invalid("Exclusion pattern cannot be empty".to_string()));
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(invalid(format!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        )));
    }

    if let Some(ch) = pattern.chars().find(|&c| !is_valid_pattern_char(c)) {
        return Err(invalid(format!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, slashes, spaces, brackets, and asterisks (*) are allowed.",
            ch, pattern
        )));
    }

    if pattern.chars().all(|c| c == '*') {
        return Err(invalid(format!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        )));
    }

    Ok(())
}

/// Spaces and slashes allow `-r requirements/base.in` style dependents
fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '[' | ']' | '*' | '/' | ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(patterns: &[&str]) -> DependencyFilter {
        DependencyFilter::new(patterns.iter().map(|p| p.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_exact_match() {
        let f = filter(&["requests"]);
        assert!(f.matches("requests"));
        assert!(!f.matches("requests-extra"));
        assert!(!f.matches("my-requests"));
    }

    #[test]
    fn test_leading_wildcard() {
        let f = filter(&["*-dev"]);
        assert!(f.matches("pytest-dev"));
        assert!(!f.matches("dev"));
        assert!(!f.matches("pytest-dev-extra"));
    }

    #[test]
    fn test_trailing_wildcard() {
        let f = filter(&["debug-*"]);
        assert!(f.matches("debug-tool"));
        assert!(f.matches("debug-"));
        assert!(!f.matches("my-debug"));
        assert!(!f.matches("debugger"));
    }

    #[test]
    fn test_contains_wildcard() {
        let f = filter(&["*test*"]);
        assert!(f.matches("pytest"));
        assert!(f.matches("test"));
        assert!(f.matches("pytest-cov"));
        assert!(!f.matches("tes"));
    }

    #[test]
    fn test_inner_wildcard_is_anchored() {
        let f = filter(&["flask*sqlalchemy"]);
        assert!(f.matches("flask-sqlalchemy"));
        assert!(f.matches("flasksqlalchemy"));
        assert!(!f.matches("flask-sqlalchemy-utils"));
        assert!(!f.matches("my-flask-sqlalchemy"));
    }

    #[test]
    fn test_multiple_wildcards() {
        let f = filter(&["py*-*-plugin"]);
        assert!(f.matches("pytest-cov-plugin"));
        assert!(!f.matches("pytest-plugin"));
        assert!(!f.matches("pytest-cov-plugins"));
    }

    #[test]
    fn test_requirement_file_reference_pattern() {
        let f = filter(&["-r *"]);
        assert!(f.matches("-r requirements.in"));
        assert!(f.matches("-r requirements/base.in"));
        assert!(!f.matches("requests"));
    }

    #[test]
    fn test_filter_mapping_removes_keys_and_members() {
        let mapping: DependencyMapping = vec![
            ("-r requirements.in", vec!["flask", "alembic"]),
            ("flask-migrate", vec!["alembic", "flask"]),
            ("paramiko", vec!["bcrypt"]),
        ]
        .into_iter()
        .collect();

        let f = filter(&["-r *", "bcrypt"]);
        let filtered = f.filter_mapping(&mapping);

        let keys: Vec<&str> = filtered.keys().collect();
        assert_eq!(keys, vec!["flask-migrate"]);
        assert_eq!(filtered.get("flask-migrate").unwrap(), &["alembic", "flask"]);
        // input untouched
        assert_eq!(mapping.len(), 3);
    }

    #[test]
    fn test_unmatched_patterns() {
        let mapping: DependencyMapping = vec![("paramiko", vec!["bcrypt"])].into_iter().collect();
        let f = filter(&["bcrypt", "nothing-*"]);
        let _ = f.filter_mapping(&mapping);

        assert_eq!(f.unmatched_patterns(), vec!["nothing-*".to_string()]);
    }

    #[test]
    fn test_overlapping_patterns_are_all_marked() {
        let f = filter(&["flask*", "*flask"]);
        assert!(f.matches("flask"));
        assert!(f.unmatched_patterns().is_empty());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = DependencyFilter::new(vec!["".to_string()]).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_wildcard_only_rejected() {
        let err = DependencyFilter::new(vec!["**".to_string()]).unwrap_err();
        assert!(err.to_string().contains("only wildcards"));
    }

    #[test]
    fn test_invalid_character_rejected() {
        let err = DependencyFilter::new(vec!["pkg;rm".to_string()]).unwrap_err();
        assert!(err.to_string().contains("invalid character ';'"));
    }

    #[test]
    fn test_too_many_patterns_rejected() {
        let patterns = (0..=MAX_EXCLUDE_PATTERNS).map(|i| format!("pkg-{}", i)).collect();
        let err = DependencyFilter::new(patterns).unwrap_err();
        assert!(err.to_string().contains("Too many exclusion patterns"));
    }

    #[test]
    fn test_too_long_pattern_rejected() {
        let err = DependencyFilter::new(vec!["a".repeat(MAX_PATTERN_LENGTH + 1)]).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }
}
