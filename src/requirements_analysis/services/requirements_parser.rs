use crate::requirements_analysis::domain::{DependencyMapping, PinnedEntry};

/// Literal marker that introduces a via annotation
const VIA_MARKER: &str = "# via";

/// RequirementsParser service for pip-compile style requirements text
///
/// This is a best-effort, line-oriented scanner. It never fails: lines it
/// does not recognize are skipped and do not reset the current package.
pub struct RequirementsParser;

impl RequirementsParser {
    /// Builds the reverse mapping `dependent -> [packages it pulled in]`
    ///
    /// # Example
    /// ```
    /// use pip_via::requirements_analysis::services::RequirementsParser;
    ///
    /// let mapping = RequirementsParser::parse("alembic==1.13.1\n    # via flask-migrate");
    /// assert_eq!(mapping.get("flask-migrate").unwrap(), &["alembic".to_string()]);
    /// ```
    pub fn parse(text: &str) -> DependencyMapping {
        Self::mapping_from_entries(&Self::parse_entries(text))
    }

    /// Returns every pinned entry in text order, with the dependents
    /// annotated for it
    pub fn parse_entries(text: &str) -> Vec<PinnedEntry> {
        text.lines()
            .fold(ScanState::default(), ScanState::step)
            .entries
    }

    /// Inverts already-scanned entries into the reverse mapping
    ///
    /// Entries without a via annotation contribute nothing.
    pub fn mapping_from_entries(entries: &[PinnedEntry]) -> DependencyMapping {
        let mut mapping = DependencyMapping::new();
        for entry in entries {
            for dependent in entry.via() {
                mapping.insert(dependent, entry.name());
            }
        }
        mapping
    }
}

/// State carried from one line to the next
///
/// The current package is the last element of `entries`.
#[derive(Debug, Default)]
struct ScanState {
    entries: Vec<PinnedEntry>,
    in_via_block: bool,
}

impl ScanState {
    fn step(mut self, raw: &str) -> Self {
        match Line::classify(raw) {
            Line::Package { name, version } => {
                self.entries.push(PinnedEntry::new(name, version));
                self.in_via_block = false;
            }
            Line::Via(None) => {
                self.in_via_block = true;
            }
            Line::Via(Some(inline)) => {
                // pip-tools before 5.5 wrote "# via a, b" on one line
                for dependent in inline.split(',').map(str::trim).filter(|d| !d.is_empty()) {
                    self.attach(dependent);
                }
                self.in_via_block = false;
            }
            // every non-empty comment in a block names one dependent,
            // including forms like "my-package (pyproject.toml)"
            Line::Comment(content) if self.in_via_block => {
                if !content.is_empty() {
                    self.attach(content);
                }
            }
            Line::Comment(_) => {}
            Line::Blank | Line::Other => {
                self.in_via_block = false;
            }
        }
        self
    }

    fn attach(&mut self, dependent: &str) {
        if let Some(current) = self.entries.last_mut() {
            current.add_via(dependent);
        }
    }
}

/// The line shapes the scanner distinguishes
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Package { name: &'a str, version: &'a str },
    /// `# via`, with the inline remainder if there is one
    Via(Option<&'a str>),
    /// Any other comment; holds the text after `#`, trimmed
    Comment(&'a str),
    Blank,
    Other,
}

impl<'a> Line<'a> {
    fn classify(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Line::Blank;
        }

        if let Some(rest) = trimmed.strip_prefix('#') {
            if let Some(after) = trimmed.strip_prefix(VIA_MARKER) {
                if after.is_empty() {
                    return Line::Via(None);
                }
                if after.starts_with(char::is_whitespace) {
                    let inline = after.trim();
                    return Line::Via((!inline.is_empty()).then_some(inline));
                }
            }
            return Line::Comment(rest.trim());
        }

        match parse_package_line(trimmed) {
            Some((name, version)) => Line::Package { name, version },
            None => Line::Other,
        }
    }
}

/// Splits `name==version ...` into its name and version.
///
/// Environment markers (`;`) and hash continuations (` \`) after the
/// version are dropped.
fn parse_package_line(trimmed: &str) -> Option<(&str, &str)> {
    if trimmed.starts_with('-') {
        return None;
    }

    let (name, rest) = trimmed.split_once("==")?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(is_package_name_char) {
        return None;
    }

    let version = rest.split_whitespace().next()?;
    let version = version.split(';').next().unwrap_or_default();
    if version.is_empty() || version == "\\" {
        return None;
    }

    Some((name, version))
}

fn is_package_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '[' | ']' | ',')
}
