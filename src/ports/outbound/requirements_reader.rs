use crate::shared::Result;
use std::path::Path;

/// RequirementsReader port for reading pinned requirements text
///
/// The parser only ever sees the returned string; where it comes from
/// (disk, stdin, a test fixture) is up to the adapter.
pub trait RequirementsReader {
    /// Reads the raw content of a pinned requirements file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file is a symlink, not a regular file, or too large
    /// - The file cannot be read due to permissions or I/O errors
    fn read_requirements(&self, path: &Path) -> Result<String>;
}
