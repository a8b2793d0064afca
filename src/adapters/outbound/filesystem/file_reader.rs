use crate::ports::outbound::RequirementsReader;
use crate::shared::error::ViaError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading requirements files from disk
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirementsReader for FileSystemReader {
    fn read_requirements(&self, path: &Path) -> Result<String> {
        if fs::symlink_metadata(path).is_err() {
            return Err(ViaError::RequirementsFileNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the path, or generate the file first with `pip-compile requirements.in`."
                    .to_string(),
            }
            .into());
        }

        validate_regular_file(path, "requirements file")?;

        fs::read_to_string(path).map_err(|e| {
            ViaError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_requirements_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("requirements.txt");
        fs::write(&path, "alembic==1.13.1\n    # via flask-migrate\n").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_requirements(&path).unwrap();

        assert_eq!(content, "alembic==1.13.1\n    # via flask-migrate\n");
    }

    #[test]
    fn test_read_requirements_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let reader = FileSystemReader::new();
        let err = reader.read_requirements(&path).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ViaError>(),
            Some(ViaError::RequirementsFileNotFound { .. })
        ));
        assert!(err.to_string().contains("pip-compile"));
    }

    #[test]
    fn test_read_requirements_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::default();
        let err = reader.read_requirements(temp_dir.path()).unwrap_err();

        assert!(err.to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_requirements_symlink_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("requirements.txt");
        fs::write(&target, "flask==3.0.0\n").unwrap();
        let link = temp_dir.path().join("linked.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let reader = FileSystemReader::new();
        let err = reader.read_requirements(&link).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ViaError>(),
            Some(ViaError::SecurityError { .. })
        ));
    }
}
