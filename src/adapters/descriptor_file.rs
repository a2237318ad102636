//! Descriptor documents read from files or standard input.

use std::fs;
use std::io::{self, ErrorKind, Read};
use std::path::PathBuf;

use crate::domain::{AppError, DescriptorFormat};
use crate::ports::DescriptorSource;

/// Descriptor document stored in a file; `.yml`/`.yaml` files are YAML.
#[derive(Debug, Clone)]
pub struct FileDescriptorSource {
    path: PathBuf,
}

impl FileDescriptorSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DescriptorSource for FileDescriptorSource {
    fn format(&self) -> DescriptorFormat {
        DescriptorFormat::from_path(&self.path)
    }

    fn read_document(&mut self) -> Result<String, AppError> {
        fs::read_to_string(&self.path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                AppError::DescriptorNotFound(self.path.display().to_string())
            } else {
                err.into()
            }
        })
    }
}

/// JSON descriptor document read from standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinDescriptorSource;

impl DescriptorSource for StdinDescriptorSource {
    fn format(&self) -> DescriptorFormat {
        DescriptorFormat::Json
    }

    fn read_document(&mut self) -> Result<String, AppError> {
        let mut content = String::new();
        io::stdin().lock().read_to_string(&mut content)?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn reads_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deps.json");
        fs::write(&path, r#"{"fmt": {"target": {"type": "imported"}}}"#).unwrap();

        let mut source = FileDescriptorSource::new(&path);
        let descriptors = source.read_descriptors().unwrap();

        assert_eq!(source.format(), DescriptorFormat::Json);
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].name, "fmt");
    }

    #[test]
    fn reads_yaml_file_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deps.yaml");
        fs::write(&path, "fmt:\n  target:\n    type: interface\n    includes: include\n")
            .unwrap();

        let mut source = FileDescriptorSource::new(&path);
        let descriptors = source.read_descriptors().unwrap();

        assert_eq!(source.format(), DescriptorFormat::Yaml);
        assert_eq!(descriptors[0].name, "fmt");
    }

    #[test]
    fn missing_file_is_reported_as_descriptor_not_found() {
        let dir = TempDir::new().unwrap();
        let mut source = FileDescriptorSource::new(dir.path().join("missing.json"));

        let result = source.read_document();
        assert!(matches!(result, Err(AppError::DescriptorNotFound(_))));
    }
}
