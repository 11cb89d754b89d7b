use crate::core::errors::ListingError;
use std::path::PathBuf;
use tracing::debug;

/// Reads YAML demo content files from a content directory.
#[derive(Clone, Debug)]
pub struct DemoContentParser {
    content_dir: PathBuf,
}

impl DemoContentParser {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        DemoContentParser {
            content_dir: content_dir.into(),
        }
    }

    pub fn path_for(&self, file: &str) -> PathBuf {
        self.content_dir.join(file)
    }

    pub fn parse(&self, input: &str) -> Result<serde_yaml::Value, ListingError> {
        serde_yaml::from_str(input).map_err(|e| ListingError::DemoContentError(format!("Invalid YAML: {}", e)))
    }

    pub fn parse_file(&self, file: &str) -> Result<serde_yaml::Value, ListingError> {
        let path = self.path_for(file);
        debug!("Parsing demo content from {}", path.display());
        let input = std::fs::read_to_string(&path)
            .map_err(|e| ListingError::DemoContentError(format!("Cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&input)
            .map_err(|e| ListingError::DemoContentError(format!("Invalid YAML in {}: {}", path.display(), e)))
    }
}
