use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::Catalog;
use crate::error::ParseError;

/// Anything that can produce a catalog of problem pages.
pub trait ProblemSource {
    fn load(&self) -> Result<Catalog, ParseError>;
}

/// A catalog stored as a YAML or JSON manifest on disk.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProblemSource for ManifestSource {
    fn load(&self) -> Result<Catalog, ParseError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ParseError::Io {
            path: self.path.clone(),
            source,
        })?;

        let ext = self.path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
        let catalog = match ext {
            "json" => super::from_json(&content)?,
            _ => super::from_yaml(&content)?,
        };

        debug!(
            "loaded {} categories ({} problems) from {}",
            catalog.categories.len(),
            catalog.problem_count(),
            self.path.display()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems.json");
        fs::write(
            &path,
            r#"{"categories": [{"url": "https://codingbat.com/java/Warmup-1", "problems": [
                {"name": "sleepIn", "declaration": "public boolean sleepIn(boolean weekday, boolean vacation) {"}
            ]}]}"#,
        )
        .unwrap();

        let catalog = ManifestSource::new(&path).load().unwrap();
        assert_eq!(catalog.categories[0].name, "Warmup-1");
        assert_eq!(catalog.categories[0].problems[0].name, "sleepIn");
        assert!(catalog.categories[0].problems[0].examples.is_empty());
    }

    #[test]
    fn test_missing_manifest() {
        let err = ManifestSource::new("/nonexistent/problems.yaml")
            .load()
            .unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
