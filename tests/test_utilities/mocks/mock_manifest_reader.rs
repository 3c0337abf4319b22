use pkgsync::prelude::*;
use pkgsync::shared::error::SyncError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestReader serving manifest content from memory
#[derive(Default)]
pub struct MockManifestReader {
    files: HashMap<PathBuf, String>,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    /// Shorthand for a manifest with a name, a version and runtime dependencies
    pub fn with_package(self, path: &str, name: &str, version: &str, deps: &[(&str, &str)]) -> Self {
        let dependencies: serde_json::Map<String, serde_json::Value> = deps
            .iter()
            .map(|(dep, spec)| (dep.to_string(), serde_json::Value::from(*spec)))
            .collect();
        let content = serde_json::json!({
            "name": name,
            "version": version,
            "dependencies": dependencies,
        });
        self.with_manifest(path, &content.to_string())
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            SyncError::ManifestReadError {
                path: path.to_path_buf(),
                details: "Permission denied (os error 13)".to_string(),
            }
            .into()
        })
    }
}
