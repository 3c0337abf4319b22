use crate::ports::outbound::{ManifestReader, RootListReader};
use crate::shared::error::SyncError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use crate::workspace_sync::services::MANIFEST_FILENAME;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// Implements both ManifestReader and RootListReader. Manifests go through
/// the regular-file and size checks before being read; symlinked manifests
/// are read through their target.
#[derive(Debug, Clone, Copy)]
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

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        read_checked(path, MANIFEST_FILENAME).map_err(|e| {
            SyncError::ManifestReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl RootListReader for FileSystemReader {
    fn read_roots(&self, list_path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(list_path).map_err(|e| SyncError::RootListReadError {
            path: list_path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(parse_root_list(&content))
    }
}

/// Splits a root list into lines (`\n`, optional `\r` before it) and drops
/// empty lines. Other whitespace is kept as part of the path.
fn parse_root_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
