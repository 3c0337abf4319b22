use crate::ports::outbound::{ManifestScanner, ScanOutcome};
use crate::shared::error::SyncError;
use crate::shared::Result;
use crate::workspace_sync::domain::Issue;
use crate::workspace_sync::policies::ExclusionRules;
use crate::workspace_sync::services::MANIFEST_FILENAME;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// FileSystemScanner adapter for discovering manifests on disk
///
/// Depth-first walk. Entries are visited in file-name order, directories
/// reached through symbolic links are not entered, and a directory is only
/// skipped because of its own name. A symlinked manifest file is reported
/// like any other manifest.
#[derive(Debug, Clone)]
pub struct FileSystemScanner {
    manifest_filename: String,
}

impl FileSystemScanner {
    pub fn new() -> Self {
        Self::with_manifest_filename(MANIFEST_FILENAME)
    }

    pub fn with_manifest_filename(manifest_filename: impl Into<String>) -> Self {
        Self {
            manifest_filename: manifest_filename.into(),
        }
    }

    fn is_manifest(&self, entry: &DirEntry) -> bool {
        !entry.file_type().is_dir() && entry.file_name() == self.manifest_filename.as_str()
    }
}

impl Default for FileSystemScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestScanner for FileSystemScanner {
    fn scan(&self, root: &Path, rules: &ExclusionRules) -> Result<ScanOutcome> {
        let scan_error = |details: String| SyncError::ScanError {
            path: root.to_path_buf(),
            details,
        };

        let metadata = fs::metadata(root).map_err(|e| scan_error(e.to_string()))?;
        if !metadata.is_dir() {
            return Err(scan_error("not a directory".to_string()).into());
        }

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_excluded_dir(e, rules));

        let mut outcome = ScanOutcome::default();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    if self.is_manifest(&entry) {
                        outcome.manifests.push(entry.into_path());
                    }
                }
                Err(e) if e.depth() == 0 => return Err(scan_error(e.to_string()).into()),
                Err(e) => outcome.issues.push(Issue::SubtreeUnreadable {
                    path: e.path().unwrap_or(root).to_path_buf(),
                    details: e.to_string(),
                }),
            }
        }

        Ok(outcome)
    }
}

/// `file_type()` does not follow symlinks, so linked directories never match
fn is_excluded_dir(entry: &DirEntry, rules: &ExclusionRules) -> bool {
    entry.file_type().is_dir() && rules.is_excluded(&entry.file_name().to_string_lossy())
}
