use pkgsync::prelude::*;
use pkgsync::shared::error::SyncError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestScanner returning canned manifest lists per root
///
/// Roots that were never registered fail the way an unreadable directory
/// does. Exclusion rules are applied to every path segment so tests can
/// check that omitted names reach the scanner.
#[derive(Default)]
pub struct MockManifestScanner {
    roots: HashMap<PathBuf, ScanOutcome>,
}

impl MockManifestScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: &str, manifests: &[&str]) -> Self {
        self.roots.insert(
            PathBuf::from(root),
            ScanOutcome {
                manifests: manifests.iter().map(PathBuf::from).collect(),
                issues: Vec::new(),
            },
        );
        self
    }

    pub fn with_unreadable_subtree(mut self, root: &str, subtree: &str) -> Self {
        self.roots
            .entry(PathBuf::from(root))
            .or_default()
            .issues
            .push(Issue::SubtreeUnreadable {
                path: PathBuf::from(subtree),
                details: "Permission denied (os error 13)".to_string(),
            });
        self
    }
}

impl ManifestScanner for MockManifestScanner {
    fn scan(&self, root: &Path, rules: &ExclusionRules) -> Result<ScanOutcome> {
        let outcome = self.roots.get(root).ok_or_else(|| SyncError::ScanError {
            path: root.to_path_buf(),
            details: "No such file or directory (os error 2)".to_string(),
        })?;

        let manifests = outcome
            .manifests
            .iter()
            .filter(|manifest| {
                manifest
                    .strip_prefix(root)
                    .unwrap_or(manifest.as_path())
                    .parent()
                    .map(|dir| {
                        !dir.iter()
                            .any(|segment| rules.is_excluded(&segment.to_string_lossy()))
                    })
                    .unwrap_or(true)
            })
            .cloned()
            .collect();

        Ok(ScanOutcome {
            manifests,
            issues: outcome.issues.clone(),
        })
    }
}
