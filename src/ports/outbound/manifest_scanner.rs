use crate::workspace_sync::domain::Issue;
use crate::workspace_sync::policies::ExclusionRules;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Manifests found under one root, plus the nested directories that
/// could not be listed along the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutcome {
    pub manifests: Vec<PathBuf>,
    pub issues: Vec<Issue>,
}

/// ManifestScanner port for discovering manifest files
///
/// Implementations run on blocking worker threads, one call per root,
/// so they must be shareable across threads.
pub trait ManifestScanner: Send + Sync {
    /// Recursively discovers manifests below `root`
    ///
    /// # Arguments
    /// * `root` - Directory to start from
    /// * `rules` - Directory names that must not be descended into
    ///
    /// # Errors
    /// Returns an error only if `root` itself cannot be read. Failures in
    /// nested directories are returned in `ScanOutcome::issues`.
    fn scan(&self, root: &Path, rules: &ExclusionRules) -> Result<ScanOutcome>;
}
