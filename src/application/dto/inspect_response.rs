use crate::workspace_sync::domain::{Issue, Project};
use std::path::PathBuf;
use std::time::Duration;

/// InspectResponse - everything the inspect use case produced
#[derive(Debug, Clone)]
pub struct InspectResponse {
    /// Every project that could be read, with comparisons attached
    pub projects: Vec<Project>,
    /// Non-fatal problems, already reported as warnings
    pub issues: Vec<Issue>,
    /// Wall-clock time from first scan to cross-reference completion
    pub elapsed: Duration,
}

impl InspectResponse {
    pub fn new(projects: Vec<Project>, issues: Vec<Issue>, elapsed: Duration) -> Self {
        Self {
            projects,
            issues,
            elapsed,
        }
    }

    /// Number of manifests that were dropped because they could not be read
    pub fn skipped_manifest_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.is_skipped_manifest())
            .count()
    }
}

/// ListResponse - manifests found by the listing use case
#[derive(Debug, Clone)]
pub struct ListResponse {
    pub manifests: Vec<PathBuf>,
    pub issues: Vec<Issue>,
}
