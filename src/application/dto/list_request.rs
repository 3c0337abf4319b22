use crate::workspace_sync::policies::ExclusionRules;
use std::path::PathBuf;

/// ListRequest - request DTO for the manifest listing use case
#[derive(Debug, Clone)]
pub struct ListRequest {
    /// Directory to scan
    pub root: PathBuf,
    /// Directory names to skip
    pub exclusions: ExclusionRules,
}

impl ListRequest {
    pub fn new(root: PathBuf, exclusions: ExclusionRules) -> Self {
        Self { root, exclusions }
    }
}
