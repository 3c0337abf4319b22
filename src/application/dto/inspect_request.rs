use crate::workspace_sync::policies::ExclusionRules;
use crate::workspace_sync::services::CrossReferenceOptions;
use std::path::PathBuf;

/// InspectRequest - request DTO for the cross-reference use case
#[derive(Debug, Clone)]
pub struct InspectRequest {
    /// Scan roots, in the order results should be reported
    pub roots: Vec<PathBuf>,
    /// Directory names to skip while scanning
    pub exclusions: ExclusionRules,
    /// Which dependency tables take part in the comparison
    pub options: CrossReferenceOptions,
}

impl InspectRequest {
    pub fn new(
        roots: Vec<PathBuf>,
        exclusions: ExclusionRules,
        options: CrossReferenceOptions,
    ) -> Self {
        Self {
            roots,
            exclusions,
            options,
        }
    }
}
