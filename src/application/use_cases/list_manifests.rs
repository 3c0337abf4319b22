use crate::application::dto::{ListRequest, ListResponse};
use crate::ports::outbound::{ManifestScanner, ProgressReporter};
use crate::shared::Result;

/// ListManifestsUseCase - discovers manifests under a single root
pub struct ListManifestsUseCase<S, PR> {
    scanner: S,
    progress_reporter: PR,
}

impl<S, PR> ListManifestsUseCase<S, PR>
where
    S: ManifestScanner,
    PR: ProgressReporter,
{
    pub fn new(scanner: S, progress_reporter: PR) -> Self {
        Self {
            scanner,
            progress_reporter,
        }
    }

    /// Scans the requested root
    ///
    /// # Errors
    /// Returns an error if the root itself cannot be read. Unreadable
    /// nested directories are reported as warnings and skipped.
    pub fn execute(&self, request: ListRequest) -> Result<ListResponse> {
        let outcome = self.scanner.scan(&request.root, &request.exclusions)?;

        for issue in &outcome.issues {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", issue));
        }

        Ok(ListResponse {
            manifests: outcome.manifests,
            issues: outcome.issues,
        })
    }
}
