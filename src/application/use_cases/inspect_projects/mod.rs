use crate::application::dto::{InspectRequest, InspectResponse};
use crate::ports::outbound::{ManifestReader, ManifestScanner, ProgressReporter, ScanOutcome};
use crate::shared::error::SyncError;
use crate::shared::Result;
use crate::workspace_sync::domain::{Issue, Project};
use crate::workspace_sync::services::{CrossReferencer, ManifestParser, ParsedManifest};
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::{self, JoinError};

/// Upper bound on roots scanned at the same time
const MAX_CONCURRENT_SCANS: usize = 8;

/// Upper bound on manifests read at the same time
const MAX_CONCURRENT_READS: usize = 32;

/// InspectProjectsUseCase - scans roots, reads every manifest found and
/// cross-references the declared dependency versions
///
/// Scanning and reading are blocking file-system work, so each root and
/// each manifest runs in its own `spawn_blocking` task. Results are joined
/// in input order; the cross-reference runs once everything is in.
///
/// # Type Parameters
/// * `S` - ManifestScanner implementation
/// * `R` - ManifestReader implementation
/// * `PR` - ProgressReporter implementation
pub struct InspectProjectsUseCase<S, R, PR> {
    scanner: Arc<S>,
    reader: Arc<R>,
    progress_reporter: PR,
}

impl<S, R, PR> InspectProjectsUseCase<S, R, PR>
where
    S: ManifestScanner + 'static,
    R: ManifestReader + 'static,
    PR: ProgressReporter,
{
    /// Creates a new InspectProjectsUseCase with injected dependencies
    pub fn new(scanner: S, reader: R, progress_reporter: PR) -> Self {
        Self {
            scanner: Arc::new(scanner),
            reader: Arc::new(reader),
            progress_reporter,
        }
    }

    /// Executes the inspection
    ///
    /// # Errors
    /// Returns an error if any requested root cannot be read. Everything
    /// below the roots (nested directories, single manifests, individual
    /// dependencies) fails in isolation and is returned as an issue.
    pub async fn execute(&self, request: InspectRequest) -> Result<InspectResponse> {
        let started = Instant::now();

        // Step 1: Discover manifests under every root
        self.progress_reporter.report(&format!(
            "🔍 Scanning {} path(s) for package.json files...",
            request.roots.len()
        ));
        let (manifests, mut issues) = self.scan_roots(&request).await?;
        self.progress_reporter
            .report(&format!("✅ Found {} manifest(s)", manifests.len()));

        // Step 2: Read and parse every manifest
        let (projects, read_issues) = self.read_manifests(manifests).await;
        issues.extend(read_issues);

        // Step 3: Cross-reference against the names declared in the scan
        let outcome = CrossReferencer::cross_reference(projects, request.options);
        issues.extend(outcome.issues);

        for issue in &issues {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", issue));
        }

        let response = InspectResponse::new(outcome.projects, issues, started.elapsed());
        self.report_summary(&response);
        Ok(response)
    }

    /// Scans all roots concurrently, keeping root order in the result
    ///
    /// Every failed root is reported; the first one in input order is
    /// returned as the error.
    async fn scan_roots(&self, request: &InspectRequest) -> Result<(Vec<PathBuf>, Vec<Issue>)> {
        let exclusions = Arc::new(request.exclusions.clone());

        let results: Vec<Result<ScanOutcome>> = stream::iter(request.roots.iter().cloned())
            .map(|root| {
                let scanner = Arc::clone(&self.scanner);
                let exclusions = Arc::clone(&exclusions);
                async move {
                    let label = root.display().to_string();
                    let joined =
                        task::spawn_blocking(move || scanner.scan(&root, &exclusions)).await;
                    flatten_join(joined, label)
                }
            })
            .buffered(MAX_CONCURRENT_SCANS)
            .collect()
            .await;

        let mut manifests = Vec::new();
        let mut issues = Vec::new();
        let mut first_failure = None;

        for result in results {
            match result {
                Ok(outcome) => {
                    manifests.extend(outcome.manifests);
                    issues.extend(outcome.issues);
                }
                Err(e) if first_failure.is_none() => first_failure = Some(e),
                Err(e) => self.progress_reporter.report_error(&format!("❌ {}", e)),
            }
        }

        match first_failure {
            Some(e) => Err(e),
            None => Ok((manifests, issues)),
        }
    }

    /// Reads and parses every manifest, reporting progress as results
    /// arrive. A manifest that cannot be read becomes an issue.
    async fn read_manifests(&self, manifests: Vec<PathBuf>) -> (Vec<Project>, Vec<Issue>) {
        let total = manifests.len();
        let mut projects = Vec::with_capacity(total);
        let mut issues = Vec::new();

        let mut results = std::pin::pin!(stream::iter(manifests)
            .map(|path| {
                let reader = Arc::clone(&self.reader);
                async move {
                    let task_path = path.clone();
                    let joined = task::spawn_blocking(move || -> Result<ParsedManifest> {
                        let content = reader.read_manifest(&task_path)?;
                        Ok(ManifestParser::parse(&task_path, &content))
                    })
                    .await;
                    let label = path.display().to_string();
                    (path, flatten_join(joined, label))
                }
            })
            .buffered(MAX_CONCURRENT_READS));

        let mut done = 0;
        while let Some((path, result)) = results.next().await {
            done += 1;
            self.progress_reporter
                .report_progress(done, total, Some("Reading manifests..."));

            match result {
                Ok(parsed) => {
                    issues.extend(parsed.issue);
                    projects.push(parsed.project);
                }
                Err(e) => issues.push(Issue::ManifestUnreadable {
                    path,
                    details: failure_details(&e),
                }),
            }
        }

        (projects, issues)
    }

    fn report_summary(&self, response: &InspectResponse) {
        let comparisons: usize = response
            .projects
            .iter()
            .map(|project| project.comparisons().len())
            .sum();
        let mismatches: usize = response.projects.iter().map(Project::mismatch_count).sum();

        self.progress_reporter.report_completion(&format!(
            "✅ Inspected {} project(s): {} local dependency reference(s), {} out of sync ({:.2?})",
            response.projects.len(),
            comparisons,
            mismatches,
            response.elapsed
        ));

        let skipped = response.skipped_manifest_count();
        if skipped > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} manifest(s) could not be read and are missing from the report",
                skipped
            ));
        }
    }
}

/// Turns a panicked or cancelled blocking task into an ordinary error
fn flatten_join<T>(joined: std::result::Result<Result<T>, JoinError>, input: String) -> Result<T> {
    joined.unwrap_or_else(|e| {
        Err(SyncError::TaskFailed {
            input,
            details: e.to_string(),
        }
        .into())
    })
}

/// The underlying cause of a read failure, without the path repeated
fn failure_details(error: &anyhow::Error) -> String {
    match error.downcast_ref::<SyncError>() {
        Some(SyncError::ManifestReadError { details, .. }) => details.clone(),
        _ => error.to_string(),
    }
}
