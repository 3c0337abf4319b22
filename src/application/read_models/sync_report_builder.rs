//! Builder for constructing SyncReport from domain objects

use super::sync_report::{ComparisonView, ProjectView, ReportSummary, SyncReport};
use crate::workspace_sync::domain::{Comparison, Project};
use chrono::{SecondsFormat, Utc};

pub struct SyncReportBuilder;

impl SyncReportBuilder {
    /// Builds the report from cross-referenced projects, stamped with the
    /// current time
    pub fn build(projects: &[Project]) -> SyncReport {
        Self::build_at(projects, Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    /// Same as `build` with a caller-supplied timestamp
    pub fn build_at(projects: &[Project], generated_at: String) -> SyncReport {
        let views: Vec<ProjectView> = projects
            .iter()
            .filter(|project| project.has_comparisons())
            .map(Self::build_project)
            .collect();

        let summary = ReportSummary {
            scanned_projects: projects.len(),
            reported_projects: views.len(),
            comparisons: views.iter().map(|view| view.comparisons.len()).sum(),
            mismatches: projects.iter().map(Project::mismatch_count).sum(),
        };

        SyncReport {
            generated_at,
            summary,
            projects: views,
        }
    }

    fn build_project(project: &Project) -> ProjectView {
        ProjectView {
            label: project.display_label(),
            name: project.name().map(String::from),
            version: project.version().map(String::from),
            path: project.path().display().to_string(),
            comparisons: project
                .comparisons()
                .iter()
                .map(Self::build_comparison)
                .collect(),
        }
    }

    fn build_comparison(comparison: &Comparison) -> ComparisonView {
        ComparisonView {
            dependency: comparison.dependency_name().to_string(),
            kind: comparison.kind(),
            declared_version: comparison.declared_version().to_string(),
            reference_version: comparison.reference_version().to_string(),
            in_sync: comparison.is_in_sync(),
            status: comparison.status_mark().to_string(),
        }
    }
}
