//! Report read model
//!
//! A flat, serializable view of the cross-reference results that every
//! formatter renders from.

use crate::workspace_sync::domain::DependencyKind;
use serde::Serialize;

/// Main read model for the inspect report
///
/// Holds only projects that have at least one comparison.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
    pub summary: ReportSummary,
    pub projects: Vec<ProjectView>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Projects read during the run, reported or not
    pub scanned_projects: usize,
    pub reported_projects: usize,
    pub comparisons: usize,
    pub mismatches: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    /// `name:path`, or the path for unnamed projects
    pub label: String,
    pub name: Option<String>,
    pub version: Option<String>,
    pub path: String,
    pub comparisons: Vec<ComparisonView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    pub dependency: String,
    /// Serialized as `dependencies` or `devDependencies`
    pub kind: DependencyKind,
    pub declared_version: String,
    pub reference_version: String,
    pub in_sync: bool,
    pub status: String,
}
