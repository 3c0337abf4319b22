//! pkgsync - dependency version sync checker for local package.json projects
//!
//! This library scans directory trees for `package.json` manifests and
//! cross-references every declared dependency against the version declared
//! by a sibling project of the same name, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`workspace_sync`): Projects, comparisons and the cross-referencer
//! - **Application Layer** (`application`): Use cases, DTOs and report read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pkgsync::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let use_case = InspectProjectsUseCase::new(
//!     FileSystemScanner::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = InspectRequest::new(
//!     vec![PathBuf::from("./packages")],
//!     ExclusionRules::new(["vendor"]),
//!     CrossReferenceOptions::default(),
//! );
//! let response = use_case.execute(request).await?;
//!
//! let report = SyncReportBuilder::build(&response.projects);
//! print!("{}", TableFormatter::plain().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod workspace_sync;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemScanner, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
    pub use crate::application::dto::{
        InspectRequest, InspectResponse, ListRequest, ListResponse, OutputFormat,
    };
    pub use crate::application::read_models::{SyncReport, SyncReportBuilder};
    pub use crate::application::use_cases::{InspectProjectsUseCase, ListManifestsUseCase};
    pub use crate::ports::outbound::{
        ManifestReader, ManifestScanner, OutputPresenter, ProgressReporter, ReportFormatter,
        RootListReader, ScanOutcome,
    };
    pub use crate::shared::Result;
    pub use crate::workspace_sync::domain::{
        strip_range_markers, Comparison, DependencyKind, DependencySpec, Issue, Project,
    };
    pub use crate::workspace_sync::policies::ExclusionRules;
    pub use crate::workspace_sync::services::{
        CrossReferenceOptions, CrossReferencer, ManifestParser,
    };
}
