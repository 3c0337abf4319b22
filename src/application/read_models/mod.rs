//! Read models for query operations
//!
//! Denormalized views of the cross-reference results, shared by all
//! report formatters.

mod sync_report;
mod sync_report_builder;

pub use sync_report::{ComparisonView, ProjectView, ReportSummary, SyncReport};
pub use sync_report_builder::SyncReportBuilder;
