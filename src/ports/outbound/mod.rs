/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the file system and the console.
pub mod manifest_reader;
pub mod manifest_scanner;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod root_list_reader;

pub use manifest_reader::ManifestReader;
pub use manifest_scanner::{ManifestScanner, ScanOutcome};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use root_list_reader::RootListReader;
