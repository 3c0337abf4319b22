use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell an out-of-sync report apart from
/// a run that could not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every input was processed
    Success = 0,
    /// The report was produced but one or more manifests could not be read
    ManifestsSkipped = 1,
    /// Invalid command-line arguments (clap parsing errors, no inputs)
    InvalidArguments = 2,
    /// Application error (unreadable root, config error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ManifestsSkipped => write!(f, "Manifests Skipped (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// Variants that end the run carry a hint for the user. Per-item failures
/// (a single manifest, a nested directory) are reported as issues instead
/// and never reach `main` as errors.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to scan directory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have read permissions")]
    ScanError { path: PathBuf, details: String },

    #[error("Failed to read manifest: {path}\nDetails: {details}")]
    ManifestReadError { path: PathBuf, details: String },

    #[error("Failed to read path list: {path}\nDetails: {details}\n\n💡 Hint: The file should contain one directory per line")]
    RootListReadError { path: PathBuf, details: String },

    #[error("Please, provide at least one folder to inspect\n\n💡 Hint: Pass directories as arguments or a list file with --file")]
    NoInputPaths,

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Background task failed while processing {input}: {details}")]
    TaskFailed { input: String, details: String },
}

impl SyncError {
    /// Maps a fatal error to the exit code the process should end with.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SyncError::NoInputPaths => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}
