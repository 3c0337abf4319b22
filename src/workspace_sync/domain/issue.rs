use super::DependencyKind;
use std::fmt;
use std::path::PathBuf;

/// A problem with one input that does not stop the run.
///
/// Issues are collected while scanning, reading and cross-referencing, and
/// every one of them is shown to the user as a warning.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// A nested directory could not be listed; its subtree is omitted
    SubtreeUnreadable { path: PathBuf, details: String },
    /// A discovered manifest could not be read; the project is skipped
    ManifestUnreadable { path: PathBuf, details: String },
    /// A manifest could not be parsed; the project is kept with empty fields
    MalformedManifest { path: PathBuf, details: String },
    /// A dependency value is not a string; the dependency is skipped
    UnsupportedSpecifier {
        path: PathBuf,
        dependency: String,
        kind: DependencyKind,
        found: &'static str,
    },
    /// Two manifests declare the same name; the first one is the reference
    DuplicateName {
        name: String,
        kept: PathBuf,
        ignored: PathBuf,
    },
}

impl Issue {
    /// Whether a project was dropped from the report because of this issue
    pub fn is_skipped_manifest(&self) -> bool {
        matches!(self, Issue::ManifestUnreadable { .. })
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::SubtreeUnreadable { path, details } => {
                write!(f, "Skipped unreadable directory {}: {}", path.display(), details)
            }
            Issue::ManifestUnreadable { path, details } => {
                write!(f, "Skipped manifest {}: {}", path.display(), details)
            }
            Issue::MalformedManifest { path, details } => write!(
                f,
                "Malformed manifest {} was read as empty: {}",
                path.display(),
                details
            ),
            Issue::UnsupportedSpecifier {
                path,
                dependency,
                kind,
                found,
            } => write!(
                f,
                "Ignored {} entry '{}' in {}: expected a version string, found {}",
                kind,
                dependency,
                path.display(),
                found
            ),
            Issue::DuplicateName {
                name,
                kept,
                ignored,
            } => write!(
                f,
                "Package name '{}' is declared by both {} and {}; using the first as reference",
                name,
                kept.display(),
                ignored.display()
            ),
        }
    }
}
