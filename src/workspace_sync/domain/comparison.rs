use super::DependencyKind;

/// Mark printed for a dependency that matches its reference version
pub const IN_SYNC_MARK: &str = "✓";

/// Mark printed for a dependency that differs from its reference version
pub const OUT_OF_SYNC_MARK: &str = "✕";

/// Removes every `^` and `~` from a version specifier.
///
/// Only these two range markers are understood; anything else (`>=`, `||`,
/// `x` ranges) is left untouched and compared verbatim.
pub fn strip_range_markers(spec: &str) -> String {
    spec.replace(['^', '~'], "")
}

/// One dependency of a project paired with the version the scanned
/// project of the same name declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    dependency_name: String,
    declared_version: String,
    reference_version: String,
    kind: DependencyKind,
}

impl Comparison {
    /// Creates a comparison, stripping range markers from `raw_spec`
    pub fn new(
        dependency_name: impl Into<String>,
        raw_spec: &str,
        reference_version: impl Into<String>,
        kind: DependencyKind,
    ) -> Self {
        Self {
            dependency_name: dependency_name.into(),
            declared_version: strip_range_markers(raw_spec),
            reference_version: reference_version.into(),
            kind,
        }
    }

    pub fn dependency_name(&self) -> &str {
        &self.dependency_name
    }

    pub fn declared_version(&self) -> &str {
        &self.declared_version
    }

    pub fn reference_version(&self) -> &str {
        &self.reference_version
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    /// Exact string equality; two empty versions are in sync.
    pub fn is_in_sync(&self) -> bool {
        self.declared_version == self.reference_version
    }

    pub fn status_mark(&self) -> &'static str {
        if self.is_in_sync() {
            IN_SYNC_MARK
        } else {
            OUT_OF_SYNC_MARK
        }
    }
}
