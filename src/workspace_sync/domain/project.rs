use super::{Comparison, DependencyKind, DependencySpec};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Dependency table of a manifest, keyed by dependency name
pub type DependencyTable = BTreeMap<String, DependencySpec>;

/// Project entity: one discovered manifest and, after cross-referencing,
/// the comparisons for its dependencies.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    path: PathBuf,
    name: Option<String>,
    version: Option<String>,
    dependencies: DependencyTable,
    dev_dependencies: DependencyTable,
    comparisons: Vec<Comparison>,
}

impl Project {
    pub fn new(
        path: PathBuf,
        name: Option<String>,
        version: Option<String>,
        dependencies: DependencyTable,
        dev_dependencies: DependencyTable,
    ) -> Self {
        Self {
            path,
            name,
            version,
            dependencies,
            dev_dependencies,
            comparisons: Vec::new(),
        }
    }

    /// A project whose manifest yielded no usable fields
    pub fn empty(path: PathBuf) -> Self {
        Self::new(path, None, None, DependencyTable::new(), DependencyTable::new())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared name; an empty string counts as absent
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn dependencies(&self) -> &DependencyTable {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &DependencyTable {
        &self.dev_dependencies
    }

    pub fn dependencies_of(&self, kind: DependencyKind) -> &DependencyTable {
        match kind {
            DependencyKind::Runtime => &self.dependencies,
            DependencyKind::Dev => &self.dev_dependencies,
        }
    }

    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    pub fn has_comparisons(&self) -> bool {
        !self.comparisons.is_empty()
    }

    pub fn mismatch_count(&self) -> usize {
        self.comparisons.iter().filter(|c| !c.is_in_sync()).count()
    }

    /// Replaces any previously attached comparisons
    pub fn set_comparisons(&mut self, comparisons: Vec<Comparison>) {
        self.comparisons = comparisons;
    }

    /// Label used in reports: `name:path`, or just the path when unnamed
    pub fn display_label(&self) -> String {
        match self.name() {
            Some(name) => format!("{}:{}", name, self.path.display()),
            None => self.path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(entries: &[(&str, &str)]) -> DependencyTable {
        entries
            .iter()
            .map(|(name, spec)| (name.to_string(), DependencySpec::from(*spec)))
            .collect()
    }

    #[test]
    fn test_project_new() {
        let project = Project::new(
            PathBuf::from("apps/web/package.json"),
            Some("web".to_string()),
            Some("1.0.0".to_string()),
            deps(&[("lib", "^2.0.0")]),
            deps(&[("jest", "29.0.0")]),
        );

        assert_eq!(project.name(), Some("web"));
        assert_eq!(project.version(), Some("1.0.0"));
        assert_eq!(project.dependencies().len(), 1);
        assert_eq!(project.dependencies_of(DependencyKind::Dev).len(), 1);
        assert!(!project.has_comparisons());
    }

    #[test]
    fn test_empty_name_is_absent() {
        let project = Project::new(
            PathBuf::from("package.json"),
            Some(String::new()),
            None,
            DependencyTable::new(),
            DependencyTable::new(),
        );
        assert!(project.name().is_none());
        assert_eq!(project.display_label(), "package.json");
    }

    #[test]
    fn test_set_comparisons_replaces() {
        let mut project = Project::empty(PathBuf::from("package.json"));
        project.set_comparisons(vec![
            Comparison::new("a", "1.0.0", "2.0.0", DependencyKind::Runtime),
            Comparison::new("b", "1.0.0", "1.0.0", DependencyKind::Runtime),
        ]);
        assert_eq!(project.mismatch_count(), 1);

        project.set_comparisons(vec![Comparison::new(
            "a",
            "2.0.0",
            "2.0.0",
            DependencyKind::Runtime,
        )]);
        assert_eq!(project.comparisons().len(), 1);
        assert_eq!(project.mismatch_count(), 0);
    }

    #[test]
    fn test_display_label_with_name() {
        let project = Project::new(
            PathBuf::from("libs/core/package.json"),
            Some("core".to_string()),
            None,
            DependencyTable::new(),
            DependencyTable::new(),
        );
        assert_eq!(project.display_label(), "core:libs/core/package.json");
    }
}
