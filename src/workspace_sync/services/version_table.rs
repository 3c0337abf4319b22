use crate::workspace_sync::domain::{Issue, Project};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    version: String,
    source: PathBuf,
}

/// VersionTable - name → declared version of every named project in a scan
///
/// Built once and never modified. When several manifests declare the same
/// name, the first one in scan order wins and each later one is reported.
#[derive(Debug, Clone, Default)]
pub struct VersionTable {
    entries: HashMap<String, Entry>,
}

impl VersionTable {
    /// Builds the table, returning it with one issue per name collision
    pub fn build(projects: &[Project]) -> (Self, Vec<Issue>) {
        let mut entries: HashMap<String, Entry> = HashMap::new();
        let mut issues = Vec::new();

        for project in projects {
            let Some(name) = project.name() else {
                continue;
            };

            if let Some(existing) = entries.get(name) {
                issues.push(Issue::DuplicateName {
                    name: name.to_string(),
                    kept: existing.source.clone(),
                    ignored: project.path().to_path_buf(),
                });
                continue;
            }

            entries.insert(
                name.to_string(),
                Entry {
                    version: project.version().unwrap_or_default().to_string(),
                    source: project.path().to_path_buf(),
                },
            );
        }

        (Self { entries }, issues)
    }

    /// Reference version for a project name; empty when that project
    /// declares no version
    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|entry| entry.version.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
