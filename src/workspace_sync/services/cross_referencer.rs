use super::VersionTable;
use crate::workspace_sync::domain::{Comparison, DependencyKind, Issue, Project};

/// Options controlling which dependency tables are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrossReferenceOptions {
    /// Also compare `devDependencies` (off by default)
    pub include_dev_dependencies: bool,
}

impl CrossReferenceOptions {
    fn kinds(&self) -> &'static [DependencyKind] {
        if self.include_dev_dependencies {
            &[DependencyKind::Runtime, DependencyKind::Dev]
        } else {
            &[DependencyKind::Runtime]
        }
    }
}

/// Projects with comparisons attached, plus everything worth warning about
#[derive(Debug, Clone)]
pub struct CrossReferenceOutcome {
    pub projects: Vec<Project>,
    pub issues: Vec<Issue>,
}

/// CrossReferencer - compares declared dependency versions with the
/// version the dependency's own manifest declares
///
/// Dependencies that do not name a scanned project produce nothing.
pub struct CrossReferencer;

impl CrossReferencer {
    pub fn cross_reference(
        mut projects: Vec<Project>,
        options: CrossReferenceOptions,
    ) -> CrossReferenceOutcome {
        let (table, mut issues) = VersionTable::build(&projects);

        for project in &mut projects {
            let comparisons = Self::compare_project(project, &table, options, &mut issues);
            project.set_comparisons(comparisons);
        }

        CrossReferenceOutcome { projects, issues }
    }

    fn compare_project(
        project: &Project,
        table: &VersionTable,
        options: CrossReferenceOptions,
        issues: &mut Vec<Issue>,
    ) -> Vec<Comparison> {
        let mut comparisons = Vec::new();

        for &kind in options.kinds() {
            for (dependency, spec) in project.dependencies_of(kind) {
                let Some(reference) = table.version_of(dependency) else {
                    continue;
                };

                match spec.as_version() {
                    Some(raw) => {
                        comparisons.push(Comparison::new(dependency.as_str(), raw, reference, kind))
                    }
                    None => issues.push(Issue::UnsupportedSpecifier {
                        path: project.path().to_path_buf(),
                        dependency: dependency.clone(),
                        kind,
                        found: spec.type_name(),
                    }),
                }
            }
        }

        comparisons.sort_by(|a, b| {
            a.dependency_name()
                .cmp(b.dependency_name())
                .then(a.kind().cmp(&b.kind()))
        });
        comparisons
    }
}
