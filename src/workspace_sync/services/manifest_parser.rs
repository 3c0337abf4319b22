use crate::workspace_sync::domain::{DependencySpec, DependencyTable, Issue, Project};
use serde_json::{Map, Value};
use std::path::Path;

/// File name the scanner looks for
pub const MANIFEST_FILENAME: &str = "package.json";

/// Result of parsing one manifest: the project, plus an issue when the
/// content could not be understood.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedManifest {
    pub project: Project,
    pub issue: Option<Issue>,
}

/// ManifestParser - turns package.json content into a Project
///
/// Parsing never fails. Content that is not a JSON object becomes a
/// project with no fields, and the problem is returned as an issue.
pub struct ManifestParser;

impl ManifestParser {
    pub fn parse(path: &Path, content: &str) -> ParsedManifest {
        let root = match serde_json::from_str::<Value>(content) {
            Ok(Value::Object(root)) => root,
            Ok(other) => {
                return Self::degraded(
                    path,
                    format!("top-level value is {}, not an object", json_type(&other)),
                )
            }
            Err(e) => return Self::degraded(path, e.to_string()),
        };

        let project = Project::new(
            path.to_path_buf(),
            string_field(&root, "name"),
            string_field(&root, "version"),
            dependency_table(&root, "dependencies"),
            dependency_table(&root, "devDependencies"),
        );

        ParsedManifest {
            project,
            issue: None,
        }
    }

    fn degraded(path: &Path, details: String) -> ParsedManifest {
        ParsedManifest {
            project: Project::empty(path.to_path_buf()),
            issue: Some(Issue::MalformedManifest {
                path: path.to_path_buf(),
                details,
            }),
        }
    }
}

fn string_field(root: &Map<String, Value>, key: &str) -> Option<String> {
    root.get(key).and_then(Value::as_str).map(String::from)
}

fn dependency_table(root: &Map<String, Value>, key: &str) -> DependencyTable {
    match root.get(key) {
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(name, value)| (name.clone(), DependencySpec::from_value(value.clone())))
            .collect(),
        _ => DependencyTable::new(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
