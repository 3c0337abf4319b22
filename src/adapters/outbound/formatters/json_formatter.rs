use crate::application::read_models::SyncReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the report read model as pretty JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &SyncReport) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::SyncReportBuilder;
    use crate::workspace_sync::domain::{Comparison, DependencyKind, DependencyTable, Project};
    use serde_json::Value;
    use std::path::PathBuf;

    #[test]
    fn test_format_json_structure() {
        let mut app = Project::new(
            PathBuf::from("app/package.json"),
            Some("app".to_string()),
            Some("1.0.0".to_string()),
            DependencyTable::new(),
            DependencyTable::new(),
        );
        app.set_comparisons(vec![Comparison::new(
            "lib",
            "^1.9.0",
            "2.0.0",
            DependencyKind::Runtime,
        )]);
        let report = SyncReportBuilder::build_at(&[app], "2024-01-01T00:00:00Z".to_string());

        let output = JsonFormatter::new().format(&report).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["generatedAt"], "2024-01-01T00:00:00Z");
        assert_eq!(json["summary"]["mismatches"], 1);
        assert_eq!(json["projects"][0]["name"], "app");
        assert_eq!(json["projects"][0]["path"], "app/package.json");

        let comparison = &json["projects"][0]["comparisons"][0];
        assert_eq!(comparison["dependency"], "lib");
        assert_eq!(comparison["kind"], "dependencies");
        assert_eq!(comparison["declaredVersion"], "1.9.0");
        assert_eq!(comparison["referenceVersion"], "2.0.0");
        assert_eq!(comparison["inSync"], false);
        assert_eq!(comparison["status"], "✕");
    }

    #[test]
    fn test_format_json_dev_kind() {
        let mut app = Project::empty(PathBuf::from("app/package.json"));
        app.set_comparisons(vec![Comparison::new("lib", "1.0.0", "1.0.0", DependencyKind::Dev)]);
        let report = SyncReportBuilder::build_at(&[app], "2024-01-01T00:00:00Z".to_string());

        let json: Value = serde_json::from_str(&JsonFormatter::new().format(&report).unwrap()).unwrap();
        assert_eq!(json["projects"][0]["comparisons"][0]["kind"], "devDependencies");
    }

    #[test]
    fn test_format_empty_report() {
        let report = SyncReportBuilder::build_at(&[], "2024-01-01T00:00:00Z".to_string());
        let output = JsonFormatter::new().format(&report).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["projects"].as_array().unwrap().len(), 0);
        assert_eq!(json["summary"]["scannedProjects"], 0);
    }
}
