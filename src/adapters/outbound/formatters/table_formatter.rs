use crate::application::read_models::{ComparisonView, ProjectView, SyncReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::workspace_sync::domain::DependencyKind;
use owo_colors::OwoColorize;

/// Header cells following the project label
const HEADER_COLUMNS: [&str; 3] = ["versionInPackageJson", "localVersion", "Check"];

/// Narrowest a column is padded to
const MIN_COLUMN_WIDTH: usize = 10;

const COLUMN_SEPARATOR: &str = " | ";

/// TableFormatter adapter rendering one aligned table per project
///
/// Each table is preceded by a blank line and starts with a header row
/// `name:path | versionInPackageJson | localVersion | Check`. Projects
/// without comparisons are not in the report and print nothing.
pub struct TableFormatter {
    colored: bool,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Formatter that never emits ANSI colour codes
    pub fn plain() -> Self {
        Self { colored: false }
    }

    fn render_project(&self, project: &ProjectView, output: &mut String) {
        let header = [
            project.label.clone(),
            HEADER_COLUMNS[0].to_string(),
            HEADER_COLUMNS[1].to_string(),
        ];
        let rows: Vec<[String; 3]> = project
            .comparisons
            .iter()
            .map(|comparison| {
                [
                    Self::dependency_cell(comparison),
                    comparison.declared_version.clone(),
                    comparison.reference_version.clone(),
                ]
            })
            .collect();

        let mut widths = [MIN_COLUMN_WIDTH; 3];
        for row in std::iter::once(&header).chain(rows.iter()) {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        output.push('\n');
        Self::push_row(output, &header, &widths, HEADER_COLUMNS[2]);
        for (row, comparison) in rows.iter().zip(project.comparisons.iter()) {
            let mark = self.status_cell(comparison);
            Self::push_row(output, row, &widths, &mark);
        }
    }

    fn push_row(output: &mut String, cells: &[String; 3], widths: &[usize; 3], last: &str) {
        for (cell, width) in cells.iter().zip(widths.iter()) {
            output.push_str(&format!("{:<width$}", cell, width = *width));
            output.push_str(COLUMN_SEPARATOR);
        }
        output.push_str(last);
        output.push('\n');
    }

    fn dependency_cell(comparison: &ComparisonView) -> String {
        match comparison.kind {
            DependencyKind::Dev => format!("{} (dev)", comparison.dependency),
            DependencyKind::Runtime => comparison.dependency.clone(),
        }
    }

    fn status_cell(&self, comparison: &ComparisonView) -> String {
        match (self.colored, comparison.in_sync) {
            (false, _) => comparison.status.clone(),
            (true, true) => comparison.status.green().to_string(),
            (true, false) => comparison.status.red().to_string(),
        }
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, report: &SyncReport) -> Result<String> {
        let mut output = String::new();
        for project in &report.projects {
            self.render_project(project, &mut output);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::SyncReportBuilder;
    use crate::workspace_sync::domain::{Comparison, DependencyKind, DependencyTable, Project};
    use std::path::PathBuf;

    fn report(comparisons: Vec<Comparison>) -> SyncReport {
        let mut app = Project::new(
            PathBuf::from("app/package.json"),
            Some("app".to_string()),
            Some("1.0.0".to_string()),
            DependencyTable::new(),
            DependencyTable::new(),
        );
        app.set_comparisons(comparisons);
        let lib = Project::empty(PathBuf::from("lib/package.json"));
        SyncReportBuilder::build_at(&[lib, app], "2024-01-01T00:00:00Z".to_string())
    }

    #[test]
    fn test_format_in_sync_row() {
        let output = TableFormatter::plain()
            .format(&report(vec![Comparison::new(
                "lib",
                "^2.0.0",
                "2.0.0",
                DependencyKind::Runtime,
            )]))
            .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "");
        assert_eq!(
            lines[1],
            "app:app/package.json | versionInPackageJson | localVersion | Check"
        );
        assert_eq!(
            lines[2],
            "lib                  | 2.0.0                | 2.0.0        | ✓"
        );
    }

    #[test]
    fn test_format_out_of_sync_row() {
        let output = TableFormatter::plain()
            .format(&report(vec![Comparison::new(
                "lib",
                "^1.9.0",
                "2.0.0",
                DependencyKind::Runtime,
            )]))
            .unwrap();
        assert!(output.contains("1.9.0"));
        assert!(output.trim_end().ends_with('✕'));
    }

    #[test]
    fn test_columns_align() {
        let output = TableFormatter::plain()
            .format(&report(vec![
                Comparison::new("a", "1", "1", DependencyKind::Runtime),
                Comparison::new("a-much-longer-dependency-name", "1", "2", DependencyKind::Dev),
            ]))
            .unwrap();

        let separators: Vec<Vec<usize>> = output
            .lines()
            .skip(1)
            .map(|line| {
                line.char_indices()
                    .filter(|(_, c)| *c == '|')
                    .map(|(i, _)| line[..i].chars().count())
                    .collect()
            })
            .collect();
        assert_eq!(separators.len(), 3);
        assert!(separators.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(output.contains("a-much-longer-dependency-name (dev)"));
    }

    #[test]
    fn test_format_empty_report_prints_nothing() {
        let output = TableFormatter::plain().format(&report(vec![])).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_colored_marks() {
        let output = TableFormatter::new()
            .format(&report(vec![
                Comparison::new("a", "1", "1", DependencyKind::Runtime),
                Comparison::new("b", "1", "2", DependencyKind::Runtime),
            ]))
            .unwrap();
        assert!(output.contains(&"✓".green().to_string()));
        assert!(output.contains(&"✕".red().to_string()));
    }
}
