use crate::rewrite::{ApplyOrder, Replacement};
use crate::table::{Collision, RenameEntry};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a full walk-and-rewrite run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapResult {
    pub root: PathBuf,
    pub project_file: PathBuf,
    pub order: ApplyOrder,
    pub files_visited: usize,
    pub files_qualifying: usize,
    pub renames: Vec<RenameEntry>,
    pub collisions: Vec<Collision>,
    pub replacements: Vec<Replacement>,
    pub total_replacements: usize,
    pub changed: bool,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for MapResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "root": self.root,
            "project_file": self.project_file,
            "order": self.order,
            "summary": {
                "files_visited": self.files_visited,
                "files_qualifying": self.files_qualifying,
                "renames": self.renames.len(),
                "collisions": self.collisions.len(),
                "replacements": self.total_replacements,
                "changed": self.changed,
            },
            "renames": self.renames,
            "collisions": self.collisions,
            "replacements": self.replacements,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "Scanned {} files ({} eligible), {} renames",
            self.files_visited,
            self.files_qualifying,
            self.renames.len()
        );

        for collision in &self.collisions {
            let _ = writeln!(
                output,
                "Warning: {} and {} both map to {}; using {}",
                collision.replaced_old, collision.kept_old, collision.new, collision.kept_old
            );
        }

        if self.changed {
            let _ = writeln!(
                output,
                "Updated {}: {} replacements",
                self.project_file.display(),
                self.total_replacements
            );
            for replacement in &self.replacements {
                let _ = writeln!(
                    output,
                    "  {} -> {} ({})",
                    replacement.old, replacement.new, replacement.count
                );
            }
        } else {
            let _ = writeln!(output, "No changes to {}", self.project_file.display());
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(changed: bool) -> MapResult {
        MapResult {
            root: PathBuf::from("/src"),
            project_file: PathBuf::from("JavaScriptCore.xcodeproj/project.pbxproj"),
            order: ApplyOrder::LongestFirst,
            files_visited: 10,
            files_qualifying: 4,
            renames: vec![RenameEntry {
                old: "JSBase.h".to_string(),
                new: "TiBase.h".to_string(),
            }],
            collisions: vec![],
            replacements: if changed {
                vec![Replacement {
                    old: "JSBase.h".to_string(),
                    new: "TiBase.h".to_string(),
                    count: 3,
                }]
            } else {
                vec![]
            },
            total_replacements: if changed { 3 } else { 0 },
            changed,
        }
    }

    #[test]
    fn test_summary_format() {
        let output = sample(true).format(OutputFormat::Summary);
        assert!(output.contains("Scanned 10 files (4 eligible), 1 renames"));
        assert!(output.contains("Updated JavaScriptCore.xcodeproj/project.pbxproj: 3 replacements"));
        assert!(output.contains("  JSBase.h -> TiBase.h (3)"));
    }

    #[test]
    fn test_summary_unchanged() {
        let output = sample(false).format_summary();
        assert!(output.contains("No changes to"));
    }

    #[test]
    fn test_summary_collision_warning() {
        let mut result = sample(false);
        result.collisions.push(Collision {
            new: "TiArray.cpp".to_string(),
            replaced_old: "JSArray.cpp".to_string(),
            kept_old: "JSByte.cpp".to_string(),
        });
        let output = result.format_summary();
        assert!(output.contains(
            "Warning: JSArray.cpp and JSByte.cpp both map to TiArray.cpp; using JSByte.cpp"
        ));
    }

    #[test]
    fn test_json_format() {
        let output = sample(true).format(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["order"], "longest-first");
        assert_eq!(value["summary"]["replacements"], 3);
        assert_eq!(value["renames"][0]["new"], "TiBase.h");
    }

    #[test]
    fn test_version_format() {
        let version = VersionResult {
            name: "filemap".to_string(),
            version: "0.1.0".to_string(),
        };
        assert_eq!(version.format_summary(), "filemap 0.1.0");
        assert_eq!(
            version.format_json(),
            r#"{"name":"filemap","version":"0.1.0"}"#
        );
    }
}
