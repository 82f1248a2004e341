use crate::error::ConfigError;
use crate::qualify::QualifyingSet;
use crate::rewrite::ApplyOrder;
use crate::tokens::{MappingTable, TokenPair};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROJECT_FILE: &str = "JavaScriptCore.xcodeproj/project.pbxproj";
pub const CONFIG_DIR: &str = ".filemap";
pub const CONFIG_FILE: &str = "config.toml";

/// Settings read from `.filemap/config.toml`. Every field is optional and
/// falls back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Target document, relative to the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_file: Option<PathBuf>,

    /// Glob patterns excluded from the walk
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<ApplyOrder>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifying: Option<QualifyingConfig>,

    /// Replaces the built-in token table when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<TokenPair>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualifyingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffixes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}

impl Config {
    /// Load config from `<root>/.filemap/config.toml` if it exists
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn project_file(&self) -> PathBuf {
        self.project_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_FILE))
    }

    pub fn mapping_table(&self) -> Result<MappingTable, ConfigError> {
        if self.tokens.is_empty() {
            Ok(MappingTable::default())
        } else {
            MappingTable::new(self.tokens.clone())
        }
    }

    pub fn qualifying_set(&self) -> Result<QualifyingSet, ConfigError> {
        let defaults = QualifyingSet::default();
        let Some(ref qualifying) = self.qualifying else {
            return Ok(defaults);
        };

        QualifyingSet::new(
            qualifying
                .suffixes
                .clone()
                .unwrap_or_else(|| defaults.suffixes().to_vec()),
            qualifying
                .names
                .clone()
                .unwrap_or_else(|| defaults.names().to_vec()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.project_file(), PathBuf::from(DEFAULT_PROJECT_FILE));
        assert_eq!(config.mapping_table().unwrap(), MappingTable::default());
        assert_eq!(config.qualifying_set().unwrap(), QualifyingSet::default());
        assert!(config.order.is_none());
    }

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert!(config.tokens.is_empty());
        assert!(config.project_file.is_none());
    }

    #[test]
    fn test_load_save_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            project_file: Some(PathBuf::from("App.xcodeproj/project.pbxproj")),
            exclude: vec!["build".to_string()],
            order: Some(ApplyOrder::Table),
            log_file: None,
            qualifying: Some(QualifyingConfig {
                suffixes: Some(vec![".m".to_string()]),
                names: None,
            }),
            tokens: vec![TokenPair::new("NS", "UI")],
        };
        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(
            loaded.project_file(),
            PathBuf::from("App.xcodeproj/project.pbxproj")
        );
        assert_eq!(loaded.exclude, vec!["build".to_string()]);
        assert_eq!(loaded.order, Some(ApplyOrder::Table));
        assert_eq!(loaded.tokens, vec![TokenPair::new("NS", "UI")]);
        assert!(loaded.qualifying_set().unwrap().qualifies("NSView.m"));
    }

    #[test]
    fn test_load_from_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join(CONFIG_FILE),
            r#"
project_file = "Other.xcodeproj/project.pbxproj"
order = "longest-first"

[[tokens]]
old = "WK"
new = "TK"
"#,
        )
        .unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.order, Some(ApplyOrder::LongestFirst));
        let table = config.mapping_table().unwrap();
        assert_eq!(table.rename("WKView.h"), Some("TKView.h".to_string()));
    }

    #[test]
    fn test_partial_qualifying_keeps_default_names() {
        let config: Config = toml::from_str(
            r#"
[qualifying]
suffixes = [".m"]
"#,
        )
        .unwrap();
        let set = config.qualifying_set().unwrap();
        assert!(set.qualifies("create_hash_table"));
        assert!(set.qualifies("Thing.m"));
        assert!(!set.qualifies("Thing.cpp"));
    }

    #[test]
    fn test_invalid_config_values() {
        let config: Config = toml::from_str(
            r#"
[[tokens]]
old = ""
new = "X"
"#,
        )
        .unwrap();
        assert!(config.mapping_table().is_err());

        let result: Result<Config, _> = toml::from_str(r#"order = "sideways""#);
        assert!(result.is_err());
    }
}
