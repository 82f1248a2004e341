use crate::error::ConfigError;
use std::path::Path;

pub const DEFAULT_SUFFIXES: &[&str] = &[
    ".c", ".cpp", ".mm", ".h", ".pbxproj", ".exp", ".xcconfig", ".sh", ".make", ".y", ".lut.h",
];

/// Extensionless build helper that is always eligible.
pub const DEFAULT_NAMES: &[&str] = &["create_hash_table"];

/// Allow-list deciding which files are considered for renaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifyingSet {
    suffixes: Vec<String>,
    names: Vec<String>,
}

impl QualifyingSet {
    pub fn new(suffixes: Vec<String>, names: Vec<String>) -> Result<Self, ConfigError> {
        for suffix in &suffixes {
            if !suffix.starts_with('.') || suffix.len() < 2 {
                return Err(ConfigError::InvalidSuffix(suffix.clone()));
            }
        }
        Ok(Self { suffixes, names })
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Check a base filename against the allow-list.
    ///
    /// Single-dot suffixes compare against the file's extension, so a dotfile
    /// like `.h` has no extension and does not qualify. Multi-dot suffixes
    /// (`.lut.h`) need a non-empty stem in front of them.
    pub fn qualifies(&self, file_name: &str) -> bool {
        if self.names.iter().any(|name| name == file_name) {
            return true;
        }

        if let Some(ext) = Path::new(file_name).extension().and_then(|e| e.to_str()) {
            if self
                .suffixes
                .iter()
                .any(|suffix| suffix[1..] == *ext && !suffix[1..].contains('.'))
            {
                return true;
            }
        }

        self.suffixes
            .iter()
            .filter(|suffix| suffix[1..].contains('.'))
            .any(|suffix| file_name.len() > suffix.len() && file_name.ends_with(suffix.as_str()))
    }
}

impl Default for QualifyingSet {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| (*s).to_string()).collect(),
            names: DEFAULT_NAMES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
