use crate::error::ConfigError;
use crate::log::RunLog;
use crate::table::{RenameEntry, RenameTable};
use anyhow::{Context, Result};
use bstr::ByteSlice;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tempfile::NamedTempFile;

/// Order in which rename entries are applied to the document text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyOrder {
    /// Longest old filename first, ties by old filename. Independent of
    /// traversal order, and a name is never rewritten through a shorter name
    /// it contains.
    #[default]
    LongestFirst,
    /// Rename table key order (new filename ascending).
    Table,
}

impl FromStr for ApplyOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "longest-first" | "longest" => Ok(Self::LongestFirst),
            "table" => Ok(Self::Table),
            _ => Err(ConfigError::InvalidOrder(s.to_string())),
        }
    }
}

impl fmt::Display for ApplyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LongestFirst => write!(f, "longest-first"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// How many times one entry's old filename was replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub old: String,
    pub new: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteReport {
    pub replacements: Vec<Replacement>,
    pub total_replacements: usize,
    pub changed: bool,
}

/// Entries of `table` in the order they will be applied.
pub fn application_order(table: &RenameTable, order: ApplyOrder) -> Vec<RenameEntry> {
    let mut entries = table.entries();
    if order == ApplyOrder::LongestFirst {
        entries.sort_by(|a, b| b.old.len().cmp(&a.old.len()).then_with(|| a.old.cmp(&b.old)));
    }
    entries
}

/// Replace every old filename with its new filename, one entry at a time.
///
/// Each entry operates on the output of the previous one. Matching is on raw
/// bytes, so the document does not need to be valid UTF-8.
pub fn rewrite_text(
    content: &[u8],
    table: &RenameTable,
    order: ApplyOrder,
) -> (Vec<u8>, Vec<Replacement>) {
    let mut current = content.to_vec();
    let mut replacements = Vec::new();

    for entry in application_order(table, order) {
        let count = current.find_iter(entry.old.as_bytes()).count();
        if count == 0 {
            continue;
        }
        current = current.replace(entry.old.as_bytes(), entry.new.as_bytes());
        replacements.push(Replacement {
            old: entry.old,
            new: entry.new,
            count,
        });
    }

    (current, replacements)
}

/// Rewrite the document at `path` in place.
///
/// The file is only replaced when the content actually changes, and the
/// replacement goes through a temp file in the same directory so a failed
/// write leaves the original untouched.
pub fn rewrite_document(
    path: &Path,
    table: &RenameTable,
    order: ApplyOrder,
    log: &mut RunLog,
) -> Result<RewriteReport> {
    let original =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let (rewritten, replacements) = rewrite_text(&original, table, order);
    for replacement in &replacements {
        log.log(&format!(
            "Replaced {} x{} with {}",
            replacement.old, replacement.count, replacement.new
        ))?;
    }

    let changed = rewritten != original;
    if changed {
        write_atomic(path, &rewritten)?;
        log.log(&format!("Wrote {}", path.display()))?;
    } else {
        log.log(&format!("No changes to {}", path.display()))?;
    }

    Ok(RewriteReport {
        total_replacements: replacements.iter().map(|r| r.count).sum(),
        replacements,
        changed,
    })
}

/// Replace `path` with `content` via temp file and rename, keeping the
/// original permissions.
///
/// A symlinked `path` is resolved first, so the file it points to is
/// replaced and the link itself stays in place.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let target = fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let original_permissions = fs::metadata(&target)
        .with_context(|| format!("Failed to stat {}", target.display()))?
        .permissions();

    let mut temp_file = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
    temp_file
        .write_all(content)
        .with_context(|| format!("Failed to write temp file {}", temp_file.path().display()))?;
    temp_file
        .as_file()
        .sync_all()
        .with_context(|| format!("Failed to sync temp file {}", temp_file.path().display()))?;
    fs::set_permissions(temp_file.path(), original_permissions).with_context(|| {
        format!(
            "Failed to set permissions on temp file {}",
            temp_file.path().display()
        )
    })?;

    temp_file
        .persist(&target)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to atomically replace {}", target.display()))?;

    // Sync parent directory on Unix
    #[cfg(unix)]
    {
        let dir = File::open(parent)
            .with_context(|| format!("Failed to open {}", parent.display()))?;
        dir.sync_all()
            .with_context(|| format!("Failed to sync {}", parent.display()))?;
    }

    Ok(())
}
