use crate::error::ConfigError;
use crate::log::RunLog;
use crate::qualify::QualifyingSet;
use crate::table::{Collision, RenameTable};
use crate::tokens::MappingTable;
use anyhow::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use walkdir::WalkDir;

/// Outcome of scanning a tree: the finished rename table plus counters.
#[derive(Debug, Clone, Default)]
pub struct WalkReport {
    pub table: RenameTable,
    pub files_visited: usize,
    pub files_qualifying: usize,
    pub collisions: Vec<Collision>,
}

/// Compile exclude patterns. Returns `None` when there is nothing to exclude.
///
/// A bare directory name (no wildcard, no dot) or a pattern ending in `/`
/// also excludes everything beneath it.
pub fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, ConfigError> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let glob = |pattern: &str| {
        Glob::new(pattern).map_err(|source| ConfigError::InvalidGlob {
            pattern: pattern.to_string(),
            source,
        })
    };

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(glob(pattern)?);

        if pattern.ends_with('/')
            || (!pattern.contains('*') && !pattern.contains('?') && !pattern.contains('.'))
        {
            let recursive_pattern = if pattern.ends_with('/') {
                format!("{}**", pattern)
            } else {
                format!("{}/**", pattern)
            };
            builder.add(glob(&recursive_pattern)?);
        }
    }

    builder
        .build()
        .map(Some)
        .map_err(|source| ConfigError::InvalidGlob {
            pattern: patterns.join(","),
            source,
        })
}

/// Walk every regular file under `root` and record a rename for each
/// qualifying file whose name contains an old token.
///
/// Nothing on disk is modified. Any traversal error aborts the walk.
pub fn walk_tree(
    root: &Path,
    mapping: &MappingTable,
    qualifying: &QualifyingSet,
    excludes: Option<&GlobSet>,
    log: &mut RunLog,
) -> Result<WalkReport> {
    let mut report = WalkReport::default();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        if entry.depth() == 0 {
            return true;
        }
        match (excludes, entry.path().strip_prefix(root)) {
            (Some(globs), Ok(relative)) => !globs.is_match(relative),
            _ => true,
        }
    });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let location = err.path().unwrap_or(root).display().to_string();
                return Err(
                    anyhow::Error::new(err).context(format!("Failed to walk {}", location))
                );
            },
        };

        // Any symlink that does not resolve to a directory counts as a file,
        // broken links included. Symlinked directories are not descended.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && !entry.path().is_dir());
        if !is_file {
            continue;
        }
        report.files_visited += 1;

        let Some(file_name) = entry.file_name().to_str() else {
            log.log(&format!(
                "Skipping non UTF-8 filename {}",
                entry.path().display()
            ))?;
            continue;
        };

        if !qualifying.qualifies(file_name) {
            continue;
        }
        report.files_qualifying += 1;

        let Some(new_name) = mapping.rename(file_name) else {
            continue;
        };

        log.log(&format!("Mapped {} -> {}", file_name, new_name))?;

        if let Some(previous) = report.table.insert(new_name.clone(), file_name.to_string()) {
            log.log(&format!(
                "Collision: {} and {} both map to {}; keeping {}",
                previous, file_name, new_name, file_name
            ))?;
            report.collisions.push(Collision {
                new: new_name,
                replaced_old: previous,
                kept_old: file_name.to_string(),
            });
        }
    }

    Ok(report)
}
