//! The walk-then-rewrite run behind the `filemap` command.

use crate::config::{Config, DEFAULT_PROJECT_FILE};
use crate::error::ConfigError;
use crate::log::RunLog;
use crate::output::MapResult;
use crate::qualify::QualifyingSet;
use crate::rewrite::{rewrite_document, ApplyOrder};
use crate::tokens::MappingTable;
use crate::walker::{build_globset, walk_tree};
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Target document; relative paths are resolved against the root
    pub project_file: PathBuf,
    pub mapping: MappingTable,
    pub qualifying: QualifyingSet,
    pub excludes: Vec<String>,
    pub order: ApplyOrder,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            project_file: PathBuf::from(DEFAULT_PROJECT_FILE),
            mapping: MappingTable::default(),
            qualifying: QualifyingSet::default(),
            excludes: vec![],
            order: ApplyOrder::default(),
            log_file: None,
            verbose: false,
        }
    }
}

impl MapOptions {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            project_file: config.project_file(),
            mapping: config.mapping_table()?,
            qualifying: config.qualifying_set()?,
            excludes: config.exclude.clone(),
            order: config.order.unwrap_or_default(),
            log_file: config.log_file.clone(),
            verbose: false,
        })
    }
}

/// Walk `root`, build the rename table, then rewrite the project file.
///
/// The walk finishes before the project file is read; the table is handed
/// over by value and never touched again by the walker.
pub fn map_operation(root: &Path, options: &MapOptions) -> Result<MapResult> {
    let project_path = root.join(&options.project_file);
    if !project_path.is_file() {
        return Err(anyhow!(
            "Project file not found: {}",
            project_path.display()
        ));
    }

    let excludes = build_globset(&options.excludes)?;
    let log_path = options.log_file.as_ref().map(|p| root.join(p));
    let mut log = RunLog::new(log_path.as_deref(), options.verbose)?;

    log.log(&format!(
        "Starting run in {} (project file {}, order {})",
        root.display(),
        options.project_file.display(),
        options.order
    ))?;

    let walk = walk_tree(
        root,
        &options.mapping,
        &options.qualifying,
        excludes.as_ref(),
        &mut log,
    )?;
    log.log(&format!(
        "Walk complete: {} files, {} eligible, {} renames",
        walk.files_visited,
        walk.files_qualifying,
        walk.table.len()
    ))?;

    let rewrite = rewrite_document(&project_path, &walk.table, options.order, &mut log)?;
    log.log(&format!(
        "Finished: {} replacements",
        rewrite.total_replacements
    ))?;

    Ok(MapResult {
        root: root.to_path_buf(),
        project_file: options.project_file.clone(),
        order: options.order,
        files_visited: walk.files_visited,
        files_qualifying: walk.files_qualifying,
        renames: walk.table.entries(),
        collisions: walk.collisions,
        replacements: rewrite.replacements,
        total_replacements: rewrite.total_replacements,
        changed: rewrite.changed,
    })
}
