use anyhow::{anyhow, Context, Result};
use filemap_core::config::{QualifyingConfig, CONFIG_DIR, CONFIG_FILE};
use filemap_core::{ApplyOrder, Config, MappingTable, QualifyingSet};
use std::fs;
use std::path::Path;

/// Write every built-in default out explicitly so it can be edited.
pub fn handle_init(force: bool) -> Result<()> {
    let config_dir = Path::new(CONFIG_DIR);
    let config_path = config_dir.join(CONFIG_FILE);

    if config_path.exists() && !force {
        return Err(anyhow!(
            "Config already exists at {}; use --force to overwrite",
            config_path.display()
        ));
    }

    fs::create_dir_all(config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;

    let qualifying = QualifyingSet::default();
    let config = Config {
        project_file: Some(Config::default().project_file()),
        exclude: vec![],
        order: Some(ApplyOrder::default()),
        log_file: None,
        qualifying: Some(QualifyingConfig {
            suffixes: Some(qualifying.suffixes().to_vec()),
            names: Some(qualifying.names().to_vec()),
        }),
        tokens: MappingTable::default().pairs().to_vec(),
    };
    config
        .save_to_path(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Wrote {}", config_path.display());
    Ok(())
}
