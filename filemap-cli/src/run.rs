use anyhow::Result;
use filemap_core::{map_operation, Config, MapOptions, OutputFormatter};
use std::path::Path;

use crate::cli::{OutputFormat, RunArgs};

pub fn handle_run(config_path: Option<&Path>, args: RunArgs) -> Result<()> {
    let root = Path::new(".");

    let config = match config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load(root)?,
    };

    // CLI flags override the config file
    let mut options = MapOptions::from_config(&config)?;
    if let Some(project_file) = args.project_file {
        options.project_file = project_file;
    }
    options.excludes.extend(args.exclude);
    if let Some(order) = args.order {
        options.order = order.into();
    }
    if args.log_file.is_some() {
        options.log_file = args.log_file;
    }
    options.verbose = args.verbose;

    let result = map_operation(root, &options)?;

    match args.output {
        OutputFormat::Json => {
            println!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            if !args.quiet {
                print!("{}", result.format_summary());
            }
        },
    }

    Ok(())
}
