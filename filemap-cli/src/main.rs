use anyhow::{Context, Result};
use clap::Parser;
use filemap_core::{ConfigError, OutputFormatter, VersionResult};
use std::process;

mod cli;
mod init;
mod run;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
            .unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                process::exit(2);
            });
    }

    let result = match cli.command {
        Some(Commands::Run(args)) => run::handle_run(cli.config.as_deref(), args),
        Some(Commands::Init { force }) => init::handle_init(force),
        Some(Commands::Version { output }) => handle_version(output),
        None => run::handle_run(cli.config.as_deref(), cli.run),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

/// 2 for bad input (config, patterns, missing files), 3 for everything else.
///
/// Looks at every layer of the chain, so extra context on top of a config
/// error does not change the code.
fn exit_code(e: &anyhow::Error) -> i32 {
    let bad_input = e.chain().any(|cause| {
        let message = cause.to_string();
        cause.downcast_ref::<ConfigError>().is_some()
            || message.contains("not found")
            || message.contains("Invalid config")
            || message.contains("already exists")
    });
    if bad_input {
        2
    } else {
        3
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "filemap".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}
