use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::{OrderArg, OutputFormat};

/// Rewrite project-file references to sources renamed by a token map
#[derive(Parser, Debug)]
#[command(name = "filemap")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for the default `run` when no subcommand is given
    #[command(flatten)]
    pub run: RunArgs,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Config file to use instead of .filemap/config.toml
    #[arg(long, global = true, value_name = "PATH", env = "FILEMAP_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Project file to rewrite, relative to the root
    #[arg(long, value_name = "PATH")]
    pub project_file: Option<PathBuf>,

    /// Exclude glob patterns (added to those from the config file)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Order in which renames are applied to the project file
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Append a timestamped run log to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print each mapping and replacement to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for machine consumption
    #[arg(long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Suppress summary output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the tree for renamed sources and rewrite the project file (default)
    Run(RunArgs),

    /// Write the built-in settings to .filemap/config.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_invocation_runs() {
        let cli = Cli::parse_from(["filemap"]);
        assert!(cli.command.is_none());
        assert!(cli.run.project_file.is_none());
        assert!(cli.run.exclude.is_empty());
        assert!(cli.run.order.is_none());
        assert_eq!(cli.run.output, OutputFormat::Summary);
        assert!(!cli.run.quiet);
    }

    #[test]
    fn test_parse_top_level_run_options() {
        let cli = Cli::parse_from(["filemap", "--project-file", "p.pbxproj", "-q"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.run.project_file, Some(PathBuf::from("p.pbxproj")));
        assert!(cli.run.quiet);
    }

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::parse_from(["filemap", "run"]);
        match cli.command {
            Some(Commands::Run(args)) => {
                assert!(args.project_file.is_none());
                assert!(args.exclude.is_empty());
                assert!(args.order.is_none());
                assert_eq!(args.output, OutputFormat::Summary);
                assert!(!args.quiet);
            },
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_run_options() {
        let cli = Cli::parse_from([
            "filemap",
            "-C",
            "src",
            "run",
            "--exclude",
            "build,out",
            "--order",
            "table",
            "--output",
            "json",
        ]);
        assert_eq!(cli.directory, Some(PathBuf::from("src")));
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.exclude, vec!["build".to_string(), "out".to_string()]);
                assert_eq!(args.order, Some(OrderArg::Table));
                assert_eq!(args.output, OutputFormat::Json);
            },
            _ => panic!("expected run"),
        }
    }
}
