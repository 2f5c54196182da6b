//! Bundle command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use crate::bundle::{bundle_project, BundleOptions};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};

#[derive(Args)]
pub struct BundleArgs {
    /// The root directory of the project to bundle
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// The name of the output file [default: combined_output.txt]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the scroll to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Additional glob patterns to exclude files/directories. Can be specified multiple times
    #[arg(short, long, value_name = "PATTERN", num_args = 1..)]
    pub exclude: Vec<String>,

    /// Do not use the .gitignore file for exclusion rules
    #[arg(long)]
    pub no_gitignore: bool,

    /// Path to a custom file with ignore patterns (e.g., .dockerignore)
    #[arg(long, value_name = "FILEPATH")]
    pub ignore_file: Option<PathBuf>,

    /// Path to a config file [default: <DIRECTORY>/repo2scroll.toml]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: BundleArgs) -> Result<()> {
    let file_config = load_config(&args.directory, args.config.as_deref())?;

    let cli_overrides = CliOverrides {
        output: args.output.clone(),
        exclude: args.exclude.clone(),
        respect_gitignore: if args.no_gitignore { Some(false) } else { None },
        ignore_file: args.ignore_file.clone(),
    };
    let merged = merge_cli_with_config(file_config, cli_overrides);

    let mut options = BundleOptions::new(&args.directory)
        .exclude(merged.exclude)
        .use_gitignore(merged.respect_gitignore);
    if let Some(ignore_file) = merged.ignore_file {
        options = options.ignore_file(ignore_file);
    }

    if args.stdout {
        let scroll = bundle_project(&options)?.unwrap_or_default();
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(scroll.as_bytes()).context("Failed to write scroll to stdout")?;
        stdout.flush()?;
        return Ok(());
    }

    options = options.output_file(merged.output);
    bundle_project(&options)?;
    tracing::info!("Processing complete.");
    Ok(())
}
