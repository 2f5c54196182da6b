//! CLI argument merging with config

use crate::domain::Config;
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    /// Appended after the configured patterns so they take precedence
    pub exclude: Vec<String>,
    pub respect_gitignore: Option<bool>,
    pub ignore_file: Option<PathBuf>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(output) = cli.output {
        base_config.output = output;
    }

    base_config.exclude.extend(cli.exclude);

    if let Some(respect_gitignore) = cli.respect_gitignore {
        base_config.respect_gitignore = respect_gitignore;
    }
    if let Some(ignore_file) = cli.ignore_file {
        base_config.ignore_file = Some(ignore_file);
    }

    base_config
}
