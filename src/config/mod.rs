//! Configuration loading
//!
//! Layers, lowest precedence first: built-in defaults, `repo2scroll.toml`
//! (or an explicit `--config` file), `REPO2SCROLL_*` environment variables.
//! Command-line flags are applied on top by [`merge_cli_with_config`].

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::Path;
use tracing::debug;

use crate::domain::{Config, CONFIG_FILE_NAME};

/// Prefix for environment overrides, e.g. `REPO2SCROLL_OUTPUT`.
pub const ENV_PREFIX: &str = "REPO2SCROLL_";

/// Load the layered configuration for a project.
///
/// An explicit config file must exist; the per-project `repo2scroll.toml` is
/// optional. A relative `ignore_file` from the file or environment is taken
/// relative to the project directory.
pub fn load_config(project_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    match explicit {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("Config file not found: '{}'", path.display());
            }
            debug!("Loading config from '{}'", path.display());
            figment = figment.merge(Toml::file(path));
        }
        None => {
            let candidate = project_dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                debug!("Loading config from '{}'", candidate.display());
                figment = figment.merge(Toml::file(candidate));
            }
        }
    }

    let mut config: Config = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Invalid repo2scroll configuration")?;

    if let Some(ignore_file) = config.ignore_file.take() {
        config.ignore_file = Some(if ignore_file.is_relative() {
            project_dir.join(ignore_file)
        } else {
            ignore_file
        });
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::path::PathBuf;

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|jail| {
            let config = load_config(jail.directory(), None).expect("config");
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn project_file_is_read() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE_NAME,
                r#"
                output = "snapshot.txt"
                exclude = ["*.log", "dist/"]
                respect_gitignore = false
                ignore_file = ".dockerignore"
                "#,
            )?;
            let config = load_config(jail.directory(), None).expect("config");
            assert_eq!(config.output, PathBuf::from("snapshot.txt"));
            assert_eq!(config.exclude, vec!["*.log".to_string(), "dist/".to_string()]);
            assert!(!config.respect_gitignore);
            assert_eq!(config.ignore_file, Some(jail.directory().join(".dockerignore")));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE_NAME, r#"output = "from-file.txt""#)?;
            jail.set_env("REPO2SCROLL_OUTPUT", "from-env.txt");
            let config = load_config(jail.directory(), None).expect("config");
            assert_eq!(config.output, PathBuf::from("from-env.txt"));
            Ok(())
        });
    }

    #[test]
    fn explicit_file_replaces_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE_NAME, r#"output = "project.txt""#)?;
            jail.create_file("custom.toml", r#"output = "custom.txt""#)?;
            let explicit = jail.directory().join("custom.toml");
            let config = load_config(jail.directory(), Some(&explicit)).expect("config");
            assert_eq!(config.output, PathBuf::from("custom.txt"));
            Ok(())
        });
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            let missing = jail.directory().join("missing.toml");
            let err = load_config(jail.directory(), Some(&missing)).unwrap_err();
            assert!(err.to_string().contains("Config file not found"));
            Ok(())
        });
    }
}
