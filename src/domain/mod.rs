//! Core domain types and models
//!
//! Defines ProjectPath, FileEntry, ScanStats and the persisted Config.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default output file name written by the CLI.
pub const DEFAULT_OUTPUT_FILE: &str = "combined_output.txt";

/// Name of the per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "repo2scroll.toml";

/// A path relative to the project root, always `/`-separated.
///
/// Ordering compares path segments one by one, so `a/b` sorts before `a.txt`
/// the same way a filesystem walk sorted by name would visit them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectPath(String);

impl ProjectPath {
    /// Build a project path from a path relative to the root.
    ///
    /// Returns `None` for empty paths and for anything that still carries a
    /// root or prefix component.
    pub fn from_relative(relative: &Path) -> Option<Self> {
        let normalized = crate::utils::normalize_path(relative)?;
        if normalized.is_empty() {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the `/`-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Ancestor directories from the outermost inwards, excluding the path itself.
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        self.0.match_indices('/').map(move |(idx, _)| &self.0[..idx])
    }
}

impl Ord for ProjectPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.segments().cmp(other.segments())
    }
}

impl PartialOrd for ProjectPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A file retained by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the project root
    pub path: ProjectPath,

    /// Location on disk
    pub absolute_path: PathBuf,

    /// File size in bytes (of the link target for symlinked files)
    pub size_bytes: u64,

    /// Whether the classifier flagged the file as binary
    pub is_binary: bool,
}

/// Where an ignore rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleOrigin {
    /// Built-in version-control excludes
    Default,
    /// The project's `.gitignore`
    Gitignore,
    /// A custom ignore file passed by the caller
    CustomFile,
    /// A pattern passed directly at call time
    CliExclude,
}

impl RuleOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleOrigin::Default => "default",
            RuleOrigin::Gitignore => "gitignore",
            RuleOrigin::CustomFile => "custom-file",
            RuleOrigin::CliExclude => "cli-exclude",
        }
    }
}

impl fmt::Display for RuleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistics from scanning and assembling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Files visited by the walk (including filtered)
    pub files_scanned: usize,

    /// Files that made it into the scroll
    pub files_included: usize,

    /// Files skipped by an ignore rule
    pub files_skipped_ignored: usize,

    /// Files skipped as binary (extension or content)
    pub files_skipped_binary: usize,

    /// Files skipped because they could not be read
    pub files_skipped_unreadable: usize,

    /// Directories never entered because a rule excluded them
    pub dirs_pruned: usize,

    /// Bytes of file content written into the scroll
    pub total_bytes_included: u64,
}

/// Persisted defaults for a run, loaded from `repo2scroll.toml` and the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output file name, relative to the working directory
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Extra gitignore-style exclude patterns
    #[serde(default, alias = "exclude_patterns")]
    pub exclude: Vec<String>,

    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Custom ignore file in gitignore syntax (e.g. `.dockerignore`)
    #[serde(default)]
    pub ignore_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            exclude: Vec::new(),
            respect_gitignore: true,
            ignore_file: None,
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pp(s: &str) -> ProjectPath {
        ProjectPath::from_relative(Path::new(s)).expect("valid relative path")
    }

    #[test]
    fn ordering_is_segment_wise() {
        let mut paths = vec![pp("a.txt"), pp("a/z.rs"), pp("B.md"), pp("a/b/c.rs")];
        paths.sort();
        let ordered: Vec<&str> = paths.iter().map(|p| p.as_str()).collect();
        assert_eq!(ordered, vec!["B.md", "a/b/c.rs", "a/z.rs", "a.txt"]);
    }

    #[test]
    fn ancestors_run_outermost_first() {
        let path = pp("src/cli/mod.rs");
        let ancestors: Vec<&str> = path.ancestors().collect();
        assert_eq!(ancestors, vec!["src", "src/cli"]);
        assert_eq!(pp("top.rs").ancestors().count(), 0);
    }

    #[test]
    fn rejects_empty_and_absolute_paths() {
        assert!(ProjectPath::from_relative(Path::new("")).is_none());
        assert!(ProjectPath::from_relative(Path::new("/etc/passwd")).is_none());
    }

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("combined_output.txt"));
        assert!(config.respect_gitignore);
        assert!(config.exclude.is_empty());
        assert!(config.ignore_file.is_none());
    }
}
