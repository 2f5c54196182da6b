//! Gitignore-style ignore rules
//!
//! Every ignore source (built-in defaults, `.gitignore`, a custom ignore file,
//! call-time excludes) is fed, in that order, into a single
//! [`GitignoreBuilder`]. The last pattern that matches a path decides whether
//! it is ignored or re-included. Each compiled rule can be traced back to the
//! source it was read from, so skips are logged with their cause.

use ignore::gitignore::{Gitignore, GitignoreBuilder, Glob};
use ignore::Match;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::domain::{ProjectPath, RuleOrigin};
use crate::error::{Result, ScrollError};

/// Patterns that are always active, ahead of every user source.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[".git/"];

/// Collects patterns from each source in precedence order.
#[derive(Debug, Clone)]
pub struct IgnoreRulesBuilder {
    builder: GitignoreBuilder,
    custom_file: Option<PathBuf>,
    cli_patterns: Vec<String>,
}

impl IgnoreRulesBuilder {
    /// Start a rule set for `root` holding [`DEFAULT_IGNORE_PATTERNS`].
    pub fn new(root: &Path) -> Self {
        let mut rules = Self {
            builder: GitignoreBuilder::new(root),
            custom_file: None,
            cli_patterns: Vec::new(),
        };
        for pattern in DEFAULT_IGNORE_PATTERNS {
            rules.push(None, pattern, RuleOrigin::Default);
        }
        rules
    }

    /// Add every line of an ignore file read from `from`.
    pub fn add_file_text(&mut self, from: &Path, text: &str, origin: RuleOrigin) -> &mut Self {
        if origin == RuleOrigin::CustomFile {
            self.custom_file = Some(from.to_path_buf());
        }
        for line in text.lines() {
            self.push(Some(from.to_path_buf()), line, origin);
        }
        self
    }

    /// Add one call-time exclude pattern.
    ///
    /// Returns false when the pattern does not compile; it is logged and dropped.
    pub fn add_pattern(&mut self, pattern: &str) -> bool {
        let added = self.push(None, pattern, RuleOrigin::CliExclude);
        if added {
            self.cli_patterns.push(pattern.to_string());
        }
        added
    }

    fn push(&mut self, from: Option<PathBuf>, line: &str, origin: RuleOrigin) -> bool {
        match self.builder.add_line(from, line) {
            Ok(_) => true,
            Err(err) => {
                warn!("Skipping invalid {origin} pattern '{line}': {err}");
                false
            }
        }
    }

    pub fn build(self) -> Result<IgnoreRuleSet> {
        let gitignore = self.builder.build()?;
        Ok(IgnoreRuleSet {
            gitignore,
            custom_file: self.custom_file,
            cli_patterns: self.cli_patterns,
        })
    }
}

/// Compiled ignore rules for one project.
#[derive(Debug, Clone)]
pub struct IgnoreRuleSet {
    gitignore: Gitignore,
    custom_file: Option<PathBuf>,
    cli_patterns: Vec<String>,
}

impl Default for IgnoreRuleSet {
    /// A rule set that ignores nothing.
    fn default() -> Self {
        Self { gitignore: Gitignore::empty(), custom_file: None, cli_patterns: Vec::new() }
    }
}

impl IgnoreRuleSet {
    /// Number of compiled rules, negations included.
    pub fn len(&self) -> usize {
        self.gitignore.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gitignore.is_empty()
    }

    /// Match a single path without looking at its ancestors.
    ///
    /// This is what the walker uses: it never enters an ignored directory, so
    /// the ancestors of anything it asks about are already known to be kept.
    pub fn matched(&self, path: &ProjectPath, is_dir: bool) -> Match<&Glob> {
        self.gitignore.matched(path.as_str(), is_dir)
    }

    /// Full gitignore decision for a project path.
    ///
    /// A path inside an ignored directory is ignored even if a later negation
    /// matches the path itself.
    pub fn is_ignored(&self, path: &ProjectPath, is_dir: bool) -> bool {
        let ancestor_ignored =
            path.ancestors().any(|dir| self.gitignore.matched(dir, true).is_ignore());
        ancestor_ignored || self.matched(path, is_dir).is_ignore()
    }

    /// Which source a matched rule was read from.
    pub fn origin_of(&self, glob: &Glob) -> RuleOrigin {
        match glob.from() {
            Some(from) if self.custom_file.as_deref() == Some(from) => RuleOrigin::CustomFile,
            Some(_) => RuleOrigin::Gitignore,
            None if self.cli_patterns.iter().any(|p| p.trim_end() == glob.original()) => {
                RuleOrigin::CliExclude
            }
            None => RuleOrigin::Default,
        }
    }
}

/// Build the rule set for a project from all ignore sources, in precedence order.
///
/// `ignore_file` is resolved against the working directory, not the project
/// root. It must exist; a missing `.gitignore` is simply skipped.
pub fn build_ignore_rules(
    root: &Path,
    use_gitignore: bool,
    ignore_file: Option<&Path>,
    extra_patterns: &[String],
) -> Result<IgnoreRuleSet> {
    let mut rules = IgnoreRulesBuilder::new(root);

    if use_gitignore {
        let gitignore = root.join(".gitignore");
        if gitignore.is_file() {
            match read_ignore_text(&gitignore) {
                Ok(text) => {
                    rules.add_file_text(&gitignore, &text, RuleOrigin::Gitignore);
                    info!("Loaded ignore patterns from '.gitignore'.");
                }
                Err(err) => warn!("Failed to read '.gitignore': {err}"),
            }
        } else {
            debug!("No .gitignore found in '{}'", root.display());
        }
    }

    if let Some(path) = ignore_file {
        let text = read_ignore_text(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ScrollError::IgnoreFileNotFound(path.to_path_buf())
            } else {
                ScrollError::IgnoreFileUnreadable { path: path.to_path_buf(), source }
            }
        })?;
        rules.add_file_text(path, &text, RuleOrigin::CustomFile);
        info!("Loaded ignore patterns from '{}'.", path.display());
    }

    if !extra_patterns.is_empty() {
        for pattern in extra_patterns {
            rules.add_pattern(pattern);
        }
        info!("Applying extra ignore patterns: {extra_patterns:?}");
    }

    let rules = rules.build()?;
    debug!("Compiled {} ignore rules", rules.len());
    Ok(rules)
}

fn read_ignore_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
