//! Directory walker
//!
//! Walks the project in name order, tests every directory against the ignore
//! rules before entering it, and classifies every surviving file.

use ignore::Match;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use super::rules::IgnoreRuleSet;
use crate::domain::{FileEntry, ProjectPath, ScanStats};
use crate::error::{Result, ScrollError};
use crate::utils::is_binary_file;

pub struct FileScanner {
    root: PathBuf,
    rules: IgnoreRuleSet,
    skip_paths: Vec<PathBuf>,
    stats: ScanStats,
}

impl FileScanner {
    /// A scanner with no ignore rules; see [`FileScanner::ignore_rules`].
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            rules: IgnoreRuleSet::default(),
            skip_paths: Vec::new(),
            stats: ScanStats::default(),
        }
    }

    pub fn ignore_rules(mut self, rules: IgnoreRuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Never emit this file, e.g. the scroll being written inside the project.
    pub fn skip_path(mut self, path: PathBuf) -> Self {
        self.skip_paths.push(path);
        self
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Walk the tree and return every file not excluded by a rule.
    ///
    /// Binary files are returned with `is_binary` set so callers decide what
    /// to do with them. Files that cannot be inspected are logged and left out.
    pub fn scan(&mut self) -> Result<Vec<FileEntry>> {
        info!("Scanning files in '{}'...", self.root.display());

        let root = self.root.as_path();
        let rules = &self.rules;
        let mut stats = ScanStats::default();
        let mut dirs_pruned = 0usize;
        let mut files_ignored = 0usize;

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let Some(path) = project_path(root, entry.path()) else {
                    return false;
                };
                let is_dir = entry.file_type().is_dir();
                match rules.matched(&path, is_dir) {
                    Match::Ignore(glob) => {
                        let origin = rules.origin_of(glob);
                        debug!("  - Skip (ignored by {origin} '{}'): {path}", glob.original());
                        if is_dir {
                            dirs_pruned += 1;
                        } else {
                            files_ignored += 1;
                        }
                        false
                    }
                    Match::None | Match::Whitelist(_) => true,
                }
            });

        let mut entries = Vec::new();
        for item in walker {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(ScrollError::Walk { path: root.to_path_buf(), source: err });
                }
                Err(err) => {
                    warn!("  - Skip (unreadable): {err}");
                    stats.files_skipped_unreadable += 1;
                    continue;
                }
            };
            if entry.depth() == 0 || entry.file_type().is_dir() {
                continue;
            }
            let Some(path) = project_path(root, entry.path()) else {
                continue;
            };
            let Some(size_bytes) = regular_file_size(&entry, &path, &mut stats) else {
                continue;
            };

            stats.files_scanned += 1;
            if self.skip_paths.iter().any(|skip| skip == entry.path()) {
                debug!("  - Skip (output file): {path}");
                continue;
            }

            let is_binary = match is_binary_file(entry.path()) {
                Ok(is_binary) => is_binary,
                Err(err) => {
                    warn!("  - Skip (unreadable): {path}: {err}");
                    stats.files_skipped_unreadable += 1;
                    continue;
                }
            };
            if is_binary {
                debug!("  - Skip (binary): {path}");
                stats.files_skipped_binary += 1;
            }

            entries.push(FileEntry {
                path,
                absolute_path: entry.path().to_path_buf(),
                size_bytes,
                is_binary,
            });
        }

        stats.dirs_pruned = dirs_pruned;
        stats.files_skipped_ignored = files_ignored;
        stats.files_scanned += files_ignored;
        self.stats = stats;

        Ok(entries)
    }
}

fn project_path(root: &Path, path: &Path) -> Option<ProjectPath> {
    ProjectPath::from_relative(path.strip_prefix(root).ok()?)
}

/// Size of the file behind `entry`, or `None` when it is not something to read.
///
/// Symlinked files are resolved to their target; symlinked directories are
/// never followed.
fn regular_file_size(entry: &DirEntry, path: &ProjectPath, stats: &mut ScanStats) -> Option<u64> {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return match entry.metadata() {
            Ok(meta) => Some(meta.len()),
            Err(err) => {
                warn!("  - Skip (unreadable): {path}: {err}");
                stats.files_skipped_unreadable += 1;
                None
            }
        };
    }
    if !file_type.is_symlink() {
        debug!("  - Skip (not a regular file): {path}");
        return None;
    }

    match fs::metadata(entry.path()) {
        Ok(meta) if meta.is_file() => Some(meta.len()),
        Ok(meta) if meta.is_dir() => {
            debug!("  - Skip (symlinked directory): {path}");
            None
        }
        Ok(_) => None,
        Err(err) => {
            warn!("  - Skip (broken symlink): {path}: {err}");
            stats.files_skipped_unreadable += 1;
            None
        }
    }
}
