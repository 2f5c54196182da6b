//! Bundle pipeline: ignore rules → walk → classify → tree → scroll

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::domain::{FileEntry, ScanStats};
use crate::error::{Result, ScrollError};
use crate::render::{write_scroll, FileBlock, ScrollDocument};
use crate::scan::{build_ignore_rules, generate_tree, FileScanner};
use crate::utils::{format_with_commas, read_file_safe, ReadError};

/// Inputs for one bundling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    /// Root of the project to bundle
    pub project_dir: PathBuf,

    /// Where to write the scroll; `None` returns it instead
    pub output_file: Option<PathBuf>,

    /// Gitignore-style patterns applied after every other source
    pub extra_ignore_patterns: Vec<String>,

    /// Read `<project_dir>/.gitignore`
    pub use_gitignore: bool,

    /// Additional ignore file, resolved against the working directory
    pub ignore_file: Option<PathBuf>,
}

impl BundleOptions {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            output_file: None,
            extra_ignore_patterns: Vec::new(),
            use_gitignore: true,
            ignore_file: None,
        }
    }

    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    pub fn exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_ignore_patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn use_gitignore(mut self, enabled: bool) -> Self {
        self.use_gitignore = enabled;
        self
    }

    pub fn ignore_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignore_file = Some(path.into());
        self
    }
}

/// Bundle a project.
///
/// Returns the scroll when `output_file` is unset; otherwise writes it there
/// and returns `None`.
pub fn bundle_project(options: &BundleOptions) -> Result<Option<String>> {
    let (document, stats) = build_scroll_with_stats(options)?;

    let Some(output) = options.output_file.as_deref() else {
        return Ok(Some(document.render()));
    };

    info!("Generating output file at '{}'...", output.display());
    write_scroll(&document, output)?;
    info!(
        "Bundled {} files ({} bytes) into '{}'.",
        stats.files_included,
        format_with_commas(stats.total_bytes_included),
        output.display()
    );
    Ok(None)
}

/// Run the pipeline and return the assembled scroll.
pub fn build_scroll(options: &BundleOptions) -> Result<ScrollDocument> {
    build_scroll_with_stats(options).map(|(document, _)| document)
}

/// Like [`build_scroll`], also returning what the walk saw.
pub fn build_scroll_with_stats(options: &BundleOptions) -> Result<(ScrollDocument, ScanStats)> {
    let root = resolve_project_dir(&options.project_dir)?;

    let rules = build_ignore_rules(
        &root,
        options.use_gitignore,
        options.ignore_file.as_deref(),
        &options.extra_ignore_patterns,
    )?;

    let mut scanner = FileScanner::new(root.clone()).ignore_rules(rules);
    if let Some(output) = options.output_file.as_deref().and_then(resolve_output_path) {
        scanner = scanner.skip_path(output);
    }
    let entries = scanner.scan()?;
    let mut stats = scanner.stats().clone();

    let blocks = load_blocks(entries, &mut stats, read_file_safe);
    stats.files_included = blocks.len();
    info!("Found {} files to include.", stats.files_included);

    let root_name = root.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let paths: Vec<&str> = blocks.iter().map(|b| b.path.as_str()).collect();
    let tree = generate_tree(&root_name, &paths);

    let document = ScrollDocument::new(tree, blocks);
    stats.total_bytes_included = document.content_bytes();
    Ok((document, stats))
}

/// Read every text entry with `read`, skipping those that fail.
fn load_blocks<F>(entries: Vec<FileEntry>, stats: &mut ScanStats, mut read: F) -> Vec<FileBlock>
where
    F: FnMut(&Path) -> std::result::Result<String, ReadError>,
{
    let mut blocks = Vec::new();
    for entry in entries.into_iter().filter(|e| !e.is_binary) {
        match read(&entry.absolute_path) {
            Ok(content) => {
                debug!("  + Add: {}", entry.path);
                blocks.push(FileBlock { path: entry.path, content });
            }
            Err(ReadError::Undecodable { valid_up_to }) => {
                debug!("  - Skip (binary, invalid UTF-8 at byte {valid_up_to}): {}", entry.path);
                stats.files_skipped_binary += 1;
            }
            Err(err @ ReadError::Unreadable(_)) => {
                warn!("  - Error reading {}: {err}", entry.path);
                stats.files_skipped_unreadable += 1;
            }
        }
    }
    blocks
}

fn resolve_project_dir(project_dir: &Path) -> Result<PathBuf> {
    match project_dir.canonicalize() {
        Ok(root) if root.is_dir() => Ok(root),
        _ => Err(ScrollError::ProjectNotFound(project_dir.to_path_buf())),
    }
}

/// Absolute form of the output path so the walker can recognise it.
///
/// The file may not exist yet, so only its parent is canonicalized.
fn resolve_output_path(output: &Path) -> Option<PathBuf> {
    if let Ok(path) = output.canonicalize() {
        return Some(path);
    }
    let file_name = output.file_name()?;
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.canonicalize().ok()?,
        _ => std::env::current_dir().ok()?.canonicalize().ok()?,
    };
    Some(parent.join(file_name))
}
