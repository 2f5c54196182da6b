//! Scroll assembly
//!
//! A scroll is a `<layout>` block holding the rendered tree, followed by one
//! `<file path="...">` block per retained text file:
//!
//! ```text
//! <layout>
//! project/
//! └── a.txt
//! </layout>
//!
//! <file path="a.txt">
//! hello
//! </file>
//!
//! ```

use std::fs;
use std::path::Path;

use crate::domain::ProjectPath;
use crate::error::{Result, ScrollError};

/// One file's content as it appears in the scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlock {
    pub path: ProjectPath,
    pub content: String,
}

/// The assembled output: a layout block and the file blocks in path order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollDocument {
    layout: String,
    files: Vec<FileBlock>,
}

impl ScrollDocument {
    pub fn new(layout: String, mut files: Vec<FileBlock>) -> Self {
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Self { layout, files }
    }

    /// The rendered tree, without the surrounding tags.
    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn files(&self) -> &[FileBlock] {
        &self.files
    }

    /// Total bytes of file content carried by the scroll.
    pub fn content_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.content.len() as u64).sum()
    }

    /// Render the whole scroll as one string.
    pub fn render(&self) -> String {
        let per_file: usize =
            self.files.iter().map(|f| f.path.as_str().len() + f.content.len() + 24).sum();
        let capacity = self.layout.len() + 24 + per_file;
        let mut out = String::with_capacity(capacity);
        push_layout_block(&mut out, &self.layout);
        for file in &self.files {
            push_file_block(&mut out, file.path.as_str(), &file.content);
        }
        out
    }
}

fn push_layout_block(out: &mut String, tree: &str) {
    out.push_str("<layout>\n");
    out.push_str(tree);
    out.push_str("\n</layout>\n\n");
}

fn push_file_block(out: &mut String, path: &str, content: &str) {
    out.push_str("<file path=\"");
    out.push_str(path);
    out.push_str("\">\n");
    out.push_str(content);
    out.push_str("\n</file>\n\n");
}

/// Write a rendered scroll to `path`.
pub fn write_scroll(document: &ScrollDocument, path: &Path) -> Result<()> {
    fs::write(path, document.render())
        .map_err(|source| ScrollError::Write { path: path.to_path_buf(), source })
}
