//! Library error type

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole run.
///
/// Per-file problems never surface here; the walker logs them and moves on.
#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("Project directory not found or is not a directory: '{}'", .0.display())]
    ProjectNotFound(PathBuf),

    #[error("Ignore file not found: '{}'", .0.display())]
    IgnoreFileNotFound(PathBuf),

    #[error("Failed to read ignore file '{}': {source}", path.display())]
    IgnoreFileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to compile ignore rules: {0}")]
    IgnoreRules(#[from] ignore::Error),

    #[error("Failed to walk '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to write output file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScrollError>;
