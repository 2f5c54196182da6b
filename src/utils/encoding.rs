//! Binary detection and safe text reading

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Bytes inspected when sniffing a file's content.
pub const SNIFF_WINDOW_BYTES: usize = 8192;

/// Extensions (lowercase, without the dot) treated as binary without reading content.
static BINARY_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Images
        "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tif", "tiff",
        // Archives
        "zip", "rar", "7z", "tar", "gz", "bz2", "xz",
        // Documents
        "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
        // Executables & libraries
        "exe", "dll", "so", "o", "a", "lib", "jar", "class", "pyc",
        // Audio & video
        "mp3", "wav", "mp4", "mov", "avi", "mkv",
        // Fonts
        "woff", "woff2", "ttf", "otf", "eot",
        // Other
        "db", "sqlite3", "lock",
    ]
    .into_iter()
    .collect()
});

/// File names that are binary regardless of extension.
const BINARY_FILE_NAMES: &[&str] = &[".DS_Store"];

/// Why a file's text could not be loaded.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("unreadable: {0}")]
    Unreadable(#[from] io::Error),

    #[error("not valid UTF-8 at byte {valid_up_to}")]
    Undecodable { valid_up_to: usize },
}

/// True if the file name or extension marks the file as binary.
pub fn has_binary_extension(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if BINARY_FILE_NAMES.contains(&name) {
            return true;
        }
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| BINARY_EXTENSIONS.contains(ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// True if a leading byte window looks binary: a NUL byte, or bytes that do
/// not decode as UTF-8. A multi-byte character cut off by the end of the
/// window does not count against the file.
pub fn looks_binary(window: &[u8]) -> bool {
    if window.contains(&0) {
        return true;
    }
    match std::str::from_utf8(window) {
        Ok(_) => false,
        Err(err) => err.error_len().is_some(),
    }
}

/// Classify a file as binary by extension first, then by sniffing its head.
pub fn is_binary_file(path: &Path) -> io::Result<bool> {
    if has_binary_extension(path) {
        return Ok(true);
    }

    let file = File::open(path)?;
    let mut window = Vec::with_capacity(SNIFF_WINDOW_BYTES);
    file.take(SNIFF_WINDOW_BYTES as u64).read_to_end(&mut window)?;
    Ok(looks_binary(&window))
}

/// Read a whole file as UTF-8 text.
pub fn read_file_safe(path: &Path) -> Result<String, ReadError> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|err| ReadError::Undecodable { valid_up_to: err.utf8_error().valid_up_to() })
}
