//! repo2scroll: turn a project directory into a single annotated text scroll
//!
//! The scroll starts with a directory tree of the bundled files, followed by
//! each text file's content wrapped in a `<file path="...">` block.

use anyhow::Result;

fn main() -> Result<()> {
    repo2scroll::cli::run()
}
