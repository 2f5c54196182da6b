//! repo2scroll: concatenate a project's text files into one annotated scroll
//!
//! The pipeline combines `.gitignore`-style rules, a custom ignore file and
//! ad-hoc excludes into one filter, walks the project, drops binary files, and
//! renders what is left as a `<layout>` tree followed by `<file>` blocks.

pub mod bundle;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod scan;
pub mod utils;

pub use bundle::{build_scroll, build_scroll_with_stats, bundle_project, BundleOptions};
pub use domain::{FileEntry, ProjectPath, RuleOrigin, ScanStats};
pub use error::ScrollError;
pub use render::{write_scroll, FileBlock, ScrollDocument};
pub use scan::{IgnoreRuleSet, IgnoreRulesBuilder};
