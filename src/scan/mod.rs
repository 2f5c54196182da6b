//! File discovery: ignore rules, directory walking and tree rendering

pub mod rules;
pub mod scanner;
pub mod tree;

pub use rules::{build_ignore_rules, IgnoreRuleSet, IgnoreRulesBuilder, DEFAULT_IGNORE_PATTERNS};
pub use scanner::FileScanner;
pub use tree::generate_tree;
