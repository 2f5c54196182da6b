//! Directory tree rendering for the layout block

use std::collections::BTreeMap;

/// Placeholder shown under the root when nothing was retained.
pub const EMPTY_TREE_NOTE: &str = "(No files included)";

#[derive(Debug, Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    // Only file paths are inserted, so any node with children is a directory.
    fn is_dir(&self) -> bool {
        !self.children.is_empty()
    }

    fn insert(&mut self, path: &str) {
        let mut node = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = node.children.entry(segment.to_string()).or_default();
        }
    }
}

/// Render retained file paths as a `tree`-style listing.
///
/// The first line is `<root_name>/`. Within each directory, subdirectories come
/// before files and each group is sorted case-insensitively. The result has no
/// trailing newline.
pub fn generate_tree<P: AsRef<str>>(root_name: &str, paths: &[P]) -> String {
    if paths.is_empty() {
        return format!("{root_name}/\n{EMPTY_TREE_NOTE}");
    }

    let mut root = TreeNode::default();
    for path in paths {
        root.insert(path.as_ref());
    }

    let mut out = format!("{root_name}/");
    render_children(&root, "", &mut out);
    out
}

fn render_children(node: &TreeNode, prefix: &str, out: &mut String) {
    let mut entries: Vec<(&String, &TreeNode)> = node.children.iter().collect();
    entries.sort_by(|(a, a_node), (b, b_node)| {
        b_node
            .is_dir()
            .cmp(&a_node.is_dir())
            .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
            .then_with(|| a.cmp(b))
    });

    let count = entries.len();
    for (idx, (name, child)) in entries.into_iter().enumerate() {
        let is_last = idx + 1 == count;
        out.push('\n');
        out.push_str(prefix);
        out.push_str(if is_last { "└── " } else { "├── " });
        out.push_str(name);
        if child.is_dir() {
            let guide = if is_last { "    " } else { "│   " };
            render_children(child, &format!("{prefix}{guide}"), out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_tree_with_dirs_first() {
        let paths = ["README.md", "src/main.rs", "src/cli/mod.rs", "Cargo.toml", "docs/guide.md"];
        let tree = generate_tree("project", &paths);
        let expected = "\
project/
├── docs
│   └── guide.md
├── src
│   ├── cli
│   │   └── mod.rs
│   └── main.rs
├── Cargo.toml
└── README.md";
        assert_eq!(tree, expected);
    }

    #[test]
    fn sorting_ignores_case() {
        let tree = generate_tree("r", &["b.txt", "A.txt", "c.txt"]);
        assert_eq!(tree, "r/\n├── A.txt\n├── b.txt\n└── c.txt");
    }

    #[test]
    fn last_directory_uses_blank_guide() {
        let tree = generate_tree("r", &["a.txt", "z/y/x.txt"]);
        assert_eq!(tree, "r/\n├── z\n│   └── y\n│       └── x.txt\n└── a.txt");
    }

    #[test]
    fn empty_tree_has_placeholder() {
        let tree = generate_tree::<&str>("empty", &[]);
        assert_eq!(tree, "empty/\n(No files included)");
    }
}
