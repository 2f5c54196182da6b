//! Path normalization helpers

use std::path::{Component, Path};

/// Normalize a root-relative path to `/`-separated form.
///
/// `.` components are dropped and names are kept as they are, so a `\` inside
/// a Unix file name stays part of that name. Returns `None` when the path is
/// absolute or climbs out of the root with `..`.
pub fn normalize_path(path: &Path) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(parts.join("/"))
}
