use std::collections::BTreeSet;

use crate::models::entry::Entry;

use super::breadcrumbs::path_to;

/// Folder to show on initial load: the first folder directly under the root,
/// or the root itself when it has none.
pub fn default_folder_id(root: &Entry) -> String {
    root.children()
        .iter()
        .find(|child| child.is_folder())
        .map(|child| child.id().to_string())
        .unwrap_or_else(|| root.id().to_string())
}

/// Folder ids that must be expanded to make `target_id` visible in a tree
/// view: every ancestor, plus the target itself when it is a folder. Pure
/// derivation; the caller merges the result into its expansion set.
pub fn expansion_path(root: &Entry, target_id: &str) -> BTreeSet<String> {
    let mut trail = Vec::new();
    if !path_to(root, target_id, &mut trail) {
        return BTreeSet::new();
    }
    trail
        .into_iter()
        .filter(|node| node.is_folder())
        .map(|node| node.id().to_string())
        .collect()
}
