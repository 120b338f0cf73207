use crate::models::entry::{Entry, Folder};

/// A resolved entry together with its derived parent. Parents are computed
/// by traversal rather than stored as back-pointers, so the tree can never
/// hold a cycle.
pub(crate) struct Match<'a> {
    pub node: &'a Entry,
    pub parent: Option<&'a Folder>,
}

/// Depth-first pre-order search from `root`, first id match wins.
/// O(n), fine for interactive trees.
pub(crate) fn find_with_parent<'a>(root: &'a Entry, target: &str) -> Option<Match<'a>> {
    fn walk<'a>(node: &'a Entry, target: &str, parent: Option<&'a Folder>) -> Option<Match<'a>> {
        if node.id() == target {
            return Some(Match { node, parent });
        }
        let folder = node.as_folder()?;
        for child in &folder.children {
            if let Some(found) = walk(child, target, Some(folder)) {
                return Some(found);
            }
        }
        None
    }
    walk(root, target, None)
}

/// Mutable counterpart of [`find_with_parent`], used by the mutation paths.
pub(crate) fn find_entry_mut<'a>(root: &'a mut Entry, target: &str) -> Option<&'a mut Entry> {
    if root.id() == target {
        return Some(root);
    }
    let folder = root.as_folder_mut()?;
    for child in &mut folder.children {
        if let Some(found) = find_entry_mut(child, target) {
            return Some(found);
        }
    }
    None
}

pub(crate) fn find_folder_mut<'a>(root: &'a mut Entry, target: &str) -> Option<&'a mut Folder> {
    find_entry_mut(root, target).and_then(Entry::as_folder_mut)
}

/// Case-insensitive, whitespace-trimmed name check among direct siblings.
/// `excluded_id` lets a rename skip the entry itself.
pub(crate) fn has_name_conflict(parent: &Folder, candidate: &str, excluded_id: Option<&str>) -> bool {
    let wanted = candidate.trim().to_lowercase();
    parent.children.iter().any(|child| {
        if excluded_id == Some(child.id()) {
            return false;
        }
        child.name().trim().to_lowercase() == wanted
    })
}
