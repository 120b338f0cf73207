use crate::models::entry::Entry;

/// Ordered ancestor chain from the root down to `target_id`, both inclusive.
/// An id that does not resolve yields an empty trail; breadcrumb rendering
/// degrades silently instead of erroring.
pub fn breadcrumb_trail<'a>(root: &'a Entry, target_id: &str) -> Vec<&'a Entry> {
    let mut trail = Vec::new();
    if path_to(root, target_id, &mut trail) {
        trail
    } else {
        Vec::new()
    }
}

/// Depth-first path search; on success `trail` holds root..=target.
pub(crate) fn path_to<'a>(node: &'a Entry, target: &str, trail: &mut Vec<&'a Entry>) -> bool {
    trail.push(node);
    if node.id() == target {
        return true;
    }
    if let Some(folder) = node.as_folder() {
        for child in &folder.children {
            if path_to(child, target, trail) {
                return true;
            }
        }
    }
    trail.pop();
    false
}
