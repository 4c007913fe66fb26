//! Active-item rule shared by every navigation surface.

/// Whether a navigation target is active for the current path.
///
/// Exact match, or for non-root targets a prefix match on a whole segment:
/// `/projects` is active on `/projects/42` but not on `/projects-old`.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    if item_path == current_path {
        return true;
    }
    if item_path == "/" {
        return false;
    }
    current_path
        .strip_prefix(item_path)
        .is_some_and(|rest| rest.starts_with('/'))
}
