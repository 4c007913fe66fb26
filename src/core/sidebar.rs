//! Sidebar collapse state.

use crate::models::NavigationItem;

/// Session-only collapse state of the desktop rail.
///
/// Changed only by explicit user action, never by scroll or route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    collapsed: bool,
}

impl SidebarState {
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Inline labels are rendered only while expanded.
    pub fn shows_labels(&self) -> bool {
        !self.collapsed
    }

    /// Hover tooltip for an item; present only while collapsed so label and
    /// badge stay discoverable.
    pub fn tooltip(&self, item: &NavigationItem) -> Option<String> {
        self.collapsed.then(|| item.tooltip())
    }
}
