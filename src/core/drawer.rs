//! Mobile drawer open/closed state machine.

/// Open state of the off-canvas drawer.
///
/// Keyed on route identity: [`DrawerState::on_route_change`] closes the
/// drawer whenever the path differs from the one it last saw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    is_open: bool,
    path: String,
}

impl DrawerState {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            is_open: false,
            path: path.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Trigger button.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Observe the current path. A different path always forces closed.
    ///
    /// Returns `true` if this observation closed an open drawer.
    pub fn on_route_change(&mut self, path: &str) -> bool {
        if self.path == path {
            return false;
        }
        self.path = path.to_string();
        let was_open = std::mem::replace(&mut self.is_open, false);
        if was_open {
            tracing::debug!(path, "drawer closed on navigation");
        }
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut drawer = DrawerState::new("/");
        assert!(!drawer.is_open());
        drawer.toggle();
        assert!(drawer.is_open());
        drawer.toggle();
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_route_change_always_closes() {
        for initially_open in [false, true] {
            let mut drawer = DrawerState::new("/");
            if initially_open {
                drawer.open();
            }
            let closed = drawer.on_route_change("/about");
            assert_eq!(closed, initially_open);
            assert!(!drawer.is_open());
        }
    }

    #[test]
    fn test_same_path_keeps_state() {
        let mut drawer = DrawerState::new("/about");
        drawer.open();
        assert!(!drawer.on_route_change("/about"));
        assert!(drawer.is_open());
    }
}
