//! Floating nav visibility state machine.
//!
//! Logical visibility only; enter/leave transitions live in the component.

use crate::core::scroll::ScrollThresholds;
use crate::models::ScrollSignal;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingNavState {
    visible: bool,
    hovered: bool,
    hide_suppressed: bool,
    hide_threshold: f64,
}

impl FloatingNavState {
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            visible: true,
            hovered: false,
            hide_suppressed: false,
            hide_threshold: thresholds.hide,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Re-evaluate after a scroll sample.
    ///
    /// Hidden iff scrolling down past the hide threshold while not hovered
    /// and hide-on-scroll is not suppressed.
    pub fn on_scroll(&mut self, signal: ScrollSignal) {
        self.visible = !(signal.scrolling_down
            && signal.offset > self.hide_threshold
            && !self.hovered
            && !self.hide_suppressed);
    }

    /// Pointer entered or left the cluster. Entering always shows it.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        if hovered {
            self.visible = true;
        }
    }

    /// Any resize recovers a hidden nav.
    pub fn on_resize(&mut self) {
        self.visible = true;
    }

    /// Manual toggle (`Escape`), independent of scroll state.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// While suppressed (drawer open), scrolling never hides the nav.
    pub fn set_hide_suppressed(&mut self, suppressed: bool) {
        self.hide_suppressed = suppressed;
        if suppressed {
            self.visible = true;
        }
    }
}

impl Default for FloatingNavState {
    fn default() -> Self {
        Self::new(ScrollThresholds::default())
    }
}
