//! Viewport classification.

use crate::config::viewport::MOBILE_BREAKPOINT_PX;
use crate::models::ViewportClass;

/// Classify a viewport. Narrow width or touch capability each force mobile.
pub fn classify(width: f64, is_touch_capable: bool) -> ViewportClass {
    if width < MOBILE_BREAKPOINT_PX || is_touch_capable {
        ViewportClass::Mobile
    } else {
        ViewportClass::Desktop
    }
}

/// Classify from optional environment signals.
///
/// A missing width (non-browser context) counts as desktop unless touch
/// capability says otherwise.
pub fn classify_env(width: Option<f64>, is_touch_capable: bool) -> ViewportClass {
    match width {
        Some(width) if width.is_finite() => classify(width, is_touch_capable),
        _ if is_touch_capable => ViewportClass::Mobile,
        _ => ViewportClass::Desktop,
    }
}

/// Holds the last committed viewport class.
///
/// Resize bursts are settled by the caller; `commit` only reports real
/// class changes so downstream surfaces are not remounted needlessly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportTracker {
    current: ViewportClass,
}

impl ViewportTracker {
    pub fn new(initial: ViewportClass) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> ViewportClass {
        self.current
    }

    /// Commit a settled measurement. Returns the new class if it changed.
    pub fn commit(&mut self, width: Option<f64>, is_touch_capable: bool) -> Option<ViewportClass> {
        let next = classify_env(width, is_touch_capable);
        if next == self.current {
            return None;
        }
        tracing::debug!(from = ?self.current, to = ?next, "viewport class changed");
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(500.0, false), ViewportClass::Mobile);
        assert_eq!(classify(1024.0, false), ViewportClass::Desktop);
        assert_eq!(classify(1024.0, true), ViewportClass::Mobile);
        assert_eq!(classify(767.9, false), ViewportClass::Mobile);
        assert_eq!(classify(768.0, false), ViewportClass::Desktop);
    }

    #[test]
    fn test_classify_missing_environment() {
        assert_eq!(classify_env(None, false), ViewportClass::Desktop);
        assert_eq!(classify_env(None, true), ViewportClass::Mobile);
        assert_eq!(classify_env(Some(f64::NAN), false), ViewportClass::Desktop);
        assert_eq!(classify_env(Some(320.0), false), ViewportClass::Mobile);
    }

    #[test]
    fn test_tracker_reports_changes_only() {
        let mut tracker = ViewportTracker::default();
        assert_eq!(tracker.current(), ViewportClass::Desktop);
        assert_eq!(tracker.commit(Some(1200.0), false), None);
        assert_eq!(tracker.commit(Some(600.0), false), Some(ViewportClass::Mobile));
        assert_eq!(tracker.commit(Some(500.0), false), None);
        assert_eq!(tracker.commit(Some(900.0), false), Some(ViewportClass::Desktop));
        assert_eq!(tracker.current(), ViewportClass::Desktop);
    }
}
