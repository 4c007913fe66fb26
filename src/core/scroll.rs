//! Scroll tracking.
//!
//! [`ScrollTracker`] is a synchronous reducer over offset samples;
//! [`FrameGate`] coalesces raw scroll events so at most one sample is taken
//! per rendering frame.

use crate::config::scroll::{
    BACK_TO_TOP_THRESHOLD, DIRECTION_DEAD_ZONE, HIDE_THRESHOLD, SCROLLED_THRESHOLD,
};
use crate::models::ScrollSignal;

/// Pixel thresholds used by the tracker and the floating nav.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub scrolled: f64,
    pub hide: f64,
    pub back_to_top: f64,
    pub dead_zone: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            scrolled: SCROLLED_THRESHOLD,
            hide: HIDE_THRESHOLD,
            back_to_top: BACK_TO_TOP_THRESHOLD,
            dead_zone: DIRECTION_DEAD_ZONE,
        }
    }
}

/// Derives [`ScrollSignal`]s from successive offset samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    thresholds: ScrollThresholds,
    previous_offset: f64,
    signal: ScrollSignal,
}

impl ScrollTracker {
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            thresholds,
            previous_offset: 0.0,
            signal: ScrollSignal::default(),
        }
    }

    /// Latest derived signal.
    pub fn signal(&self) -> ScrollSignal {
        self.signal
    }

    /// Fold one offset sample into the signal.
    ///
    /// Direction only flips when the delta leaves the dead-zone; deltas of
    /// exactly the dead-zone size keep the previous direction. Non-finite
    /// samples are treated as offset 0.
    pub fn sample(&mut self, offset: f64) -> ScrollSignal {
        let offset = finite_or_zero(offset);
        let delta = offset - self.previous_offset;

        self.place(offset);
        if delta > self.thresholds.dead_zone {
            self.signal.scrolling_down = true;
        } else if delta < -self.thresholds.dead_zone {
            self.signal.scrolling_down = false;
        }

        self.previous_offset = offset;
        self.signal
    }

    /// Take a baseline reading without inferring a direction.
    ///
    /// For the offset already present at mount (restored or anchored
    /// scroll); the next [`ScrollTracker::sample`] measures from here.
    pub fn seed(&mut self, offset: f64) -> ScrollSignal {
        let offset = finite_or_zero(offset);
        self.place(offset);
        self.previous_offset = offset;
        self.signal
    }

    fn place(&mut self, offset: f64) {
        self.signal.offset = offset;
        self.signal.scrolled_past_threshold = offset > self.thresholds.scrolled;
        self.signal.show_back_to_top = offset > self.thresholds.back_to_top;
    }
}

fn finite_or_zero(offset: f64) -> f64 {
    if offset.is_finite() { offset } else { 0.0 }
}

/// One-pending-frame latch for coalescing bursts of events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` if the caller should schedule a frame callback;
    /// `false` when one is already pending.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Called from the frame callback (or on cancellation).
    pub fn complete(&mut self) {
        self.pending = false;
    }

}

#[cfg(test)]
impl FrameGate {
    fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(ScrollThresholds::default())
    }

    #[test]
    fn test_thresholds() {
        let mut t = tracker();
        let s = t.sample(20.0);
        assert!(!s.scrolled_past_threshold);
        let s = t.sample(21.0);
        assert!(s.scrolled_past_threshold);
        assert!(!s.show_back_to_top);
        let s = t.sample(300.0);
        assert!(!s.show_back_to_top);
        let s = t.sample(301.0);
        assert!(s.show_back_to_top);
        assert_eq!(s.offset, 301.0);
    }

    #[test]
    fn test_dead_zone_jitter() {
        let mut t = tracker();
        let mut seen = Vec::new();
        for offset in [0.0, 3.0, 6.0, 2.0] {
            seen.push(t.sample(offset).scrolling_down);
        }
        assert_eq!(seen, vec![false, false, false, false]);

        // delta 8 leaves the dead-zone
        assert!(t.sample(10.0).scrolling_down);
    }

    #[test]
    fn test_dead_zone_boundary() {
        let mut t = tracker();
        assert!(!t.sample(5.0).scrolling_down);
        assert!(t.sample(11.0).scrolling_down);
        // exactly -5 does not flip
        assert!(t.sample(6.0).scrolling_down);
        // small jitter keeps direction
        assert!(t.sample(3.0).scrolling_down);
        assert!(!t.sample(-3.0).scrolling_down);
    }

    #[test]
    fn test_scrolling_up_flips() {
        let mut t = tracker();
        t.sample(500.0);
        assert!(t.signal().scrolling_down);
        assert!(!t.sample(400.0).scrolling_down);
    }

    #[test]
    fn test_non_finite_sample() {
        let mut t = tracker();
        t.sample(400.0);
        let s = t.sample(f64::NAN);
        assert_eq!(s.offset, 0.0);
        assert!(!s.scrolling_down);
    }

    #[test]
    fn test_seed_keeps_direction() {
        let mut t = tracker();
        let s = t.seed(800.0);
        assert_eq!(s.offset, 800.0);
        assert!(s.scrolled_past_threshold);
        assert!(s.show_back_to_top);
        assert!(!s.scrolling_down);

        // next delta is measured from the seeded offset
        assert!(!t.sample(803.0).scrolling_down);
        assert!(t.sample(820.0).scrolling_down);
    }

    #[test]
    fn test_frame_gate() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());
        gate.complete();
        assert!(gate.request());
    }
}
