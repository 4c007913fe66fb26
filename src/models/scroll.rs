//! Scroll-derived signals.

/// Snapshot of the document's vertical scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSignal {
    /// Vertical scroll offset in pixels
    pub offset: f64,
    /// Chrome switches to its elevated style
    pub scrolled_past_threshold: bool,
    /// Last committed direction, outside the dead-zone
    pub scrolling_down: bool,
    /// Scroll-to-top affordance is offered
    pub show_back_to_top: bool,
}
