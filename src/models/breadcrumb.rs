//! Breadcrumb trail types.

use super::IconRef;

/// One link in the path-ancestry trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbEntry {
    /// Accumulated sub-path this crumb points to
    pub path: String,
    pub label: String,
    pub icon_ref: IconRef,
    pub badge: Option<String>,
    /// Synthetic crumb that must not render as a link
    pub disabled: bool,
}

impl BreadcrumbEntry {
    pub fn new(path: impl Into<String>, label: impl Into<String>, icon_ref: IconRef) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            icon_ref,
            badge: None,
            disabled: false,
        }
    }
}

/// Breadcrumbs split by the overflow collapsing policy.
///
/// Both halves keep the original trail order. When `collapsed` is non-empty
/// it sits between `visible[0]` and `visible[1]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollapsedCrumbs {
    pub visible: Vec<BreadcrumbEntry>,
    pub collapsed: Vec<BreadcrumbEntry>,
}

impl CollapsedCrumbs {
    /// Whether an overflow affordance must be rendered.
    pub fn has_overflow(&self) -> bool {
        !self.collapsed.is_empty()
    }
}
