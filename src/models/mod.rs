//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`NavigationItem`], [`NavCategory`], [`IconRef`], [`SegmentMeta`] - Static navigation data
//! - [`BreadcrumbEntry`], [`CollapsedCrumbs`] - Derived breadcrumb trail
//! - [`ViewportClass`], [`PrimarySurface`] - Device class and surface selection
//! - [`ScrollSignal`] - Scroll-derived chrome signals
//! - [`AppRoute`] - Path-based navigation

mod breadcrumb;
mod navigation;
mod route;
mod scroll;
mod viewport;

pub use breadcrumb::{BreadcrumbEntry, CollapsedCrumbs};
pub use navigation::{IconRef, NavCategory, NavigationItem, SegmentMeta};
pub use route::AppRoute;
pub use scroll::ScrollSignal;
pub use viewport::{PrimarySurface, ViewportClass};
