//! Core navigation logic, independent of the view layer.
//!
//! - [`controller`] - Composition root ([`NavigationController`], [`NavIntent`])
//! - [`breadcrumbs`] - Trail construction and overflow collapsing
//! - [`scroll`], [`viewport`] - Environment-derived signals
//! - [`floating`], [`drawer`], [`sidebar`] - Per-surface state machines
//! - [`active`] - Active-item rule shared by all surfaces
//! - [`shortcuts`] - Global keyboard shortcut matching
//! - [`env`] - Environment provider seam and intent execution
//! - [`catalog`] - Static navigation data

pub mod active;
pub mod breadcrumbs;
pub mod catalog;
pub mod controller;
pub mod drawer;
pub mod env;
pub mod error;
pub mod floating;
pub mod scroll;
pub mod shortcuts;
pub mod sidebar;
pub mod viewport;

pub use catalog::NavCatalog;
pub use controller::{NavIntent, NavigationController};
pub use scroll::ScrollThresholds;
pub use shortcuts::{KeyInput, Shortcut};
