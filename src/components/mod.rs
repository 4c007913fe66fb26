//! UI components built with Leptos.
//!
//! - [`router`] - Application layout and History API routing (main entry point)
//! - [`header`] - Site header with logo and global navigation
//! - [`navigation`] - Floating nav, mobile drawer and breadcrumb bar
//! - [`sidebar`] - Collapsible desktop rail
//! - [`page`] - Page outlet for the current route
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod header;
pub mod icons;
pub mod navigation;
pub mod page;
pub mod router;
pub mod sidebar;

pub use router::AppRouter;
