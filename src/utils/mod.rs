//! Utility modules for browser access and logging.
//!
//! Provides:
//! - [`BrowserEnvironment`] - Production [`crate::core::env::Environment`] over `web_sys`
//! - [`dom`] - Window, history and document helpers
//! - [`logging`] - `tracing` subscriber writing to the browser console

pub mod dom;
pub mod logging;

pub use dom::BrowserEnvironment;
