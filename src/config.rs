//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Static navigation data is loaded at compile time using `include_str!`.

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Navigation catalog, breadcrumb segment table, social links and page titles.
pub const NAVIGATION_TOML: &str = include_str!("../assets/navigation.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name shown in the header and document title.
pub const APP_NAME: &str = "MyPortfolio";

/// Sidebar footer text.
pub const APP_CREDIT: &str = "Built By Shreyansh";

/// DOM element id the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Viewport Configuration
// =============================================================================

/// Viewport classification.
pub mod viewport {
    /// Widths strictly below this are classified as mobile.
    pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
    /// Quiet period after the last resize event before re-classifying.
    pub const RESIZE_SETTLE_MS: u64 = 150;
    /// Media query reporting a coarse (touch) primary pointer.
    pub const TOUCH_MEDIA_QUERY: &str = "(pointer: coarse)";
}

// =============================================================================
// Scroll Configuration
// =============================================================================

/// Scroll tracking thresholds (pixels).
pub mod scroll {
    /// Offset past which navigation chrome switches to its elevated style.
    pub const SCROLLED_THRESHOLD: f64 = 20.0;
    /// Offset past which the floating nav may hide while scrolling down.
    pub const HIDE_THRESHOLD: f64 = 150.0;
    /// Offset past which the scroll-to-top button is shown.
    pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
    /// Scroll deltas within +/- this range never flip the direction.
    pub const DIRECTION_DEAD_ZONE: f64 = 5.0;
}

// =============================================================================
// Breadcrumb Configuration
// =============================================================================

/// Breadcrumb bar configuration.
pub mod breadcrumbs {
    /// Default number of crumbs shown before collapsing into the overflow menu.
    pub const DEFAULT_MAX_VISIBLE: usize = 4;
    /// Path of the root crumb.
    pub const ROOT_PATH: &str = "/";
    /// Label of the root crumb.
    pub const ROOT_LABEL: &str = "Home";
}

// =============================================================================
// Logging Configuration
// =============================================================================

/// Maximum level emitted to the browser console.
#[cfg(debug_assertions)]
pub const LOG_LEVEL: tracing::Level = tracing::Level::DEBUG;

/// Maximum level emitted to the browser console.
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: tracing::Level = tracing::Level::INFO;

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query for the user's preferred dark color scheme (icon tint).
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Media query for the user's reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder
/// - `Lucide` - Minimal, thin strokes (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
