//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Every accessor degrades to a neutral default outside a browser.

use wasm_bindgen::JsValue;
use web_sys::{History, ScrollBehavior, ScrollToOptions, Window};

use crate::core::env::Environment;
use crate::core::error::NavError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the session history object.
fn history() -> Result<History, NavError> {
    window()
        .ok_or(NavError::NoWindow)?
        .history()
        .map_err(|_| NavError::HistoryUnavailable)
}

/// Set `document.title`.
pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// =============================================================================
// Browser Environment
// =============================================================================

/// [`Environment`] backed by the real browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserEnvironment;

impl Environment for BrowserEnvironment {
    fn viewport_width(&self) -> Option<f64> {
        window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
    }

    fn is_touch_capable(&self) -> bool {
        let Some(window) = window() else {
            return false;
        };
        window.navigator().max_touch_points() > 0
            || js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
    }

    fn scroll_offset(&self) -> f64 {
        window()
            .and_then(|w| w.scroll_y().ok())
            .filter(|y| y.is_finite())
            .unwrap_or(0.0)
    }

    fn current_path(&self) -> Option<String> {
        window().and_then(|w| w.location().pathname().ok())
    }

    fn history_length(&self) -> u32 {
        history()
            .ok()
            .and_then(|h| h.length().ok())
            .unwrap_or(1)
            .max(1)
    }

    fn push_path(&self, path: &str) -> Result<(), NavError> {
        history()?
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .map_err(|e| NavError::PushStateFailed(js_message(e)))
    }

    fn go_back(&self) -> Result<(), NavError> {
        history()?
            .back()
            .map_err(|_| NavError::HistoryUnavailable)
    }

    fn open_external(&self, url: &str) -> Result<(), NavError> {
        window()
            .ok_or(NavError::NoWindow)?
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map(|_| ())
            .map_err(|e| NavError::OpenFailed(js_message(e)))
    }

    fn scroll_to_top(&self) {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_window_metrics() {
        let env = BrowserEnvironment;
        assert!(env.viewport_width().is_some_and(|w| w > 0.0));
        assert!(env.history_length() >= 1);
        assert!(env.scroll_offset() >= 0.0);
    }

    #[wasm_bindgen_test]
    fn test_push_path_updates_location() {
        let env = BrowserEnvironment;
        let before = env.history_length();
        env.push_path("/projects").unwrap();
        assert_eq!(env.current_path().as_deref(), Some("/projects"));
        assert_eq!(env.history_length(), before + 1);
    }

    #[wasm_bindgen_test]
    fn test_document_title() {
        set_document_title("Projects | MyPortfolio");
        let title = window().and_then(|w| w.document()).map(|d| d.title());
        assert_eq!(title.as_deref(), Some("Projects | MyPortfolio"));
    }
}
