//! Environment provider.
//!
//! Pure navigation logic never touches browser globals. Window metrics,
//! history and outbound links are reached through [`Environment`]; the
//! browser implementation lives in `utils::dom`, tests use
//! [`FakeEnvironment`].

use crate::core::controller::NavIntent;
use crate::core::error::NavError;
use crate::models::AppRoute;

pub trait Environment {
    /// `window.innerWidth`, `None` outside a browser.
    fn viewport_width(&self) -> Option<f64>;

    /// Touch input available.
    fn is_touch_capable(&self) -> bool;

    /// Vertical document scroll offset, `0` when unavailable.
    fn scroll_offset(&self) -> f64;

    /// Current URL pathname.
    fn current_path(&self) -> Option<String>;

    /// Session history length, at least `1`.
    fn history_length(&self) -> u32;

    /// Add a history entry for `path` without reloading.
    fn push_path(&self, path: &str) -> Result<(), NavError>;

    /// History back. Completion is signalled by a `popstate` event.
    fn go_back(&self) -> Result<(), NavError>;

    /// Open `url` in a new browsing context.
    fn open_external(&self, url: &str) -> Result<(), NavError>;

    /// Smooth-scroll the document to the top.
    fn scroll_to_top(&self);
}

/// Execute a navigation intent.
///
/// Returns the route the router must publish right away. `None` means no
/// synchronous route change: the target is external, the browser will
/// report the change through `popstate`, or the attempt failed (logged).
pub fn perform(env: &impl Environment, intent: &NavIntent) -> Option<AppRoute> {
    match intent {
        NavIntent::Navigate(path) => push(env, AppRoute::parse(path)),
        NavIntent::OpenExternal(url) => {
            if let Err(err) = env.open_external(url) {
                tracing::warn!(%err, url, "external navigation failed");
            }
            None
        }
        NavIntent::Back => {
            if env.history_length() <= 1 {
                return push(env, AppRoute::root());
            }
            match env.go_back() {
                Ok(()) => None,
                Err(err) => {
                    tracing::warn!(%err, "history back failed, going home");
                    push(env, AppRoute::root())
                }
            }
        }
    }
}

fn push(env: &impl Environment, route: AppRoute) -> Option<AppRoute> {
    if env.current_path().map(|p| AppRoute::parse(&p)) == Some(route.clone()) {
        return None;
    }
    match env.push_path(route.as_str()) {
        Ok(()) => Some(route),
        Err(err) => {
            tracing::warn!(%err, path = %route, "navigation failed");
            None
        }
    }
}

// ============================================================================
// Test double
// ============================================================================

#[cfg(test)]
pub use fake::FakeEnvironment;
