//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::env::{Environment, perform};
use crate::core::sidebar::SidebarState;
use crate::core::viewport::classify_env;
use crate::core::{NavCatalog, NavIntent, NavigationController, ScrollThresholds};
use crate::models::{AppRoute, BreadcrumbEntry, NavigationItem, PrimarySurface, ScrollSignal};
use crate::utils::BrowserEnvironment;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// The whole navigation state lives in one [`NavigationController`] signal so
/// a route change updates breadcrumbs and drawer state in a single write.
/// Components read through the memos below, which only notify on change.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigation state. Written by the router (route) and by UI events.
    pub nav: RwSignal<NavigationController>,

    /// Current route.
    pub route: Memo<AppRoute>,
    /// Breadcrumb trail for the current route.
    pub breadcrumbs: Memo<Vec<BreadcrumbEntry>>,
    /// Mounted primary surface.
    pub surface: Memo<PrimarySurface>,
    /// Latest scroll signal.
    pub scroll: Memo<ScrollSignal>,
    /// Floating nav logical visibility.
    pub floating_visible: Memo<bool>,
    /// Mobile drawer open state.
    pub drawer_open: Memo<bool>,
    /// Sidebar collapse state.
    pub sidebar: Memo<SidebarState>,
}

impl AppContext {
    /// Creates the context from the embedded catalog and the environment's
    /// initial route and viewport.
    pub fn new(env: &impl Environment) -> Self {
        let catalog = Arc::new(NavCatalog::embedded());
        let route = env
            .current_path()
            .map(|p| AppRoute::parse(&p))
            .unwrap_or_default();
        let viewport = classify_env(env.viewport_width(), env.is_touch_capable());

        let nav = RwSignal::new(NavigationController::new(
            catalog,
            route,
            viewport,
            ScrollThresholds::default(),
        ));

        Self {
            nav,
            route: Memo::new(move |_| nav.with(|c| c.route().clone())),
            breadcrumbs: Memo::new(move |_| nav.with(|c| c.breadcrumbs().to_vec())),
            surface: Memo::new(move |_| nav.with(|c| c.active_surface())),
            scroll: Memo::new(move |_| nav.with(|c| c.scroll_signal())),
            floating_visible: Memo::new(move |_| nav.with(|c| c.floating_visible())),
            drawer_open: Memo::new(move |_| nav.with(|c| c.drawer_open())),
            sidebar: Memo::new(move |_| nav.with(|c| c.sidebar())),
        }
    }

    /// Publish a new route. Only the router and [`AppContext::dispatch`]
    /// call this.
    pub fn publish_route(&self, route: AppRoute) {
        self.nav.update(|c| {
            c.on_route_change(route);
        });
    }

    /// Execute a navigation intent against the browser.
    pub fn dispatch(&self, intent: NavIntent) {
        if let Some(route) = perform(&BrowserEnvironment, &intent) {
            self.publish_route(route);
        }
    }

    /// Activate a catalog item from any surface.
    pub fn select(&self, item: &NavigationItem) {
        if let Some(intent) = self.nav.try_update(|c| c.select_item(item)) {
            self.dispatch(intent);
        }
    }

    /// Active-item check against the current route (tracked).
    pub fn is_active(&self, item_path: &str) -> bool {
        self.route.track();
        self.nav.with_untracked(|c| c.is_active(item_path))
    }

    /// Catalog items in display order (untracked, static data).
    pub fn items(&self) -> Vec<NavigationItem> {
        self.nav.with_untracked(|c| c.catalog().items().to_vec())
    }

    /// Floating cluster items (untracked, static data).
    pub fn primary_items(&self) -> Vec<NavigationItem> {
        self.nav.with_untracked(|c| c.catalog().primary_items())
    }

    /// Social links (untracked, static data).
    pub fn social(&self) -> Vec<NavigationItem> {
        self.nav.with_untracked(|c| c.catalog().social().to_vec())
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(&BrowserEnvironment);
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #e5484d; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="opacity: 0.7; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="text-align: left; margin-bottom: 1rem;">
                            <summary style="cursor: pointer;">"Error details"</summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #e5484d;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="padding: 0.75rem 2rem; border-radius: 8px; cursor: pointer;"
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
