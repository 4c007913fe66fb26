//! Navigation controller.
//!
//! Single composition root reconciling route, viewport, scroll, hover and
//! collapse state into one rendering decision. Pure state: browser effects
//! are returned as [`NavIntent`]s and executed by [`crate::core::env::perform`].

use std::sync::Arc;

use crate::core::active;
use crate::core::breadcrumbs;
use crate::core::catalog::NavCatalog;
use crate::core::drawer::DrawerState;
use crate::core::floating::FloatingNavState;
use crate::core::scroll::{ScrollThresholds, ScrollTracker};
use crate::core::shortcuts::Shortcut;
use crate::core::sidebar::SidebarState;
use crate::core::viewport::ViewportTracker;
use crate::models::{
    AppRoute, BreadcrumbEntry, NavigationItem, PrimarySurface, ScrollSignal, ViewportClass,
};

/// A navigation side effect requested by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavIntent {
    /// Navigate in place to an absolute route
    Navigate(String),
    /// Open an outbound link in a new browsing context
    OpenExternal(String),
    /// History back, falling back to `/` without history
    Back,
}

impl NavIntent {
    /// Intent for activating a catalog item.
    pub fn for_item(item: &NavigationItem) -> Self {
        if item.external {
            Self::OpenExternal(item.path.clone())
        } else {
            Self::Navigate(item.path.clone())
        }
    }
}

#[derive(Clone, Debug)]
pub struct NavigationController {
    catalog: Arc<NavCatalog>,
    route: AppRoute,
    breadcrumbs: Vec<BreadcrumbEntry>,
    viewport: ViewportTracker,
    scroll: ScrollTracker,
    floating: FloatingNavState,
    drawer: DrawerState,
    sidebar: SidebarState,
}

impl NavigationController {
    pub fn new(
        catalog: Arc<NavCatalog>,
        route: AppRoute,
        viewport: ViewportClass,
        thresholds: ScrollThresholds,
    ) -> Self {
        let breadcrumbs = breadcrumbs::build(route.as_str(), &catalog);
        let drawer = DrawerState::new(route.as_str());
        Self {
            catalog,
            route,
            breadcrumbs,
            viewport: ViewportTracker::new(viewport),
            scroll: ScrollTracker::new(thresholds),
            floating: FloatingNavState::new(thresholds),
            drawer,
            sidebar: SidebarState::default(),
        }
    }

    // ------------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------------

    pub fn catalog(&self) -> &NavCatalog {
        &self.catalog
    }

    pub fn route(&self) -> &AppRoute {
        &self.route
    }

    pub fn breadcrumbs(&self) -> &[BreadcrumbEntry] {
        &self.breadcrumbs
    }

    /// Breadcrumb bar is hidden on the homepage where it would be one crumb.
    pub fn shows_breadcrumbs(&self) -> bool {
        !(self.route.is_root() && self.breadcrumbs.len() <= 1)
    }

    /// The one primary surface mounted for the current viewport.
    pub fn active_surface(&self) -> PrimarySurface {
        self.viewport.current().primary_surface()
    }

    pub fn scroll_signal(&self) -> ScrollSignal {
        self.scroll.signal()
    }

    pub fn floating_visible(&self) -> bool {
        self.floating.is_visible()
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer.is_open()
    }

    pub fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    pub fn is_active(&self, item_path: &str) -> bool {
        active::is_active(item_path, self.route.as_str())
    }

    // ------------------------------------------------------------------------
    // Write side
    // ------------------------------------------------------------------------

    /// Apply a route change: fresh breadcrumbs, drawer forced closed.
    /// Sidebar and floating nav visibility are left untouched.
    ///
    /// Returns `false` when the route is unchanged.
    pub fn on_route_change(&mut self, route: AppRoute) -> bool {
        if route == self.route {
            return false;
        }
        self.breadcrumbs = breadcrumbs::build(route.as_str(), &self.catalog);
        self.drawer.on_route_change(route.as_str());
        self.floating.set_hide_suppressed(false);
        self.route = route;
        true
    }

    /// Fold a scroll sample, then let the floating nav react to it.
    pub fn on_scroll(&mut self, offset: f64) -> ScrollSignal {
        let signal = self.scroll.sample(offset);
        self.floating.on_scroll(signal);
        signal
    }

    /// Baseline scroll reading at mount. Direction and floating nav
    /// visibility are left as they are.
    pub fn seed_scroll(&mut self, offset: f64) -> ScrollSignal {
        self.scroll.seed(offset)
    }

    /// Raw resize event (before settling).
    pub fn on_resize(&mut self) {
        self.floating.on_resize();
    }

    /// Settled viewport measurement. Returns the new class if it changed.
    pub fn commit_viewport(&mut self, width: Option<f64>, touch: bool) -> Option<ViewportClass> {
        let changed = self.viewport.commit(width, touch)?;
        // The floating cluster unmounts or remounts without a mouseleave
        self.floating.set_hovered(false);
        if changed == ViewportClass::Desktop {
            self.set_drawer_open(false);
        }
        Some(changed)
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer.toggle();
        self.floating.set_hide_suppressed(self.drawer.is_open());
    }

    pub fn set_drawer_open(&mut self, open: bool) {
        if open {
            self.drawer.open();
        } else {
            self.drawer.close();
        }
        self.floating.set_hide_suppressed(open);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    pub fn set_floating_hovered(&mut self, hovered: bool) {
        self.floating.set_hovered(hovered);
    }

    /// Activate an item from any surface. The drawer closes first; the
    /// returned intent must still be performed.
    pub fn select_item(&mut self, item: &NavigationItem) -> NavIntent {
        self.set_drawer_open(false);
        NavIntent::for_item(item)
    }

    /// Dispatch a global shortcut. Out-of-range item indices are ignored.
    pub fn handle_shortcut(&mut self, shortcut: Shortcut) -> Option<NavIntent> {
        match shortcut {
            Shortcut::Home => Some(NavIntent::Navigate("/".to_string())),
            Shortcut::Back => Some(NavIntent::Back),
            Shortcut::Escape => {
                match self.active_surface() {
                    PrimarySurface::MobileDrawer => self.set_drawer_open(false),
                    PrimarySurface::FloatingNav => self.floating.toggle(),
                }
                None
            }
            Shortcut::Item(index) => {
                if self.active_surface() != PrimarySurface::FloatingNav {
                    return None;
                }
                self.catalog
                    .items_in(crate::models::NavCategory::Main)
                    .nth(index)
                    .map(NavIntent::for_item)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(path: &str, viewport: ViewportClass) -> NavigationController {
        NavigationController::new(
            Arc::new(NavCatalog::embedded()),
            AppRoute::parse(path),
            viewport,
            ScrollThresholds::default(),
        )
    }

    fn labels(ctrl: &NavigationController) -> Vec<&str> {
        ctrl.breadcrumbs().iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_mobile_route_change_scenario() {
        let mut ctrl = controller("/", ViewportClass::Mobile);
        ctrl.toggle_drawer();
        assert!(ctrl.drawer_open());
        assert!(!ctrl.shows_breadcrumbs());

        assert!(ctrl.on_route_change(AppRoute::parse("/about")));

        assert_eq!(labels(&ctrl), vec!["Home", "About"]);
        assert!(!ctrl.drawer_open());
        assert_eq!(ctrl.active_surface(), PrimarySurface::MobileDrawer);
        assert!(ctrl.shows_breadcrumbs());

        let active: Vec<&str> = ctrl
            .catalog()
            .items()
            .iter()
            .filter(|item| ctrl.is_active(&item.path))
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(active, vec!["About"]);
    }

    #[test]
    fn test_same_route_is_noop() {
        let mut ctrl = controller("/about", ViewportClass::Mobile);
        ctrl.toggle_drawer();
        assert!(!ctrl.on_route_change(AppRoute::parse("/about/")));
        assert!(ctrl.drawer_open());
    }

    #[test]
    fn test_route_change_leaves_sidebar_and_floating() {
        let mut ctrl = controller("/", ViewportClass::Desktop);
        ctrl.toggle_sidebar();
        ctrl.on_scroll(200.0);
        assert!(!ctrl.floating_visible());

        ctrl.on_route_change(AppRoute::parse("/blog"));
        assert!(ctrl.sidebar().is_collapsed());
        assert!(!ctrl.floating_visible());
    }

    #[test]
    fn test_is_active_follows_route() {
        let mut ctrl = controller("/projects/42", ViewportClass::Desktop);
        assert!(ctrl.is_active("/projects"));
        assert!(!ctrl.is_active("/"));

        ctrl.on_route_change(AppRoute::parse("/"));
        assert!(ctrl.is_active("/"));
        assert!(!ctrl.is_active("/projects"));
    }

    #[test]
    fn test_sidebar_state_ignores_scroll() {
        let mut ctrl = controller("/", ViewportClass::Desktop);
        ctrl.toggle_sidebar();
        let before = ctrl.sidebar();

        ctrl.on_scroll(300.0);
        ctrl.on_scroll(120.0);
        ctrl.on_resize();
        assert_eq!(ctrl.sidebar(), before);
        assert!(!ctrl.sidebar().shows_labels());
    }

    #[test]
    fn test_surface_follows_viewport() {
        let mut ctrl = controller("/", ViewportClass::Desktop);
        assert_eq!(ctrl.active_surface(), PrimarySurface::FloatingNav);
        assert_eq!(ctrl.commit_viewport(Some(500.0), false), Some(ViewportClass::Mobile));
        assert_eq!(ctrl.active_surface(), PrimarySurface::MobileDrawer);
        ctrl.toggle_drawer();
        assert_eq!(ctrl.commit_viewport(Some(1280.0), false), Some(ViewportClass::Desktop));
        assert!(!ctrl.drawer_open());
        assert_eq!(ctrl.commit_viewport(Some(1300.0), false), None);
    }

    #[test]
    fn test_scroll_drives_floating_nav() {
        let mut ctrl = controller("/", ViewportClass::Desktop);
        let signal = ctrl.on_scroll(400.0);
        assert!(signal.scrolling_down);
        assert!(signal.show_back_to_top);
        assert!(!ctrl.floating_visible());

        ctrl.set_floating_hovered(true);
        assert!(ctrl.floating_visible());
        ctrl.set_floating_hovered(false);

        ctrl.on_scroll(500.0);
        assert!(!ctrl.floating_visible());
        ctrl.on_resize();
        assert!(ctrl.floating_visible());
    }

    #[test]
    fn test_restored_scroll_keeps_nav_visible() {
        let mut ctrl = controller("/blog", ViewportClass::Desktop);
        let signal = ctrl.seed_scroll(800.0);
        assert!(!signal.scrolling_down);
        assert!(signal.show_back_to_top);
        assert!(ctrl.floating_visible());

        // real scrolling continues from the restored offset
        ctrl.on_scroll(1000.0);
        assert!(!ctrl.floating_visible());
    }

    #[test]
    fn test_viewport_flip_clears_hover() {
        let mut ctrl = controller("/", ViewportClass::Desktop);
        ctrl.set_floating_hovered(true);
        ctrl.commit_viewport(Some(500.0), false);
        ctrl.commit_viewport(Some(1280.0), false);

        ctrl.on_scroll(400.0);
        assert!(!ctrl.floating_visible());
    }

    #[test]
    fn test_unhandled_digits_yield_no_intent() {
        let mut desktop = controller("/", ViewportClass::Desktop);
        for index in 5..9 {
            assert_eq!(desktop.handle_shortcut(Shortcut::Item(index)), None);
        }

        let mut mobile = controller("/", ViewportClass::Mobile);
        for index in 0..9 {
            assert_eq!(mobile.handle_shortcut(Shortcut::Item(index)), None);
        }
    }

    #[test]
    fn test_open_drawer_suppresses_hide() {
        let mut ctrl = controller("/", ViewportClass::Desktop);
        ctrl.set_drawer_open(true);
        ctrl.on_scroll(500.0);
        assert!(ctrl.floating_visible());
    }

    #[test]
    fn test_shortcuts() {
        let mut ctrl = controller("/blog", ViewportClass::Desktop);
        assert_eq!(
            ctrl.handle_shortcut(Shortcut::Home),
            Some(NavIntent::Navigate("/".into()))
        );
        assert_eq!(ctrl.handle_shortcut(Shortcut::Back), Some(NavIntent::Back));
        assert_eq!(
            ctrl.handle_shortcut(Shortcut::Item(1)),
            Some(NavIntent::Navigate("/about".into()))
        );
        assert_eq!(ctrl.handle_shortcut(Shortcut::Item(8)), None);

        assert!(ctrl.floating_visible());
        assert_eq!(ctrl.handle_shortcut(Shortcut::Escape), None);
        assert!(!ctrl.floating_visible());
        ctrl.handle_shortcut(Shortcut::Escape);
        assert!(ctrl.floating_visible());
    }

    #[test]
    fn test_mobile_shortcuts() {
        let mut ctrl = controller("/blog", ViewportClass::Mobile);
        ctrl.toggle_drawer();
        ctrl.handle_shortcut(Shortcut::Escape);
        assert!(!ctrl.drawer_open());
        // floating nav is not mounted on mobile
        assert_eq!(ctrl.handle_shortcut(Shortcut::Item(0)), None);
    }

    #[test]
    fn test_select_item_closes_drawer() {
        let mut ctrl = controller("/", ViewportClass::Mobile);
        ctrl.toggle_drawer();
        let item = ctrl.catalog().items()[2].clone();
        assert_eq!(ctrl.select_item(&item), NavIntent::Navigate("/projects".into()));
        assert!(!ctrl.drawer_open());

        let social = ctrl.catalog().social()[0].clone();
        assert_eq!(
            ctrl.select_item(&social),
            NavIntent::OpenExternal("https://github.com".into())
        );
    }
}
