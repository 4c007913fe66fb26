//! Application router component.
//!
//! Path-based routing over the History API without leptos_router.
//!
//! # Architecture
//!
//! - **URL pathname is the source of truth**: the route is read from
//!   `location.pathname` and published into [`AppContext`]
//! - **Single writer**: only `popstate` (here) and [`AppContext::dispatch`]
//!   publish routes; every component just reads
//! - **Layout never re-renders on navigation**: header, navigation and
//!   sidebar stay mounted, only the page outlet follows the route

use leptos::ev;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::header::Header;
use crate::components::page::PageOutlet;
use crate::components::sidebar::Sidebar;
use crate::config::APP_NAME;
use crate::core::env::Environment;
use crate::models::{AppRoute, PrimarySurface};
use crate::utils::BrowserEnvironment;
use crate::utils::dom::set_document_title;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// Listens for `popstate` (browser back/forward, `history.back()`) and keeps
/// `document.title` in sync with the route.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let popstate = window_event_listener(ev::popstate, move |_| {
        let path = BrowserEnvironment.current_path().unwrap_or_default();
        ctx.publish_route(AppRoute::parse(&path));
    });
    on_cleanup(move || popstate.remove());

    Effect::new(move |_| {
        let route = ctx.route.get();
        let title = ctx.nav.with_untracked(|c| c.catalog().page_title(&route));
        set_document_title(&format!("{} | {}", title, APP_NAME));
        tracing::debug!(path = %route, "route changed");
    });

    view! {
        <div class=css::layout>
            // Sidebar rail only exists alongside the desktop surface
            <Show when=move || ctx.surface.get() == PrimarySurface::FloatingNav>
                <Sidebar />
            </Show>
            <div class=css::column>
                <Header />
                <main class=css::main>
                    <PageOutlet />
                </main>
            </div>
        </div>
    }
}
