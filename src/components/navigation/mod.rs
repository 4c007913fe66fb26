//! Global navigation.
//!
//! [`Navigation`] is the view-side composition root: it wires the window
//! subscriptions into the controller exactly once, mounts either the
//! floating nav or the mobile drawer (never both) and shows the breadcrumb
//! bar below the header.
//!
//! - [`floating_nav`] - Desktop floating control cluster
//! - [`mobile_drawer`] - Off-canvas panel for mobile/touch viewports
//! - [`breadcrumb_nav`] - Collapsible breadcrumb bar
//! - [`hooks`] - Scroll, viewport and keyboard subscriptions

pub mod breadcrumb_nav;
pub mod floating_nav;
pub mod hooks;
pub mod mobile_drawer;

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::config::{DARK_SCHEME_QUERY, REDUCED_MOTION_QUERY};
use crate::models::PrimarySurface;

pub use breadcrumb_nav::BreadcrumbNav;
pub use floating_nav::FloatingNav;
pub use mobile_drawer::MobileDrawer;

stylance::import_crate_style!(css, "src/components/navigation/navigation.module.css");

/// Presentation preferences consumed from the environment.
#[derive(Clone, Copy)]
pub struct ChromeTheme {
    /// Dark color scheme preferred (icon tint)
    pub dark: Signal<bool>,
    /// Transitions disabled
    pub reduced_motion: Signal<bool>,
}

impl ChromeTheme {
    /// Extra class names for a navigation surface root.
    pub fn classes(&self) -> String {
        let mut classes = Vec::new();
        if self.dark.get() {
            classes.push(css::tintDark);
        }
        if self.reduced_motion.get() {
            classes.push(css::noMotion);
        }
        classes.join(" ")
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    hooks::use_viewport_tracking(ctx);
    hooks::use_scroll_tracking(ctx);
    hooks::use_keyboard_shortcuts(ctx);

    provide_context(ChromeTheme {
        dark: use_media_query(DARK_SCHEME_QUERY),
        reduced_motion: use_media_query(REDUCED_MOTION_QUERY),
    });

    let show_breadcrumbs = Memo::new(move |_| ctx.nav.with(|c| c.shows_breadcrumbs()));
    let elevated = Memo::new(move |_| ctx.scroll.get().scrolled_past_threshold);

    view! {
        <div class=css::navigation>
            {move || match ctx.surface.get() {
                PrimarySurface::FloatingNav => view! { <FloatingNav /> }.into_any(),
                PrimarySurface::MobileDrawer => view! { <MobileDrawer /> }.into_any(),
            }}

            <Show when=move || show_breadcrumbs.get()>
                <div class=css::breadcrumbSlot>
                    <BreadcrumbNav elevated=elevated />
                </div>
            </Show>
        </div>
    }
}
