//! Desktop floating navigation cluster.
//!
//! A fixed pill of icon buttons that hides while scrolling down past the
//! hide threshold and reappears on scroll up, hover or resize.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::navigation::ChromeTheme;
use crate::core::env::Environment;
use crate::models::NavigationItem;
use crate::utils::BrowserEnvironment;

stylance::import_crate_style!(css, "src/components/navigation/floating_nav.module.css");

#[component]
pub fn FloatingNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let theme = use_context::<ChromeTheme>().expect("ChromeTheme must be provided");

    let class = move || {
        let mut class = format!("{} {}", css::floating, theme.classes());
        if ctx.floating_visible.get() {
            class.push(' ');
            class.push_str(css::visible);
        } else {
            class.push(' ');
            class.push_str(css::hidden);
        }
        if ctx.scroll.get().scrolled_past_threshold {
            class.push(' ');
            class.push_str(css::elevated);
        }
        class
    };

    let items = ctx.primary_items();
    let social = ctx.social();

    on_cleanup(move || {
        ctx.nav.try_update(|c| c.set_floating_hovered(false));
    });

    view! {
        <nav
            class=class
            aria-label="Primary"
            on:mouseenter=move |_| ctx.nav.update(|c| c.set_floating_hovered(true))
            on:mouseleave=move |_| ctx.nav.update(|c| c.set_floating_hovered(false))
        >
            <ul class=css::items>
                {items
                    .into_iter()
                    .map(|item| view! { <FloatingItem item=item /> })
                    .collect_view()}
            </ul>

            <span class=css::divider></span>

            <ul class=css::items>
                {social
                    .into_iter()
                    .map(|item| view! { <SocialLink item=item /> })
                    .collect_view()}
            </ul>

            <Show when=move || ctx.scroll.get().show_back_to_top>
                <button
                    class=format!("{} {}", css::button, css::backToTop)
                    title="Back to top"
                    aria-label="Back to top"
                    on:click=move |_| BrowserEnvironment.scroll_to_top()
                >
                    <Icon icon=ic::ARROW_UP />
                </button>
            </Show>
        </nav>
    }
}

#[component]
fn FloatingItem(item: NavigationItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let path = item.path.clone();
    let active = Memo::new(move |_| ctx.is_active(&path));
    let tooltip = item.tooltip();
    let label = item.label.clone();
    let badge = item.badge.clone();
    let icon = ic::resolve(item.icon_ref);
    let item = StoredValue::new(item);

    view! {
        <li>
            <button
                class=move || {
                    if active.get() {
                        format!("{} {}", css::button, css::active)
                    } else {
                        css::button.to_string()
                    }
                }
                title=tooltip
                aria-label=label
                aria-current=move || active.get().then_some("page")
                on:click=move |_| item.with_value(|item| ctx.select(item))
            >
                <Icon icon=icon />
                {badge.map(|badge| view! { <span class=css::badge>{badge}</span> })}
                <Show when=move || active.get()>
                    <span class=css::indicator></span>
                </Show>
            </button>
        </li>
    }
}

#[component]
fn SocialLink(item: NavigationItem) -> impl IntoView {
    let icon = ic::resolve(item.icon_ref);

    view! {
        <li>
            <a
                class=css::button
                href=item.path
                target="_blank"
                rel="noopener noreferrer"
                title=item.label.clone()
                aria-label=item.label
            >
                <Icon icon=icon />
            </a>
        </li>
    }
}
