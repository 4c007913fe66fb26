//! Desktop sidebar rail.
//!
//! Lists every catalog item in a collapsible column. Collapse state only
//! changes through the toggle button; while collapsed, labels give way to
//! hover tooltips.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_CREDIT;
use crate::models::NavigationItem;

stylance::import_crate_style!(css, "src/components/sidebar.module.css");

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let collapsed = Memo::new(move |_| ctx.sidebar.get().is_collapsed());
    let items = ctx.items();

    view! {
        <aside class=move || {
            if collapsed.get() {
                format!("{} {}", css::sidebar, css::collapsed)
            } else {
                css::sidebar.to_string()
            }
        }>
            <div class=css::top>
                <Show when=move || !collapsed.get()>
                    <span class=css::groupLabel>"Navigation"</span>
                </Show>
                <button
                    class=css::toggle
                    aria-label=move || if collapsed.get() { "Expand sidebar" } else { "Collapse sidebar" }
                    on:click=move |_| ctx.nav.update(|c| c.toggle_sidebar())
                >
                    {move || if collapsed.get() {
                        view! { <Icon icon=ic::CHEVRON_RIGHT /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::CHEVRON_LEFT /> }.into_any()
                    }}
                </button>
            </div>

            <ul class=css::list>
                {items
                    .into_iter()
                    .map(|item| view! { <SidebarItem item=item /> })
                    .collect_view()}
            </ul>

            <footer class=css::footer>
                {move || if collapsed.get() {
                    view! { <span class=css::dot></span> }.into_any()
                } else {
                    view! { <span>{APP_CREDIT}</span> }.into_any()
                }}
            </footer>
        </aside>
    }
}

#[component]
fn SidebarItem(item: NavigationItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let path = item.path.clone();
    let active = Memo::new(move |_| ctx.is_active(&path));
    let icon = ic::resolve(item.icon_ref);
    let aria_label = item.label.clone();
    let label = item.label.clone();
    let badge = item.badge.clone();
    let item = StoredValue::new(item);

    let tooltip = move || {
        let sidebar = ctx.sidebar.get();
        item.with_value(|item| sidebar.tooltip(item))
    };

    view! {
        <li>
            <button
                class=move || {
                    if active.get() {
                        format!("{} {}", css::link, css::active)
                    } else {
                        css::link.to_string()
                    }
                }
                title=tooltip
                aria-label=aria_label
                aria-current=move || active.get().then_some("page")
                on:click=move |_| item.with_value(|item| ctx.select(item))
            >
                <span class=css::icon><Icon icon=icon /></span>
                <Show when=move || ctx.sidebar.get().shows_labels()>
                    <span class=css::label>{label.clone()}</span>
                    {badge.clone().map(|badge| view! { <span class=css::badge>{badge}</span> })}
                </Show>
            </button>
        </li>
    }
}
