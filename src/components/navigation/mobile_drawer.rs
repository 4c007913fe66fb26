//! Mobile drawer.
//!
//! Trigger button plus an off-canvas panel listing every catalog item and
//! the social links. Selecting an item closes the panel before navigating.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::navigation::ChromeTheme;
use crate::models::NavigationItem;

stylance::import_crate_style!(css, "src/components/navigation/mobile_drawer.module.css");

#[component]
pub fn MobileDrawer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let theme = use_context::<ChromeTheme>().expect("ChromeTheme must be provided");

    let toggle = move |_| ctx.nav.update(|c| c.toggle_drawer());
    let close = move |_| ctx.nav.update(|c| c.set_drawer_open(false));

    let items = ctx.items();
    let social = ctx.social();

    view! {
        <div class=move || format!("{} {}", css::drawer, theme.classes())>
            <button
                class=css::trigger
                aria-label=move || if ctx.drawer_open.get() { "Close navigation" } else { "Open navigation" }
                aria-expanded=move || ctx.drawer_open.get().to_string()
                on:click=toggle
            >
                {move || if ctx.drawer_open.get() {
                    view! { <Icon icon=ic::CLOSE /> }.into_any()
                } else {
                    view! { <Icon icon=ic::MENU /> }.into_any()
                }}
            </button>

            <Show when=move || ctx.drawer_open.get()>
                <div class=css::backdrop on:click=close></div>
            </Show>

            <aside
                class=move || {
                    if ctx.drawer_open.get() {
                        format!("{} {}", css::panel, css::open)
                    } else {
                        css::panel.to_string()
                    }
                }
                aria-hidden=move || (!ctx.drawer_open.get()).to_string()
            >
                <header class=css::panelHeader>
                    <h2 class=css::panelTitle>"Navigation"</h2>
                    <p class=css::panelSubtitle>"Explore my portfolio sections"</p>
                </header>

                <ul class=css::list>
                    {items
                        .into_iter()
                        .map(|item| view! { <DrawerItem item=item /> })
                        .collect_view()}
                </ul>

                <ul class=css::socialRow>
                    {social
                        .into_iter()
                        .map(|item| view! { <DrawerItem item=item /> })
                        .collect_view()}
                </ul>

                <footer class=css::panelFooter>"Built with passion & precision"</footer>
            </aside>
        </div>
    }
}

#[component]
fn DrawerItem(item: NavigationItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let path = item.path.clone();
    let external = item.external;
    let active = Memo::new(move |_| !external && ctx.is_active(&path));
    let icon = ic::resolve(item.icon_ref);
    let label = item.label.clone();
    let description = item.description.clone();
    let badge = item.badge.clone();
    let item = StoredValue::new(item);

    view! {
        <li class=css::entry>
            <button
                class=move || {
                    if active.get() {
                        format!("{} {}", css::link, css::active)
                    } else {
                        css::link.to_string()
                    }
                }
                aria-current=move || active.get().then_some("page")
                on:click=move |_| item.with_value(|item| ctx.select(item))
            >
                <span class=css::icon><Icon icon=icon /></span>
                <span class=css::text>
                    <span class=css::label>
                        {label}
                        {external.then(|| view! {
                            <span class=css::externalMark><Icon icon=ic::EXTERNAL_LINK /></span>
                        })}
                    </span>
                    {description.map(|text| view! { <span class=css::description>{text}</span> })}
                </span>
                {badge.map(|badge| view! { <span class=css::badge>{badge}</span> })}
                <Show when=move || active.get()>
                    <span class=css::indicator></span>
                </Show>
            </button>
        </li>
    }
}
