//! Breadcrumb bar.
//!
//! Renders the current trail with back/home shortcuts. Long trails collapse
//! their middle crumbs into an overflow menu.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::breadcrumbs::{DEFAULT_MAX_VISIBLE, ROOT_PATH};
use crate::core::NavIntent;
use crate::core::breadcrumbs::collapse;
use crate::models::{BreadcrumbEntry, PrimarySurface};

stylance::import_crate_style!(css, "src/components/navigation/breadcrumb_nav.module.css");

/// Breadcrumb bar for the current route.
///
/// Crumb clicks go through `on_navigate` when given, otherwise straight to
/// the router. `on_back` likewise overrides the history-back default.
#[component]
pub fn BreadcrumbNav(
    #[prop(default = DEFAULT_MAX_VISIBLE)] max_visible: usize,
    #[prop(optional, into)] on_navigate: Option<Callback<String>>,
    #[prop(optional, into)] on_back: Option<Callback<()>>,
    #[prop(into)] elevated: Signal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let navigate = Callback::new(move |path: String| match on_navigate {
        Some(callback) => callback.run(path),
        None => ctx.dispatch(NavIntent::Navigate(path)),
    });
    let back = move |_| match on_back {
        Some(callback) => callback.run(()),
        None => ctx.dispatch(NavIntent::Back),
    };

    let crumbs = Memo::new(move |_| ctx.breadcrumbs.with(|trail| collapse(trail, max_visible)));
    let compact = Memo::new(move |_| ctx.surface.get() == PrimarySurface::MobileDrawer);
    let menu_open = RwSignal::new(false);

    // Overflow menu never outlives the trail it was opened for
    Effect::new(move |_| {
        ctx.route.track();
        menu_open.set(false);
    });

    view! {
        <nav
            class=move || {
                if elevated.get() {
                    format!("{} {}", css::breadcrumbs, css::elevated)
                } else {
                    css::breadcrumbs.to_string()
                }
            }
            aria-label="Breadcrumb"
        >
            <button class=css::control title="Go back" aria-label="Go back" on:click=back>
                <Icon icon=ic::ARROW_LEFT />
            </button>
            <button
                class=css::control
                title="Go home"
                aria-label="Go home"
                on:click=move |_| navigate.run(ROOT_PATH.to_string())
            >
                <Icon icon=ic::HOME />
            </button>

            <ol class=css::trail>
                {move || {
                    let crumbs = crumbs.get();
                    let overflow = crumbs.has_overflow().then_some(crumbs.collapsed);
                    let last = crumbs.visible.len().saturating_sub(1);

                    crumbs
                        .visible
                        .into_iter()
                        .enumerate()
                        .map(|(idx, entry)| {
                            let menu = (idx == 1)
                                .then(|| overflow.clone())
                                .flatten()
                                .map(|hidden| view! {
                                    <OverflowMenu entries=hidden open=menu_open navigate=navigate />
                                });
                            view! {
                                {menu}
                                <Crumb
                                    entry=entry
                                    is_first=idx == 0
                                    is_current=idx == last
                                    compact=compact
                                    navigate=navigate
                                />
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}

#[component]
fn Crumb(
    entry: BreadcrumbEntry,
    is_first: bool,
    is_current: bool,
    compact: Memo<bool>,
    navigate: Callback<String>,
) -> impl IntoView {
    let icon = ic::resolve(entry.icon_ref);
    let label = entry.label.clone();
    let label_class = move || {
        if compact.get() && !is_current {
            css::srOnly
        } else {
            css::label
        }
    };
    let badge = entry
        .badge
        .clone()
        .map(|badge| view! { <span class=css::badge>{badge}</span> });

    let body = if is_current {
        view! {
            <span class=format!("{} {}", css::crumb, css::current) aria-current="page">
                <Icon icon=icon />
                <span class=label_class>{label}</span>
                {badge}
            </span>
        }
        .into_any()
    } else if entry.disabled {
        view! {
            <span class=format!("{} {}", css::crumb, css::disabled) aria-disabled="true">
                <Icon icon=icon />
                <span class=label_class>{label}</span>
                {badge}
            </span>
        }
        .into_any()
    } else {
        let hint = format!("Click to navigate to: {}", entry.label);
        let path = entry.path;
        view! {
            <button
                class=css::crumb
                title=hint
                on:click=move |_| navigate.run(path.clone())
            >
                <Icon icon=icon />
                <span class=label_class>{label}</span>
                {badge}
            </button>
        }
        .into_any()
    };

    view! {
        <li class=css::item>
            {(!is_first).then(|| view! {
                <span class=css::separator aria-hidden="true">
                    <Icon icon=ic::CHEVRON_RIGHT />
                </span>
            })}
            {body}
        </li>
    }
}

/// Overflow affordance holding the collapsed middle crumbs.
#[component]
fn OverflowMenu(
    entries: Vec<BreadcrumbEntry>,
    open: RwSignal<bool>,
    navigate: Callback<String>,
) -> impl IntoView {
    let count = entries.len();
    let entries = StoredValue::new(entries);

    view! {
        <li class=css::item>
            <span class=css::separator aria-hidden="true">
                <Icon icon=ic::CHEVRON_RIGHT />
            </span>
            <div class=css::overflow>
                <button
                    class=css::crumb
                    title=format!("{} more", count)
                    aria-label="Show hidden breadcrumbs"
                    aria-expanded=move || open.get().to_string()
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    <Icon icon=ic::MORE />
                </button>
                <Show when=move || open.get()>
                    <ul class=css::menu>
                        {entries
                            .get_value()
                            .into_iter()
                            .map(|entry| {
                                let icon = ic::resolve(entry.icon_ref);
                                let path = entry.path.clone();
                                let disabled = entry.disabled;
                                view! {
                                    <li>
                                        <button
                                            class=css::menuItem
                                            disabled=disabled
                                            on:click=move |_| {
                                                open.set(false);
                                                navigate.run(path.clone());
                                            }
                                        >
                                            <Icon icon=icon />
                                            <span>{entry.label}</span>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </div>
        </li>
    }
}
