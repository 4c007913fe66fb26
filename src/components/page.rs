//! Page outlet.
//!
//! Page bodies are supplied by the content layer; the outlet only renders
//! the resolved page title for the current route.

use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn PageOutlet() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let title = Memo::new(move |_| {
        let route = ctx.route.get();
        ctx.nav.with_untracked(|c| c.catalog().page_title(&route))
    });
    let description = Memo::new(move |_| {
        let route = ctx.route.get();
        ctx.nav.with_untracked(|c| {
            c.catalog()
                .items()
                .iter()
                .find(|item| item.path == route.as_str())
                .and_then(|item| item.description.clone())
        })
    });

    view! {
        <section class=css::page>
            <h1 class=css::title>{title}</h1>
            {move || description.get().map(|text| view! {
                <p class=css::description>{text}</p>
            })}
        </section>
    }
}
