//! Site header: logo link and the global navigation controller.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::navigation::Navigation;
use crate::config::APP_NAME;
use crate::core::NavIntent;

stylance::import_crate_style!(css, "src/components/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let go_home = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ctx.dispatch(NavIntent::Navigate("/".to_string()));
    };

    view! {
        <header class=css::header>
            <div class=css::backdrop></div>
            <div class=css::inner>
                <a href="/" class=css::logo on:click=go_home>{APP_NAME}</a>
                <Navigation />
            </div>
        </header>
    }
}
