mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    utils::logging::init();

    let root = document()
        .get_element_by_id(config::MOUNT_ELEMENT_ID)
        .expect("Failed to find mount element")
        .unchecked_into::<web_sys::HtmlElement>();

    tracing::info!(app = config::APP_NAME, "mounting");
    mount_to(root, App).forget();
}
