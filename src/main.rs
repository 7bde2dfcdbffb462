mod app;
mod components;
mod config;
mod core;
mod models;
mod routes;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::MOUNT_ELEMENT_ID;
use crate::utils::log;

fn main() {
    console_error_panic_hook::set_once();

    // A broken route table is a build mistake: report it and stay unmounted
    let navigator = match routes::router() {
        Ok(navigator) => navigator,
        Err(err) => {
            log::error(&format!("invalid route table: {}", err));
            return;
        }
    };
    log::info(&format!(
        "router ready: {} routes, starting at {}",
        navigator.table().len(),
        navigator.current()
    ));

    let root = document()
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App navigator=navigator /> }).forget();
}
