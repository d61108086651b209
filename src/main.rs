mod app;
mod components;
mod config;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::MOUNT_ID;

fn main() {
    console_error_panic_hook::set_once();

    match document().get_element_by_id(MOUNT_ID) {
        Some(root) => mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget(),
        None => web_sys::console::error_1(&format!("Missing #{} mount element", MOUNT_ID).into()),
    }
}
