use leptos::*;
use wasm_bindgen::JsCast;

mod components;
mod models;
mod utils;

use components::Gallery;

/// ギャラリーを挿入するコンテナ要素のID
const CONTAINER_ID: &str = "pdf-container";

fn main() {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document not found");
    let container = document
        .get_element_by_id(CONTAINER_ID)
        .expect("#pdf-container not found");

    mount_to(container.unchecked_into(), Gallery);
}
