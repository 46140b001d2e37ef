//! Leptos frontend (wasm32 only).

pub mod app;
pub mod components;
pub mod form_page;
pub mod list_page;

use wasm_bindgen::prelude::*;

/// WASM entry point, run when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    prodcat_observability::init();

    leptos::mount_to_body(app::App);
}
