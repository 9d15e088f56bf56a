pub mod app;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

/// Mount the nickname page into `<body>`
#[wasm_bindgen]
pub fn mount() {
    // route `log` output to the browser console
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("mounting nickname updater");
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    mount();
}
