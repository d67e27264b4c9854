pub mod app;
pub mod catalog;
pub mod components;
pub mod i18n;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails if a logger is already installed
    console_log::init_with_level(level).ok();

    log::info!("Mounting accordion showcase");
    leptos::mount_to_body(app::App);
}
