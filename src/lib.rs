//! Text Selector - Chrome Extension for capturing selected text
//! Built with Rust + WASM + Yew

pub mod clipboard;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod host;
pub mod selection;
pub mod tab_data;
#[cfg(test)]
mod test_utils;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook and console logging for the popup
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::LOG_LEVEL));
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    log::info!("Starting {}", config::version_label());
    yew::Renderer::<ui::popup::App>::new().render();
}
