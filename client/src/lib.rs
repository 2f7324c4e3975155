//! # client
//!
//! Leptos + WASM frontend for Snippets Hub: browse, submit, and copy short
//! code snippets filed under PHP, HTML, or CSS.
//!
//! This crate contains the page, components, board state, REST types, and the
//! effect runner that connects board state to the browser (HTTP, clipboard,
//! timers). The snippet API itself is an external service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then hydrate
/// the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
