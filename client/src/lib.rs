//! # client
//!
//! Leptos CSR frontend for the AMSA member portal. Pages, components, the
//! reactive session mirror, and the browser bindings (gloo-net transport,
//! `localStorage`) that plug into the `session` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    leptos::mount::mount_to_body(app::App);
}
