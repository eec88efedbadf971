//! # client
//!
//! Leptos + WASM front end for the webbank online banking system: one
//! route per role-gated page, a shared session context backed by
//! localStorage, a typed REST layer, and the statement filter/export
//! utilities.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the application over the served shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
