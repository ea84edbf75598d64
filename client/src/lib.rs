//! # client
//!
//! Leptos + WASM frontend for Site A. Renders the landing page with the
//! cross-site navigation menu and the login page, and wires the `gate`
//! session check to the real browser through [`browser`].

pub mod app;
pub mod browser;
pub mod components;
pub mod pages;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
