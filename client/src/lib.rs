//! # client
//!
//! Leptos + WASM frontend for the recipe organizer.
//!
//! This crate contains pages, components, page state, and the HTTP client
//! for the remote recipe service. It is rendered on the server by the
//! `recipe-organizer` host and hydrated in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered
/// markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
