//! # client
//!
//! Leptos + WASM frontend for the userdesk admin panel.
//!
//! This crate contains pages, components, application state, network types,
//! and the HTTP client for the remote user directory API. The `userdesk`
//! host renders it on the server (`ssr`) and the browser bundle hydrates it
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
