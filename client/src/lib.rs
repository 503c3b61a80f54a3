//! # client
//!
//! Leptos + WASM frontend for VandanaHub: the sign-in / sign-up screen and
//! the dashboard shell.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST helpers that talk to the external auth backend. Browser-only
//! behavior lives behind the `hydrate` feature; `ssr` renders the same views
//! on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
