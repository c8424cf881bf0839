#![recursion_limit = "256"]

//! # parking-client
//!
//! Leptos + WASM front end for the parking-management console.
//!
//! This crate contains the route-group table and dispatcher, the protected
//! shell and its chrome, shared widgets, pages, and REST adapters for the
//! external auth and post services. The `server` crate renders it via SSR and
//! the browser hydrates it through [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
