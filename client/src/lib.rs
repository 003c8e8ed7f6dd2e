//! # cafeteria-client
//!
//! Leptos + WASM frontend for the Cafetería POS system.
//!
//! This crate contains the route registry and the navigation outlet that
//! drives it, the layout shell, the role dashboards (waiter, kitchen,
//! cashier, admin), and the REST client for the POS backend's auth
//! endpoints. The `server` binary renders it with SSR; the `hydrate`
//! feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
