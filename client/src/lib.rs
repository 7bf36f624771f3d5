//! # client
//!
//! Leptos + WASM frontend for formdesk: the transaction viewer, the input
//! form, the remarks editor, the calendar, and the login gate in front of
//! them.
//!
//! Session handling and route policy live in the `gate` crate and field
//! validation in `rules`; this crate wires both into pages and owns the
//! browser-specific glue (`localStorage`, clock, console logging).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
