//! # client
//!
//! Leptos + WASM single-page frontend for the hydromap monitoring viewer.
//!
//! This crate holds the route table and navigation guard, the login, map,
//! and admin pages, and the `localStorage` session backing. Network access
//! goes through the `api` crate; session state lives in the `session` crate.
//!
//! Build the browser bundle with the `csr` feature; without it the crate
//! compiles natively so the guard and page helpers can be unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod storage;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
