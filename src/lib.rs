//! # greentrack
//!
//! Leptos + WASM frontend for the GreenTrack cleanliness-reporting service.
//!
//! Citizens submit photo-backed reports, volunteers claim and complete cleanup
//! tasks, moderators validate reports and assign volunteers, and admins view
//! analytics. Everything authoritative lives behind the REST backend; this
//! crate renders its responses and dispatches user actions back to it.
//!
//! Browser-only behavior is gated behind the `csr` feature. Native builds
//! compile the pure core (state, renderers, dispatch) so it can be unit tested
//! without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod render;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and mounts the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
