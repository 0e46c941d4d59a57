//! # homepage
//!
//! Leptos + WASM front end for the personal homepage.
//!
//! The page has three draggable dialogs (About, Projects, Experience) and a
//! pair of live clocks. All of the state logic lives in the `widgets` crate;
//! this crate measures the DOM, forwards pointer/key events, runs the clock
//! timer, and renders markup. Browser-only code is behind the `csr` feature so
//! the crate also builds and tests on the host.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    util::logging::init();
    leptos::mount::mount_to_body(app::App);
}
