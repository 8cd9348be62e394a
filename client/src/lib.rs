//! Trace viewer embed demo, Leptos client crate.
//!
//! ARCHITECTURE
//! ============
//! `app` wires routing and shared state contexts; `pages` own route-level
//! orchestration; `components` render the form, table, banner, and embed
//! panel; `state` holds plain signal-backed structs; `net` talks to the
//! same-origin relay endpoints.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
