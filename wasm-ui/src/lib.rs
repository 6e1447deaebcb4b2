//! Web UI for netlab-rs
//!
//! A Yew-based viewer for the Computer Networks lab manual: an experiment
//! sidebar, a document renderer with copyable code listings, and a
//! persisted light/dark theme.

mod app;
mod components;
mod content;
mod sidebar;
pub mod theme;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
