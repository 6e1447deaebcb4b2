//! Browser tests for theme persistence and application.
//!
//! Run with `wasm-pack test --headless --chrome wasm-ui`.

#![cfg(target_arch = "wasm32")]

use netlab_rs::ThemeMode;
use wasm_bindgen_test::*;
use wasm_ui::theme::{THEME_STORAGE_KEY, apply_theme, load_theme, store_theme};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_store_then_load_round_trips() {
    store_theme(ThemeMode::Dark);
    assert_eq!(load_theme(), ThemeMode::Dark);

    store_theme(ThemeMode::Light);
    assert_eq!(load_theme(), ThemeMode::Light);
}

#[wasm_bindgen_test]
fn test_unrecognized_stored_value_falls_back_to_light() {
    let storage = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap();
    storage.set_item(THEME_STORAGE_KEY, "sepia").unwrap();

    assert_eq!(load_theme(), ThemeMode::Light);
}

#[wasm_bindgen_test]
fn test_apply_theme_sets_document_attribute() {
    apply_theme(ThemeMode::Dark);

    let root = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .document_element()
        .unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));

    apply_theme(ThemeMode::Light);
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
}
