//! Theme plumbing: localStorage persistence, the `data-theme` attribute
//! on the document root, and the context shared with every component.
//!
//! The in-memory [`ThemeMode`] is authoritative. Storage is best-effort:
//! a failed read falls back to light, a failed write is logged and
//! otherwise ignored.

use netlab_rs::ThemeMode;
use yew::prelude::*;

/// localStorage key holding "dark" or "light".
pub const THEME_STORAGE_KEY: &str = "theme";

/// Shared theme context: the current mode plus the toggle callback.
#[derive(Clone, PartialEq)]
pub struct ThemeCtx {
    pub mode: ThemeMode,
    pub toggle: Callback<()>,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Loads the persisted theme. Anything other than a stored "dark",
/// including unavailable storage, comes back as light.
pub fn load_theme() -> ThemeMode {
    let stored = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    ThemeMode::from_persisted(stored.as_deref())
}

/// Persists the theme choice for the next visit.
pub fn store_theme(mode: ThemeMode) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(THEME_STORAGE_KEY, mode.as_str()).is_err() {
                gloo::console::warn!("theme: failed to persist", mode.as_str());
            }
        }
        None => gloo::console::warn!("theme: localStorage unavailable, not persisting"),
    }
}

/// Applies the theme to the document root so CSS can switch palettes on
/// the `data-theme` attribute.
pub fn apply_theme(mode: ThemeMode) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(el) = doc.document_element() else {
        return;
    };
    if el.set_attribute("data-theme", mode.as_str()).is_err() {
        gloo::console::warn!("theme: failed to set data-theme attribute");
    }
}
