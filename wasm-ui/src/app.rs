//! Main application component.

use gloo::timers::callback::Timeout;
use netlab_rs::{COPY_ACK_MS, Catalog, ViewState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use yew::prelude::*;

use crate::components::{Footer, Header};
use crate::content::{CopyRequest, MainContent};
use crate::sidebar::Sidebar;
use crate::theme::{self, ThemeCtx};

/// Main application state: the fixed catalog plus everything the user can
/// change from the page.
#[derive(Clone, PartialEq)]
pub struct AppState {
    pub catalog: Rc<Catalog>,
    pub view: ViewState,
}

impl AppState {
    /// Initial state: the built-in catalog with its first experiment
    /// selected, and the theme restored from local storage.
    fn load() -> Self {
        let catalog = Rc::new(Catalog::builtin());
        let view = ViewState::new(catalog.first(), theme::load_theme());
        Self { catalog, view }
    }
}

/// Every transition the page can request.
pub enum AppAction {
    ToggleTheme,
    ToggleSidebar,
    CloseSidebar,
    /// Sidebar entry clicked.
    Select(u32),
    /// Sidebar chevron clicked; shows or hides one description.
    ToggleExpanded(u32),
    /// A clipboard write succeeded for this key.
    MarkCopied(String),
    /// The acknowledgement timer fired for this key.
    ClearCopied(String),
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::ToggleTheme => next.view.toggle_theme(),
            AppAction::ToggleSidebar => next.view.toggle_sidebar(),
            AppAction::CloseSidebar => next.view.close_sidebar(),
            AppAction::Select(id) => {
                let catalog = Rc::clone(&next.catalog);
                if let Some(experiment) = catalog.get_by_id(id) {
                    next.view.select(experiment);
                }
            }
            AppAction::ToggleExpanded(id) => next.view.toggle_expanded(id),
            AppAction::MarkCopied(key) => next.view.mark_copied(key),
            AppAction::ClearCopied(key) => next.view.clear_copied(&key),
        }
        Rc::new(next)
    }
}

/// Write `text` to the system clipboard.
async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::load);

    // Reflect the theme into the document and local storage. Also runs on
    // mount, so a restored preference is applied before the user touches
    // anything.
    {
        let mode = state.view.theme;
        use_effect_with(mode, move |mode| {
            theme::apply_theme(*mode);
            theme::store_theme(*mode);
            || ()
        });
    }

    // Auto-clear timer for the copy acknowledgement. Re-copying cancels the
    // previous timer, so a stale timer can never clear a newer key.
    {
        let state = state.clone();
        let copied = state.view.copied.clone();
        use_effect_with(copied, move |copied| {
            let timeout_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

            if let Some(key) = copied.clone() {
                let state = state.clone();
                let handle = Timeout::new(COPY_ACK_MS, move || {
                    state.dispatch(AppAction::ClearCopied(key));
                });
                *timeout_handle.borrow_mut() = Some(handle);
            }

            let cleanup_handle = timeout_handle.clone();
            move || {
                if let Some(handle) = cleanup_handle.borrow_mut().take() {
                    handle.cancel();
                }
            }
        });
    }

    let on_toggle_theme = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(AppAction::ToggleTheme))
    };

    let on_toggle_sidebar = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(AppAction::ToggleSidebar))
    };

    let on_close_sidebar = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(AppAction::CloseSidebar))
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |id: u32| state.dispatch(AppAction::Select(id)))
    };

    let on_toggle_expanded = {
        let state = state.clone();
        Callback::from(move |id: u32| state.dispatch(AppAction::ToggleExpanded(id)))
    };

    // Copy button handler: write to the clipboard, acknowledge on success.
    // A failed write leaves the button untouched.
    let on_copy = {
        let state = state.clone();
        Callback::from(move |request: CopyRequest| {
            let state = state.clone();
            spawn_local(async move {
                match write_clipboard(&request.text).await {
                    Ok(()) => state.dispatch(AppAction::MarkCopied(request.key)),
                    Err(err) => gloo::console::warn!("Failed to copy text:", err),
                }
            });
        })
    };

    let theme_ctx = ThemeCtx {
        mode: state.view.theme,
        toggle: on_toggle_theme,
    };

    html! {
        <ContextProvider<ThemeCtx> context={theme_ctx}>
            <div class="app">
                <Header
                    sidebar_open={state.view.sidebar_open}
                    on_toggle_sidebar={on_toggle_sidebar}
                />

                <div class="app-body">
                    <Sidebar
                        catalog={Rc::clone(&state.catalog)}
                        open={state.view.sidebar_open}
                        selected={state.view.selected}
                        expanded={state.view.expanded.clone()}
                        on_select={on_select}
                        on_toggle_expanded={on_toggle_expanded}
                        on_close={on_close_sidebar}
                    />

                    <MainContent
                        catalog={Rc::clone(&state.catalog)}
                        selected={state.view.selected}
                        copied={state.view.copied.clone()}
                        on_copy={on_copy}
                    />
                </div>

                <Footer />
            </div>
        </ContextProvider<ThemeCtx>>
    }
}
