//! # netlab-rs
//!
//! A computer networks lab manual as a library: a fixed catalog of ten
//! experiments, the view state that drives the browser UI, and a small
//! Tcl syntax highlighter for the embedded NS2 scripts.
//!
//! ## Overview
//!
//! The crate splits into three parts:
//! - **Catalog**: immutable experiment data, validated once at
//!   construction ([`Catalog`])
//! - **View state**: theme, sidebar, selection, expansion, and the copy
//!   acknowledgement ([`ViewState`])
//! - **Highlighting**: a single-pass Tcl tokenizer ([`tokenize`])
//!
//! The `wasm-ui` workspace member renders all of this with Yew; nothing
//! in this crate touches the DOM.
//!
//! ## Example
//!
//! ```
//! use netlab_rs::{Catalog, ThemeMode, ViewState};
//!
//! let catalog = Catalog::builtin();
//! let mut view = ViewState::new(catalog.first(), ThemeMode::Light);
//!
//! // Selecting an experiment focuses the sidebar on it alone.
//! let ping = catalog.get_by_id(2).unwrap();
//! view.select(ping);
//! assert_eq!(view.selected, Some(2));
//! assert!(view.is_expanded(2));
//! assert!(!view.is_expanded(1));
//! ```

pub mod catalog;
pub mod data;
pub mod error;
pub mod experiment;
pub mod highlight;
pub mod view;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use experiment::{CodeBlockKind, CodeChange, Experiment, ExperimentContent, Step};
pub use highlight::{Token, TokenClass, tokenize};
pub use view::{COPY_ACK_MS, ContentView, ThemeMode, ViewState};
