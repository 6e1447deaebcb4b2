//! View state: theme, sidebar, selection, and the copy acknowledgement.
//!
//! [`ViewState`] is the single mutable state of the viewer. Every transition
//! is a plain method so the whole state machine is testable without a
//! browser; the UI layer owns the side effects (persistence, clipboard,
//! scrolling, the auto-clear timer) and calls in here for the state changes.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::experiment::{Experiment, ExperimentContent};

/// How long a copy acknowledgement stays visible, in milliseconds.
pub const COPY_ACK_MS: u32 = 2000;

/// Visual mode, persisted as the literal strings `"dark"` / `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Interpret a persisted value. Only the literal `"dark"` selects dark
    /// mode; absence or anything else is light. OS preference is never
    /// consulted.
    pub fn from_persisted(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    /// The persisted form of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Everything currently visible: theme, sidebar, selection, expanded
/// descriptions, and the active copy acknowledgement key.
///
/// Only the theme survives the process; the rest resets on reload.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub theme: ThemeMode,
    /// Defaults open; never persisted.
    pub sidebar_open: bool,
    /// Id of the selected experiment; defaults to the first catalog entry,
    /// `None` only when the catalog is empty.
    pub selected: Option<u32>,
    /// Which sidebar entries show their description.
    pub expanded: HashSet<u32>,
    /// Key of the single copy button currently showing "Copied!".
    pub copied: Option<String>,
}

impl ViewState {
    /// Initial state: sidebar open, the first experiment selected and
    /// expanded, no copy acknowledged.
    pub fn new(first: Option<&Experiment>, theme: ThemeMode) -> Self {
        let selected = first.map(|e| e.id);
        Self {
            theme,
            sidebar_open: true,
            selected,
            expanded: selected.into_iter().collect(),
            copied: None,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Select an experiment. The expanded set collapses to just this entry,
    /// whatever it held before.
    pub fn select(&mut self, experiment: &Experiment) {
        self.selected = Some(experiment.id);
        self.expanded = HashSet::from([experiment.id]);
    }

    /// Show or hide one sidebar description. Does not touch the selection.
    pub fn toggle_expanded(&mut self, id: u32) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded.contains(&id)
    }

    /// Acknowledge a successful copy. Replaces any previous key, so at most
    /// one button shows "Copied!" at a time.
    pub fn mark_copied(&mut self, key: String) {
        self.copied = Some(key);
    }

    /// Clear the acknowledgement, but only while `key` is still the active
    /// one. A timer that fires after its key was superseded is a no-op.
    pub fn clear_copied(&mut self, key: &str) {
        if self.copied.as_deref() == Some(key) {
            self.copied = None;
        }
    }

    pub fn is_copied(&self, key: &str) -> bool {
        self.copied.as_deref() == Some(key)
    }
}

/// What the content area renders for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentView<'a> {
    /// Nothing selected (empty catalog): static welcome screen.
    Welcome,
    /// The selected experiment has no authored content yet.
    ComingSoon(&'a Experiment),
    /// The full document.
    Full(&'a Experiment, &'a ExperimentContent),
}

impl<'a> ContentView<'a> {
    /// Resolve the render mode. A selection id that is missing from the
    /// catalog behaves like no selection.
    pub fn resolve(catalog: &'a Catalog, selected: Option<u32>) -> Self {
        match selected.and_then(|id| catalog.get_by_id(id)) {
            None => ContentView::Welcome,
            Some(experiment) => match &experiment.content {
                None => ContentView::ComingSoon(experiment),
                Some(content) => ContentView::Full(experiment, content),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::{ExperimentContent, Step};

    fn experiment(id: u32) -> Experiment {
        Experiment::new(id, format!("Experiment {id}"), format!("Description {id}"))
    }

    fn authored(id: u32) -> Experiment {
        experiment(id).with_content(ExperimentContent {
            objective: format!("Objective {id}"),
            software_requirements: vec!["NS2".to_string()],
            steps: vec![Step::new(1, "Start", "Do the thing.")],
            expected_output: vec!["It works".to_string()],
            key_observations: vec!["Interesting".to_string()],
        })
    }

    #[test]
    fn test_theme_from_persisted() {
        assert_eq!(ThemeMode::from_persisted(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_persisted(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_persisted(Some("DARK")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_persisted(Some("solarized")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_persisted(None), ThemeMode::Light);
    }

    #[test]
    fn test_theme_round_trips_through_persisted_form() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_persisted(Some(mode.as_str())), mode);
        }
    }

    #[test]
    fn test_toggle_theme_twice_restores_mode() {
        let first = experiment(1);
        let mut state = ViewState::new(Some(&first), ThemeMode::Light);
        state.toggle_theme();
        assert_eq!(state.theme, ThemeMode::Dark);
        state.toggle_theme();
        assert_eq!(state.theme, ThemeMode::Light);
    }

    #[test]
    fn test_initial_state() {
        let first = experiment(1);
        let state = ViewState::new(Some(&first), ThemeMode::Light);
        assert!(state.sidebar_open);
        assert_eq!(state.selected, Some(1));
        assert!(state.is_expanded(1));
        assert_eq!(state.expanded.len(), 1);
        assert!(state.copied.is_none());
    }

    #[test]
    fn test_initial_state_with_empty_catalog() {
        let state = ViewState::new(None, ThemeMode::Dark);
        assert_eq!(state.selected, None);
        assert!(state.expanded.is_empty());
        assert_eq!(state.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_select_resets_expansion_to_new_entry() {
        let x = experiment(1);
        let y = experiment(2);
        let mut state = ViewState::new(Some(&x), ThemeMode::Light);
        state.toggle_expanded(5);
        state.toggle_expanded(7);

        state.select(&y);

        assert_eq!(state.selected, Some(2));
        assert_eq!(state.expanded, HashSet::from([2]));
    }

    #[test]
    fn test_select_x_then_y() {
        let x = experiment(3);
        let y = experiment(4);
        let mut state = ViewState::new(Some(&x), ThemeMode::Light);
        state.select(&x);
        state.select(&y);
        assert_eq!(state.selected, Some(4));
        assert_eq!(state.expanded, HashSet::from([4]));
    }

    #[test]
    fn test_toggle_expanded_is_independent_of_selection() {
        let first = experiment(1);
        let mut state = ViewState::new(Some(&first), ThemeMode::Light);

        state.toggle_expanded(3);
        assert!(state.is_expanded(1));
        assert!(state.is_expanded(3));
        assert_eq!(state.selected, Some(1));

        state.toggle_expanded(1);
        assert!(!state.is_expanded(1));
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn test_sidebar_toggles() {
        let first = experiment(1);
        let mut state = ViewState::new(Some(&first), ThemeMode::Light);
        assert!(state.sidebar_open);
        state.close_sidebar();
        assert!(!state.sidebar_open);
        state.open_sidebar();
        assert!(state.sidebar_open);
        state.toggle_sidebar();
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_mark_and_clear_copied() {
        let first = experiment(1);
        let mut state = ViewState::new(Some(&first), ThemeMode::Light);
        state.mark_copied("code-1".to_string());
        assert!(state.is_copied("code-1"));
        state.clear_copied("code-1");
        assert!(state.copied.is_none());
    }

    #[test]
    fn test_stale_clear_does_not_touch_newer_key() {
        let first = experiment(1);
        let mut state = ViewState::new(Some(&first), ThemeMode::Light);
        state.mark_copied("code-1".to_string());
        state.mark_copied("tcl-2".to_string());

        // The timer scheduled for the first copy fires late.
        state.clear_copied("code-1");
        assert!(state.is_copied("tcl-2"));

        state.clear_copied("tcl-2");
        assert!(state.copied.is_none());
    }

    #[test]
    fn test_new_copy_supersedes_previous_key() {
        let first = experiment(1);
        let mut state = ViewState::new(Some(&first), ThemeMode::Light);
        state.mark_copied("code-1".to_string());
        state.mark_copied("block-3".to_string());
        assert!(!state.is_copied("code-1"));
        assert!(state.is_copied("block-3"));
    }

    #[test]
    fn test_content_view_welcome_when_nothing_selected() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert_eq!(ContentView::resolve(&catalog, None), ContentView::Welcome);
    }

    #[test]
    fn test_content_view_coming_soon_without_content() {
        let catalog = Catalog::new(vec![experiment(1)]).unwrap();
        match ContentView::resolve(&catalog, Some(1)) {
            ContentView::ComingSoon(e) => assert_eq!(e.id, 1),
            other => panic!("expected ComingSoon, got {other:?}"),
        }
    }

    #[test]
    fn test_content_view_full_with_content() {
        let catalog = Catalog::new(vec![authored(1)]).unwrap();
        match ContentView::resolve(&catalog, Some(1)) {
            ContentView::Full(e, content) => {
                assert_eq!(e.id, 1);
                assert_eq!(content.objective, "Objective 1");
            }
            other => panic!("expected Full, got {other:?}"),
        }
    }

    #[test]
    fn test_content_view_unknown_id_falls_back_to_welcome() {
        let catalog = Catalog::new(vec![authored(1)]).unwrap();
        assert_eq!(ContentView::resolve(&catalog, Some(9)), ContentView::Welcome);
    }
}
