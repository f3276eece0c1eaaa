//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! translating it into state changes and action sequences. It is the
//! primary control flow coordinator and the only writer of filter, sort,
//! and selection state.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Key events arrive from the terminal shim
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Every operation runs to completion within one interaction turn; nothing
//! here suspends or blocks.

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Category;
use crate::query::SortKey;

use super::modes::{InputMode, SearchFocus};

/// Events triggered by user input.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down by one position (wraps to top).
    CursorDown,
    /// Moves the cursor up by one position (wraps to bottom).
    CursorUp,
    /// Opens the detail drawer for the record under the cursor.
    OpenDetail,
    /// Closes the detail drawer, clearing the selection.
    CloseDetail,
    /// Enters search mode with typing focus, clearing any previous query.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the search results list (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Context-dependent escape: leaves category/feature mode, or clears
    /// all filters in normal mode.
    Escape,
    /// Toggles a tier in the filter specification.
    ToggleTier(u8),
    /// Toggles a category in the filter specification.
    ToggleCategory(Category),
    /// Toggles a named feature in the filter specification.
    ToggleFeature(String),
    /// Enters category filter mode (digits toggle categories).
    CategoryMode,
    /// Enters feature filter mode (digits toggle features).
    FeatureMode,
    /// Applies the sort toggle convention for the given key.
    SortBy(SortKey),
    /// Switches between the table and cards presentations.
    ToggleView,
    /// Exports the selected record (drawer first, cursor otherwise).
    ExportSelected,
    /// Quits the dashboard.
    Quit,
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns a redraw flag and the actions to execute in sequence. The action
/// list is empty for events that only change state.
///
/// # Errors
///
/// Present for signature stability; the current transitions are all
/// infallible.
#[allow(clippy::too_many_lines, clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::OpenDetail => {
            let Some(record) = state.cursor_service() else {
                tracing::debug!("no record under cursor");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    tracing::debug!("exiting search mode (no selection)");
                    state.input_mode = InputMode::Normal;
                    state.filters.search.clear();
                    state.apply_query();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            tracing::debug!(service_id = %record.id, "opening detail drawer");
            state.selected = Some(record.id.clone());
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            tracing::debug!(selected = ?state.selected, "closing detail drawer");
            state.selected = None;
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.filters.search.clear();
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.filters.search.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_query();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.filters.search, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.filters.search.clear();
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }

            state.filters.search.push(*c);
            tracing::trace!(query = %state.filters.search, "search query updated");
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }

            state.filters.search.pop();
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::Escape => match state.input_mode {
            InputMode::Category | InputMode::Feature => {
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            _ => {
                tracing::debug!("clearing all filters");
                state.filters.clear();
                state.apply_query();
                Ok((true, vec![]))
            }
        },
        Event::ToggleTier(tier) => {
            state.filters.toggle_tier(*tier);
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::ToggleCategory(category) => {
            state.filters.toggle_category(*category);
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::ToggleFeature(feature) => {
            state.filters.toggle_feature(feature);
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::CategoryMode => {
            state.input_mode = InputMode::Category;
            Ok((true, vec![]))
        }
        Event::FeatureMode => {
            state.input_mode = InputMode::Feature;
            Ok((true, vec![]))
        }
        Event::SortBy(key) => {
            state.sort.toggle(*key);
            tracing::debug!(
                sort_key = state.sort.key.label(),
                direction = ?state.sort.direction,
                "sort changed"
            );
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::ToggleView => {
            state.view_mode = state.view_mode.toggled();
            Ok((true, vec![]))
        }
        Event::ExportSelected => {
            let id = state
                .selected
                .clone()
                .or_else(|| state.cursor_service().map(|r| r.id.clone()));

            id.map_or_else(
                || {
                    tracing::debug!("nothing to export");
                    Ok((false, vec![]))
                },
                |id| {
                    tracing::debug!(service_id = %id, "exporting record");
                    Ok((false, vec![Action::ExportService { id }]))
                },
            )
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::ViewMode;
    use crate::catalog::Catalog;
    use crate::query::{SortDirection, SortSpec};
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(Catalog::bundled().unwrap(), Theme::default())
    }

    fn fire(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn tier_toggle_narrows_and_widens() {
        let mut state = state();
        let total = state.visible.len();

        fire(&mut state, Event::ToggleTier(1));
        assert!(state.visible.iter().all(|r| r.tier == 1));
        assert!(state.visible.len() < total);

        fire(&mut state, Event::ToggleTier(1));
        assert_eq!(state.visible.len(), total);
    }

    #[test]
    fn category_mode_toggles_categories_by_event() {
        let mut state = state();
        fire(&mut state, Event::CategoryMode);
        assert_eq!(state.input_mode, InputMode::Category);

        fire(&mut state, Event::ToggleCategory(Category::Auth));
        assert!(state.visible.iter().all(|r| r.category == Category::Auth));

        fire(&mut state, Event::Escape);
        assert_eq!(state.input_mode, InputMode::Normal);
        // Leaving the mode keeps the filter.
        assert!(state.visible.iter().all(|r| r.category == Category::Auth));
    }

    #[test]
    fn unknown_feature_toggle_fails_closed() {
        let mut state = state();
        fire(&mut state, Event::ToggleFeature("Telepathy".to_string()));
        assert!(state.visible.is_empty());
    }

    #[test]
    fn search_typing_filters_incrementally() {
        let mut state = state();
        fire(&mut state, Event::SearchMode);
        fire(&mut state, Event::Char('n'));
        fire(&mut state, Event::Char('e'));
        fire(&mut state, Event::Char('o'));
        assert!(state
            .visible
            .iter()
            .all(|r| r.name.to_lowercase().contains("neo")));

        fire(&mut state, Event::Backspace);
        assert_eq!(state.filters.search, "ne");

        fire(&mut state, Event::ExitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.visible.len(), state.catalog.len());
    }

    #[test]
    fn chars_are_ignored_outside_typing_focus() {
        let mut state = state();
        let (redraw, _) = fire(&mut state, Event::Char('x'));
        assert!(!redraw);
        assert!(state.filters.search.is_empty());

        fire(&mut state, Event::SearchMode);
        fire(&mut state, Event::Char('e'));
        fire(&mut state, Event::FocusResults);
        assert_eq!(
            state.input_mode,
            InputMode::Search(SearchFocus::Navigating)
        );
        let (redraw, _) = fire(&mut state, Event::Char('x'));
        assert!(!redraw);
        assert_eq!(state.filters.search, "e");
    }

    #[test]
    fn focus_results_with_empty_query_leaves_search() {
        let mut state = state();
        fire(&mut state, Event::SearchMode);
        fire(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn escape_in_normal_mode_clears_every_dimension() {
        let mut state = state();
        fire(&mut state, Event::ToggleTier(1));
        fire(&mut state, Event::ToggleFeature("MCP".to_string()));
        state.filters.search = "cl".to_string();
        state.apply_query();

        fire(&mut state, Event::Escape);
        assert!(state.filters.is_empty());
        assert_eq!(state.visible.len(), state.catalog.len());
    }

    #[test]
    fn open_detail_selects_cursor_record_and_close_clears() {
        let mut state = state();
        fire(&mut state, Event::CursorDown);
        let expected = state.cursor_service().unwrap().id.clone();

        fire(&mut state, Event::OpenDetail);
        assert_eq!(state.selected.as_deref(), Some(expected.as_str()));

        fire(&mut state, Event::CloseDetail);
        assert!(state.selected.is_none());
    }

    #[test]
    fn open_detail_on_empty_results_exits_search() {
        let mut state = state();
        fire(&mut state, Event::SearchMode);
        for c in "zzzzz".chars() {
            fire(&mut state, Event::Char(c));
        }
        assert!(state.visible.is_empty());

        fire(&mut state, Event::OpenDetail);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.selected.is_none());
        assert_eq!(state.visible.len(), state.catalog.len());
    }

    #[test]
    fn sort_events_follow_toggle_convention() {
        let mut state = state();
        assert_eq!(state.sort, SortSpec::default());

        fire(&mut state, Event::SortBy(SortKey::Score));
        assert_eq!(state.sort.direction, SortDirection::Asc);
        assert!(state
            .visible
            .windows(2)
            .all(|pair| pair[0].score <= pair[1].score));

        fire(&mut state, Event::SortBy(SortKey::Name));
        assert_eq!(state.sort.key, SortKey::Name);
        assert_eq!(state.sort.direction, SortDirection::Desc);
    }

    #[test]
    fn export_prefers_drawer_selection_over_cursor() {
        let mut state = state();
        state.selected = Some("e2b".to_string());

        let (_, actions) = fire(&mut state, Event::ExportSelected);
        assert_eq!(
            actions,
            vec![Action::ExportService {
                id: "e2b".to_string()
            }]
        );

        state.selected = None;
        let cursor_id = state.cursor_service().unwrap().id.clone();
        let (_, actions) = fire(&mut state, Event::ExportSelected);
        assert_eq!(actions, vec![Action::ExportService { id: cursor_id }]);
    }

    #[test]
    fn view_toggle_keeps_query_results() {
        let mut state = state();
        fire(&mut state, Event::ToggleTier(2));
        let before = state.visible.clone();

        fire(&mut state, Event::ToggleView);
        assert_eq!(state.view_mode, ViewMode::Cards);
        assert_eq!(state.visible, before);
    }

    #[test]
    fn quit_emits_the_quit_action() {
        let mut state = state();
        let (redraw, actions) = fire(&mut state, Event::Quit);
        assert!(!redraw);
        assert_eq!(actions, vec![Action::Quit]);
    }
}
