//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place state changes. It turns one [`Event`]
//! into state mutations plus the [`Action`]s the plugin runtime must perform.
//!
//! # Event Types
//!
//! - **Selection**: `KeyDown`, `KeyUp`
//! - **Paging**: `Navigate`, `GotoPrompt`, `Reload`
//! - **Filtering**: `EditFilters`, `NextField`, `PreviousField`, `CycleStatus`,
//!   `ClearFilters`
//! - **Text entry**: `Char`, `Backspace`, `Submit`, `ExitEdit`
//! - **System**: `PermissionsResult`, `PageFetched`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use character_catalog::app::{handle_event, Action, AppState, Event};
//! use character_catalog::domain::FilterSet;
//! use character_catalog::ui::Theme;
//!
//! let mut state = AppState::new(FilterSet::default(), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), character_catalog::CatalogError>(())
//! ```

use super::modes::InputMode;
use super::pagination::PageNav;
use crate::api::{FetchOutcome, FetchTicket};
use crate::app::{Action, AppState};
use crate::domain::{FetchError, FilterSet, Result, StatusFilter};

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Closes the pane.
    CloseFocus,

    /// Page navigation; ignored when the control is disabled.
    Navigate(PageNav),
    /// Opens the go-to-page prompt.
    GotoPrompt,
    /// Re-requests the current page.
    Reload,

    /// Starts editing the name filter.
    EditFilters,
    /// Moves editing focus to the next free-text field.
    NextField,
    /// Moves editing focus to the previous free-text field.
    PreviousField,
    /// Advances the status filter through all, alive, dead, unknown.
    CycleStatus,
    /// Removes every filter.
    ClearFilters,

    /// Types a character into the focused field or prompt.
    Char(char),
    /// Deletes the last character of the focused field or prompt.
    Backspace,
    /// Confirms the focused field or prompt.
    Submit,
    /// Leaves text entry without submitting.
    ExitEdit,

    /// Outcome of the web access permission request.
    PermissionsResult {
        granted: bool,
    },

    /// A page request completed.
    PageFetched(FetchOutcome),
}

/// Wraps a ticket in a fetch action. Issuing a request clears the items, so
/// the selection goes back to the first row.
fn fetch(state: &mut AppState, ticket: Option<FetchTicket>) -> Vec<Action> {
    if ticket.is_some() {
        state.selected_index = 0;
    }
    ticket.map(Action::Fetch).into_iter().collect()
}

/// Replaces the filters, re-requesting page 1 if the query changed.
fn apply_filters(state: &mut AppState, filters: FilterSet) -> (bool, Vec<Action>) {
    let ticket = state.pagination.set_filters(filters);
    (true, fetch(state, ticket))
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions are executed in order by the plugin
/// runtime; the vector is empty when the event needs no side effects.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that touch the
/// filesystem.
///
/// # Tracing
///
/// Each call opens a debug-level span carrying the event.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::Navigate(nav) => {
            let ticket = state.pagination.navigate(*nav);
            Ok((ticket.is_some(), fetch(state, ticket)))
        }
        Event::GotoPrompt => {
            state.input_mode = InputMode::GotoPage;
            state.goto_input.clear();
            Ok((true, vec![]))
        }
        Event::Reload => {
            let ticket = state.pagination.reload();
            tracing::debug!(page = state.pagination.current_page(), "reloading");
            Ok((true, fetch(state, ticket)))
        }

        Event::EditFilters => {
            state.input_mode = InputMode::Editing(crate::domain::TextField::Name);
            Ok((true, vec![]))
        }
        Event::NextField | Event::PreviousField => {
            let InputMode::Editing(field) = state.input_mode else {
                return Ok((false, vec![]));
            };
            let field = if *event == Event::NextField {
                field.next()
            } else {
                field.previous()
            };
            state.input_mode = InputMode::Editing(field);
            Ok((true, vec![]))
        }
        Event::CycleStatus => {
            let filters = state.pagination.filters().clone();
            let status = StatusFilter::cycle(filters.status);
            tracing::debug!(status = ?status, "status filter cycled");
            Ok(apply_filters(state, filters.with_status(status)))
        }
        Event::ClearFilters => Ok(apply_filters(state, FilterSet::default())),

        Event::Char(c) => match state.input_mode {
            InputMode::Editing(field) => {
                let filters = state.pagination.filters().clone();
                let mut text = filters.text(field).to_string();
                text.push(*c);
                tracing::trace!(field = field.label(), value = %text, "filter edited");
                Ok(apply_filters(state, filters.with_text(field, text)))
            }
            InputMode::GotoPage => {
                if !c.is_ascii_digit() || state.goto_input.len() >= 6 {
                    return Ok((false, vec![]));
                }
                state.goto_input.push(*c);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Editing(field) => {
                let filters = state.pagination.filters().clone();
                let mut text = filters.text(field).to_string();
                if text.pop().is_none() {
                    return Ok((false, vec![]));
                }
                Ok(apply_filters(state, filters.with_text(field, text)))
            }
            InputMode::GotoPage => {
                state.goto_input.pop();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Submit => match state.input_mode {
            InputMode::GotoPage => {
                state.input_mode = InputMode::Normal;
                let target = state.goto_input.parse::<u32>().ok();
                state.goto_input.clear();
                let ticket = target.and_then(|page| state.pagination.navigate(PageNav::Goto(page)));
                Ok((true, fetch(state, ticket)))
            }
            InputMode::Editing(_) => {
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::ExitEdit => {
            state.input_mode = InputMode::Normal;
            state.goto_input.clear();
            Ok((true, vec![]))
        }

        Event::PermissionsResult { granted: true } => {
            tracing::debug!("web access granted");
            let ticket = state.pagination.start();
            Ok((true, fetch(state, ticket)))
        }
        Event::PermissionsResult { granted: false } => {
            tracing::debug!("web access denied");
            if let Some(ticket) = state.pagination.start() {
                state.pagination.complete(FetchOutcome {
                    id: ticket.id,
                    page: ticket.request.page,
                    result: Err(FetchError::Transport {
                        status: None,
                        message: "web access permission denied".to_string(),
                    }),
                });
            }
            Ok((true, vec![]))
        }
        Event::PageFetched(outcome) => {
            let applied = state.pagination.complete(outcome.clone());
            if applied {
                state.selected_index = 0;
                tracing::debug!(page = outcome.page, ok = outcome.result.is_ok(), "page applied");
            }
            Ok((applied, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pagination::Phase;
    use crate::domain::{PageResult, TextField};
    use crate::ui::Theme;

    fn ticket_of(actions: &[Action]) -> &FetchTicket {
        match actions {
            [Action::Fetch(ticket)] => ticket,
            other => panic!("expected a single fetch, got {other:?}"),
        }
    }

    fn started() -> (AppState, FetchTicket) {
        let mut state = AppState::new(FilterSet::default(), Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        let ticket = ticket_of(&actions).clone();
        (state, ticket)
    }

    fn deliver(state: &mut AppState, ticket: &FetchTicket, total_pages: u32) {
        let outcome = FetchOutcome {
            id: ticket.id,
            page: ticket.request.page,
            result: Ok(PageResult {
                items: vec![],
                total_pages,
                current_page: ticket.request.page,
                total_count: total_pages * 20,
            }),
        };
        let (render, _) = handle_event(state, &Event::PageFetched(outcome)).unwrap();
        assert!(render);
    }

    #[test]
    fn typing_a_filter_refetches_page_one_per_keystroke() {
        let (mut state, ticket) = started();
        deliver(&mut state, &ticket, 42);

        handle_event(&mut state, &Event::EditFilters).unwrap();
        let (_, first) = handle_event(&mut state, &Event::Char('r')).unwrap();
        let (_, second) = handle_event(&mut state, &Event::Char('i')).unwrap();

        assert_eq!(ticket_of(&first).request.filters.name, "r");
        let latest = ticket_of(&second);
        assert_eq!(latest.request.filters.name, "ri");
        assert_eq!(latest.request.page, 1);
        assert_eq!(state.pagination.pending(), Some(latest.id));
    }

    #[test]
    fn tab_moves_between_text_fields() {
        let (mut state, _) = started();
        handle_event(&mut state, &Event::EditFilters).unwrap();
        handle_event(&mut state, &Event::NextField).unwrap();
        assert_eq!(state.input_mode, InputMode::Editing(TextField::Species));
        handle_event(&mut state, &Event::PreviousField).unwrap();
        handle_event(&mut state, &Event::PreviousField).unwrap();
        assert_eq!(state.input_mode, InputMode::Editing(TextField::Gender));
    }

    #[test]
    fn backspace_on_empty_field_does_nothing() {
        let (mut state, _) = started();
        handle_event(&mut state, &Event::EditFilters).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn chars_in_normal_mode_are_ignored() {
        let (mut state, _) = started();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.pagination.filters().name, "");
    }

    #[test]
    fn cycle_status_requests_lowercase_status() {
        let (mut state, ticket) = started();
        deliver(&mut state, &ticket, 3);

        let (_, actions) = handle_event(&mut state, &Event::CycleStatus).unwrap();
        let pairs = ticket_of(&actions).request.query_pairs();
        assert!(pairs.contains(&("status", "alive".to_string())));
    }

    #[test]
    fn clear_filters_without_filters_is_a_no_op_request() {
        let (mut state, ticket) = started();
        deliver(&mut state, &ticket, 3);
        let (_, actions) = handle_event(&mut state, &Event::ClearFilters).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn goto_prompt_navigates_in_range_only() {
        let (mut state, ticket) = started();
        deliver(&mut state, &ticket, 3);

        handle_event(&mut state, &Event::GotoPrompt).unwrap();
        handle_event(&mut state, &Event::Char('5')).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);

        handle_event(&mut state, &Event::GotoPrompt).unwrap();
        handle_event(&mut state, &Event::Char('x')).unwrap();
        handle_event(&mut state, &Event::Char('3')).unwrap();
        assert_eq!(state.goto_input, "3");
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(ticket_of(&actions).request.page, 3);
    }

    #[test]
    fn denied_permission_ends_in_error() {
        let mut state = AppState::new(FilterSet::default(), Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert!(actions.is_empty());
        assert!(matches!(state.pagination.phase(), Phase::Errored { .. }));
    }

    #[test]
    fn new_page_resets_selection() {
        let (mut state, ticket) = started();
        deliver(&mut state, &ticket, 3);
        state.selected_index = 7;

        let (_, actions) = handle_event(&mut state, &Event::Navigate(PageNav::Next)).unwrap();
        deliver(&mut state, ticket_of(&actions), 3);
        assert_eq!(state.selected_index, 0);
    }

    fn deliver_rows(state: &mut AppState, ticket: &FetchTicket, rows: u32, total_pages: u32) {
        let items = (1..=rows)
            .map(|id| crate::domain::CharacterSummary {
                id,
                name: format!("Character {id}"),
                status: "Alive".to_string(),
                species: "Human".to_string(),
                image_url: String::new(),
                origin: crate::domain::LocationRef::default(),
                location: crate::domain::LocationRef::default(),
                kind: String::new(),
                gender: String::new(),
                episode_urls: vec![],
            })
            .collect();
        let outcome = FetchOutcome {
            id: ticket.id,
            page: ticket.request.page,
            result: Ok(PageResult {
                items,
                total_pages,
                current_page: ticket.request.page,
                total_count: rows * total_pages,
            }),
        };
        handle_event(state, &Event::PageFetched(outcome)).unwrap();
    }

    fn select_last_row(state: &mut AppState) {
        for _ in 1..state.items().len() {
            handle_event(state, &Event::KeyDown).unwrap();
        }
    }

    #[test]
    fn issuing_a_request_resets_a_late_selection() {
        let (mut state, ticket) = started();
        deliver_rows(&mut state, &ticket, 20, 3);
        select_last_row(&mut state);
        assert_eq!(state.selected_index, 19);

        let (_, actions) = handle_event(&mut state, &Event::Navigate(PageNav::Next)).unwrap();
        assert_eq!(state.selected_index, 0);
        assert!(state.compute_viewmodel(24, 100).rows.is_empty());

        deliver_rows(&mut state, ticket_of(&actions), 20, 3);
        select_last_row(&mut state);
        handle_event(&mut state, &Event::Reload).unwrap();
        assert_eq!(state.selected_index, 0);
        assert!(state.compute_viewmodel(24, 100).rows.is_empty());
    }

    #[test]
    fn failed_fetch_after_late_selection_renders_the_error() {
        let (mut state, ticket) = started();
        deliver_rows(&mut state, &ticket, 20, 3);
        select_last_row(&mut state);

        let (_, actions) = handle_event(&mut state, &Event::Navigate(PageNav::Last)).unwrap();
        let failed = FetchOutcome {
            id: ticket_of(&actions).id,
            page: 3,
            result: Err(FetchError::Transport {
                status: Some(500),
                message: "HTTP 500: empty response body".to_string(),
            }),
        };
        handle_event(&mut state, &Event::PageFetched(failed)).unwrap();

        assert_eq!(state.selected_index, 0);
        let vm = state.compute_viewmodel(16, 80);
        assert!(vm.rows.is_empty());
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn stale_page_does_not_render() {
        let (mut state, first) = started();
        handle_event(&mut state, &Event::Reload).unwrap();

        let outcome = FetchOutcome {
            id: first.id,
            page: 1,
            result: Ok(PageResult::empty()),
        };
        let (render, _) = handle_event(&mut state, &Event::PageFetched(outcome)).unwrap();
        assert!(!render);
        assert!(state.pagination.is_loading());
    }

    #[test]
    fn close_emits_close_action() {
        let (mut state, _) = started();
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
