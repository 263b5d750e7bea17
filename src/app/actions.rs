//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin binary executes them in order; nothing in the library performs host
//! calls itself.
//!
//! # Example
//!
//! ```rust
//! use character_catalog::app::Action;
//! use character_catalog::app::pagination::Pagination;
//! use character_catalog::domain::FilterSet;
//!
//! let mut pagination = Pagination::new(FilterSet::default());
//! let actions: Vec<Action> = pagination.start().map(Action::Fetch).into_iter().collect();
//! assert_eq!(actions.len(), 1);
//! ```

use crate::api::FetchTicket;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit (pressing 'q').
    CloseFocus,

    /// Issues a page request.
    ///
    /// The ticket's id must come back with the response so stale completions
    /// can be recognized.
    Fetch(FetchTicket),
}
