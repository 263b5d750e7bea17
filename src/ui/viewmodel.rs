//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data:
//! truncated strings, highlight ranges, enabled flags.
//!
//! # Example
//!
//! ```rust
//! use character_catalog::domain::LifeStatus;
//! use character_catalog::ui::viewmodel::CharacterRow;
//!
//! let row = CharacterRow {
//!     id: 1,
//!     name: "Rick Sanchez".to_string(),
//!     status: LifeStatus::Alive,
//!     species: "Human".to_string(),
//!     origin: "Earth (C-137)".to_string(),
//!     location: "Citadel of Ricks".to_string(),
//!     is_selected: true,
//!     highlight_ranges: vec![(0, 4)],
//! };
//! assert_eq!(row.highlight_ranges.len(), 1);
//! ```

use crate::domain::LifeStatus;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Character rows visible in the table window.
    pub rows: Vec<CharacterRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub filter_bar: FilterBarInfo,

    /// Details of the selected character, if any.
    pub details: Option<DetailInfo>,

    pub pagination: PaginationInfo,

    pub footer: FooterInfo,

    /// Replaces the table while loading, on an empty result or after an error.
    pub empty_state: Option<EmptyState>,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRow {
    pub id: u32,
    pub name: String,
    pub status: LifeStatus,
    pub species: String,
    pub origin: String,
    pub location: String,
    pub is_selected: bool,

    /// Character ranges of `name` matching the name filter.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// One field of the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterFieldInfo {
    pub label: &'static str,
    pub value: String,
    pub is_focused: bool,
}

/// Filter bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    /// Free-text fields in display order, followed by the status field.
    pub fields: Vec<FilterFieldInfo>,

    /// Page number being typed, when the go-to prompt is open.
    pub goto_input: Option<String>,
}

/// Secondary details for the selected character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    /// `(label, value)` pairs; empty values are already filtered out.
    pub entries: Vec<(&'static str, String)>,
}

/// Pagination control display information.
///
/// Mirrors the classic `<< < Page x of y > >>` control. A control is enabled
/// only when pressing it would issue a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub first_enabled: bool,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub last_enabled: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Which non-table body to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    Loading,
    NoResults,
    Error,
}

/// Message shown in place of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub kind: EmptyKind,

    /// Primary message (e.g., "No characters found").
    pub message: String,

    /// Secondary explanatory text (e.g., "Try other filters").
    pub subtitle: String,
}

/// Fixed table column widths, in characters.
///
/// Origin and location split whatever width remains.
pub mod columns {
    /// Status dot plus one space.
    pub const STATUS: usize = 2;
    pub const NAME: usize = 28;
    pub const SPECIES: usize = 14;
    /// Space between text columns.
    pub const GAP: usize = 2;

    /// Width of each of the origin and location columns for a pane `cols` wide.
    #[must_use]
    pub const fn place(cols: usize) -> usize {
        cols.saturating_sub(STATUS + NAME + SPECIES + GAP * 3) / 2
    }
}
