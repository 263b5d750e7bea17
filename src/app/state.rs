//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the pagination
//! state machine (which owns the filters and the loaded page), the cursor, the
//! input mode and the theme. View models are computed on demand from a state
//! snapshot.
//!
//! # Example
//!
//! ```rust
//! use character_catalog::app::AppState;
//! use character_catalog::domain::FilterSet;
//! use character_catalog::ui::Theme;
//!
//! let state = AppState::new(FilterSet::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 100);
//! assert!(viewmodel.rows.is_empty());
//! ```

use super::modes::InputMode;
use super::pagination::{PageNav, Pagination, Phase};
use crate::domain::{CharacterSummary, FilterSet, TextField};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    columns, CharacterRow, DetailInfo, EmptyKind, EmptyState, FilterBarInfo, FilterFieldInfo,
    FooterInfo, HeaderInfo, PaginationInfo, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Rows taken by everything except the table body.
///
/// Blank line, header, border, filter bar, border, column headings, border,
/// two detail lines, pagination bar, border, footer, trailing blank line.
const CHROME_ROWS: usize = 13;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Fetch state machine; owns the active filters and the loaded page.
    pub pagination: Pagination,

    /// Zero-based index into the loaded page's items.
    ///
    /// Reset to 0 whenever a new page is applied; wraps during navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Digits typed at the go-to-page prompt.
    pub goto_input: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial state. Nothing is fetched until the pagination
    /// machine is started.
    #[must_use]
    pub const fn new(filters: FilterSet, theme: Theme) -> Self {
        Self {
            pagination: Pagination::new(filters),
            selected_index: 0,
            input_mode: InputMode::Normal,
            goto_input: String::new(),
            theme,
        }
    }

    /// Characters of the loaded page; empty in every other phase.
    #[must_use]
    pub fn items(&self) -> &[CharacterSummary] {
        self.pagination.page().map_or(&[][..], |page| page.items.as_slice())
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        let len = self.items().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        let len = self.items().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_character(&self) -> Option<&CharacterSummary> {
        self.items().get(self.selected_index)
    }

    /// Computes a renderable UI view model from current state and pane size.
    ///
    /// # Windowing
    ///
    /// When the page has more items than fit, the visible window is centered
    /// on the selection and pinned to the end of the list near the bottom.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let items = self.items();
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self
            .selected_index
            .saturating_sub(available_rows / 2)
            .min(items.len());
        let visible_end = (visible_start + available_rows).min(items.len());
        if visible_end - visible_start < available_rows && items.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let name_filter = self.pagination.filters().name.as_str();
        let matcher = (!name_filter.is_empty()).then(SkimMatcherV2::default);

        let rows: Vec<CharacterRow> = items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, character)| {
                self.compute_row(character, visible_start + relative_idx, cols, matcher.as_ref())
            })
            .collect();

        UIViewModel {
            rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            details: self.compute_details(),
            pagination: self.compute_pagination(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
        }
    }

    fn compute_row(
        &self,
        character: &CharacterSummary,
        absolute_idx: usize,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> CharacterRow {
        let place_width = columns::place(cols);
        let name = truncate(&character.name, columns::NAME);
        let name_len = name.chars().count();

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            self.compute_highlight_ranges(&character.name, m)
                .into_iter()
                .filter(|(start, _)| *start < name_len)
                .map(|(start, end)| (start, end.min(name_len)))
                .collect()
        });

        CharacterRow {
            id: character.id,
            name,
            status: character.life_status(),
            species: truncate(&character.species, columns::SPECIES),
            origin: truncate(&character.origin.name, place_width),
            location: truncate(&character.location.name, place_width),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Character ranges of `text` matched by the name filter, with consecutive
    /// indices coalesced into `(start, end)` runs.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let query = &self.pagination.filters().name;
        let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.pagination.phase() {
            Phase::Loaded(page) if page.total_count == 1 => " Character Catalog (1 character) ".to_string(),
            Phase::Loaded(page) => format!(" Character Catalog ({} characters) ", page.total_count),
            _ => " Character Catalog ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let filters = self.pagination.filters();

        let mut fields: Vec<FilterFieldInfo> = TextField::ALL
            .iter()
            .map(|&field| FilterFieldInfo {
                label: field.label(),
                value: filters.text(field).to_string(),
                is_focused: self.input_mode == InputMode::Editing(field),
            })
            .collect();

        fields.push(FilterFieldInfo {
            label: "Status",
            value: filters.status.map_or_else(|| "All".to_string(), |s| s.to_string()),
            is_focused: false,
        });

        FilterBarInfo {
            fields,
            goto_input: (self.input_mode == InputMode::GotoPage).then(|| self.goto_input.clone()),
        }
    }

    fn compute_details(&self) -> Option<DetailInfo> {
        let character = self.selected_character()?;

        let entries = [
            ("Status", character.status.clone()),
            ("Type", character.kind.clone()),
            ("Gender", character.gender.clone()),
            ("Episodes", character.episode_count().to_string()),
            ("Image", character.image_url.clone()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();

        Some(DetailInfo { entries })
    }

    fn compute_pagination(&self) -> PaginationInfo {
        let total_pages = match self.pagination.phase() {
            Phase::Loaded(page) => page.total_pages,
            _ => self.pagination.known_pages().unwrap_or(0),
        };
        let enabled = |nav| self.pagination.target_for(nav).is_some();

        PaginationInfo {
            current_page: self.pagination.current_page(),
            total_pages,
            first_enabled: enabled(PageNav::First),
            previous_enabled: enabled(PageNav::Previous),
            next_enabled: enabled(PageNav::Next),
            last_enabled: enabled(PageNav::Last),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: select  h/l: page  g/G: first/last  p: go to  /: filter  s: status  c: clear  r: reload  q: quit"
            }
            InputMode::Editing(_) => "Type to filter  Tab/Shift+Tab: next/prev field  Enter/ESC: done",
            InputMode::GotoPage => "Type a page number  Enter: go  ESC: cancel",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let (kind, message, subtitle) = match self.pagination.phase() {
            Phase::Idle => (
                EmptyKind::Loading,
                "Waiting for web access".to_string(),
                "Grant the permission request to load characters".to_string(),
            ),
            Phase::Loading { ticket } => (
                EmptyKind::Loading,
                "Loading characters...".to_string(),
                format!("Page {}", ticket.request.page),
            ),
            Phase::Loaded(page) if page.is_empty() => (
                EmptyKind::NoResults,
                "No characters found".to_string(),
                "Try other filters".to_string(),
            ),
            Phase::Loaded(_) => return None,
            Phase::Errored { .. } => (
                EmptyKind::Error,
                "Error loading characters".to_string(),
                "Check your connection, then press r to retry".to_string(),
            ),
        };

        Some(EmptyState { kind, message, subtitle })
    }
}
