//! Table component renderer.
//!
//! Renders the loaded page as a table: a status dot, then NAME, SPECIES,
//! ORIGIN and LOCATION columns. The selected row gets a full-width selection
//! background; name filter matches are highlighted on the other rows.

use crate::ui::helpers::{self, position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{columns, CharacterRow};

const STATUS_DOT: &str = "●";

/// Renders the column headings at `row` and returns the next available row.
///
/// # Example
///
/// ```text
///   NAME                          SPECIES         ORIGIN              LOCATION
/// ```
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let place = columns::place(cols);
    let gap = " ".repeat(columns::GAP);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(columns::STATUS));
    print_padded("NAME", columns::NAME);
    print!("{gap}");
    print_padded("SPECIES", columns::SPECIES);
    print!("{gap}");
    print_padded("ORIGIN", place);
    print!("{gap}");
    print_padded("LOCATION", cols.saturating_sub(columns::STATUS + columns::NAME + columns::SPECIES + place + columns::GAP * 3));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row`; returns the next available row.
pub fn render_table_rows(row: usize, items: &[CharacterRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single row.
///
/// # Styling Precedence
///
/// 1. Status dot always uses the status color
/// 2. Selection colors for the rest of a selected row
/// 3. Name match highlights on unselected rows
/// 4. Normal text color
///
/// The row is padded to the full width so the selection background is
/// continuous.
fn render_table_row(row: usize, item: &CharacterRow, theme: &Theme, cols: usize) -> usize {
    let place = columns::place(cols);
    let gap = " ".repeat(columns::GAP);

    let base_style = if item.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(row, 1);
    print!("{base_style}");
    print!("{}{STATUS_DOT}", Theme::fg(theme.colors.status(item.status)));
    print!("{base_style} ");

    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    print!("{base_style}");
    print!("{}", " ".repeat(columns::NAME.saturating_sub(item.name.chars().count())));

    print!("{gap}");
    print_padded(&item.species, columns::SPECIES);
    print!("{gap}");
    print_padded(&item.origin, place);
    print!("{gap}");
    print!("{}", item.location);

    let line_len = columns::STATUS
        + columns::NAME
        + columns::SPECIES
        + place
        + columns::GAP * 3
        + item.location.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
