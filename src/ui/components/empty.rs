//! Placeholder shown in place of the table while loading, when the filters
//! match nothing, or after a failed fetch.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyKind, EmptyState};

/// Draws the message and its dimmed subtitle, centered, one blank line below
/// `row`. Returns the first row after the block.
///
/// Failures use `error_fg`; loading and no-results use `empty_state_fg`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let accent = match empty.kind {
        EmptyKind::Error => &theme.colors.error_fg,
        EmptyKind::Loading | EmptyKind::NoResults => &theme.colors.empty_state_fg,
    };

    position_cursor(row + 1, 1);
    print!("{}{}", Theme::bold(), Theme::fg(accent));
    print_centered(&empty.message, cols);

    position_cursor(row + 2, 1);
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered(&empty.subtitle, cols);

    row + 3
}

/// Prints `text` centered in a `cols`-wide line, then clears styling.
fn print_centered(text: &str, cols: usize) {
    let text = truncate(text, cols);
    let width = text.chars().count();
    let left = (cols - width) / 2;

    print!("{:left$}{text}{:right$}", "", "", right = cols - width - left);
    print!("{}", Theme::reset());
}
