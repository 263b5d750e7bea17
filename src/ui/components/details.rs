//! Detail strip for the selected character.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Labels moved to the second line because their values are long.
const SECOND_LINE: &[&str] = &["Image"];

/// Renders two detail lines at `row` and `row + 1`; returns `row + 2`.
///
/// With nothing selected both lines are cleared.
pub fn render_details(row: usize, details: Option<&DetailInfo>, theme: &Theme, cols: usize) -> usize {
    let (second, first): (Vec<_>, Vec<_>) = details
        .map(|d| d.entries.iter().partition(|(label, _)| SECOND_LINE.contains(label)))
        .unwrap_or_default();

    render_line(row, &first, theme, cols);
    render_line(row + 1, &second, theme, cols);
    row + 2
}

fn render_line(row: usize, entries: &[&(&'static str, String)], theme: &Theme, cols: usize) {
    position_cursor(row, 1);

    let mut used = 0;
    for (label, value) in entries {
        let label_part = format!(" {label}: ");
        let room = cols.saturating_sub(used + label_part.chars().count() + 1);
        if room == 0 {
            break;
        }
        let value_part = truncate(value, room);

        print!("{}{label_part}", Theme::fg(&theme.colors.text_dim));
        print!("{}{value_part} ", Theme::fg(&theme.colors.text_normal));
        used += label_part.chars().count() + value_part.chars().count() + 1;
    }

    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(used)));
}
