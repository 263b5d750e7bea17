//! Pagination bar renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders `<<  <  Page x of y  >  >>` centered at `row`.
///
/// Enabled controls use `pagination_active`, disabled ones
/// `pagination_disabled`. Returns the next available row.
pub fn render_pagination(row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let position = position_label(info);
    let controls = [
        ("<<", info.first_enabled),
        ("<", info.previous_enabled),
        (position.as_str(), true),
        (">", info.next_enabled),
        (">>", info.last_enabled),
    ];

    let width: usize = controls.iter().map(|(text, _)| text.chars().count()).sum::<usize>() + 2 * (controls.len() - 1);
    let padding = cols.saturating_sub(width) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    for (idx, (text, enabled)) in controls.iter().enumerate() {
        if idx > 0 {
            print!("  ");
        }
        let color = if *enabled {
            &theme.colors.pagination_active
        } else {
            &theme.colors.pagination_disabled
        };
        print!("{}{}{text}{}", Theme::bold(), Theme::fg(color), Theme::reset());
    }
    print!("{}", " ".repeat(cols.saturating_sub(padding + width)));
    row + 1
}

fn position_label(info: &PaginationInfo) -> String {
    if info.total_pages == 0 {
        "No pages".to_string()
    } else {
        format!("Page {} of {}", info.current_page, info.total_pages)
    }
}
