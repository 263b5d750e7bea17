//! Filter bar component renderer.
//!
//! One line listing every filter as `Label: value`. While a field is being
//! edited its value is drawn in the focus color with a trailing cursor. While
//! the go-to-page prompt is open the line shows the prompt instead.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterBarInfo, FilterFieldInfo};

const SEPARATOR: &str = "  │  ";
const CURSOR: &str = "▏";

/// Renders the filter bar at `row` and returns the next available row.
///
/// # Layout
///
/// ```text
///  Name: rick  │  Species: -  │  Type: -  │  Gender: -  │  Status: Alive
/// ```
///
/// Unset fields show `-`. Fields that do not fit in `cols` are dropped from
/// the right.
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if let Some(input) = &bar.goto_input {
        let prompt = " Go to page: ";
        print!("{}", Theme::fg(&theme.colors.filter_label));
        print!("{prompt}");
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.filter_focus));
        print!("{input}{CURSOR}");
        print!("{}", Theme::reset());
        let used = prompt.chars().count() + input.chars().count() + 1;
        print!("{}", " ".repeat(cols.saturating_sub(used)));
        return row + 1;
    }

    let mut used = 1;
    print!(" ");
    for (idx, field) in bar.fields.iter().enumerate() {
        let separator_len = if idx == 0 { 0 } else { SEPARATOR.chars().count() };
        let width = separator_len + field_width(field);
        if used + width > cols {
            break;
        }
        if idx > 0 {
            print!("{}{SEPARATOR}", Theme::fg(&theme.colors.border));
        }
        render_field(field, theme);
        used += width;
    }

    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

fn display_value(field: &FilterFieldInfo) -> &str {
    if field.value.is_empty() && !field.is_focused {
        "-"
    } else {
        &field.value
    }
}

fn field_width(field: &FilterFieldInfo) -> usize {
    let cursor = usize::from(field.is_focused);
    field.label.chars().count() + 2 + display_value(field).chars().count() + cursor
}

fn render_field(field: &FilterFieldInfo, theme: &Theme) {
    print!("{}{}: ", Theme::fg(&theme.colors.filter_label), field.label);

    if field.is_focused {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.filter_focus));
        print!("{}{CURSOR}", display_value(field));
        print!("{}", Theme::reset());
    } else {
        print!("{}{}", Theme::fg(&theme.colors.text_normal), display_value(field));
    }
}
