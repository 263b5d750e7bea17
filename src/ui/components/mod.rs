//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns the
//! next free row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar with the total character count
//! - [`filter_bar`]: Active filters, or the go-to-page prompt
//! - [`table`]: Characters with status dot, NAME, SPECIES, ORIGIN, LOCATION
//! - [`empty`]: Loading, no-results and error messages
//! - [`details`]: Extra fields of the selected character
//! - [`pagination`]: `<< < Page x of y > >>` controls
//! - [`footer`]: Keybinding hints

mod details;
mod empty;
mod filter_bar;
mod footer;
mod header;
mod pagination;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use details::render_details;
use empty::render_empty_state;
use filter_bar::render_filter_bar;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full catalog layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Filter bar]
/// [Border]
/// [Column headings]
/// [Table rows | empty state]
/// [Blank padding to fill screen]
/// [Border]
/// [Details - 2 lines]
/// [Pagination bar]
/// [Border]
/// [Footer]
/// ```
///
/// The bottom block is anchored to the last rows of the pane regardless of
/// how many table rows were drawn.
pub fn render_catalog(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_table_headers(current_row, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.rows, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let bottom_border = footer_row.saturating_sub(1);
    let pagination_row = bottom_border.saturating_sub(1);
    let details_row = pagination_row.saturating_sub(2);
    let details_border = details_row.saturating_sub(1);

    render_border(details_border, &theme.colors.border, cols);
    render_details(details_row, vm.details.as_ref(), theme, cols);
    render_pagination(pagination_row, &vm.pagination, theme, cols);
    render_border(bottom_border, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
