//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with production-ready counts
//! - [`stats`]: Result counts, tier counts, active sort
//! - [`table`]: Service list as a six-column table
//! - [`cards`]: Service list as three-line blocks
//! - [`detail`]: Full-screen drawer for the selected record
//! - [`search`]: Search input box
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Empty state message
//!
//! # Layout Modes
//!
//! The module provides two high-level layout functions:
//!
//! - [`render_list_mode`]: Header + Stats + Table or Cards + Footer, with
//!   the search box inserted when a search is active
//! - [`render_detail_mode`]: Header + Drawer + Footer

mod cards;
mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod stats;
mod table;

pub use empty::render_empty_state;

use crate::app::modes::ViewMode;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use cards::render_cards;
use detail::render_detail;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use stats::render_stats;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/list, list/footer).
///
/// Returns the next available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the list layout (table or cards).
///
/// Layout structure:
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, search mode only]
/// [Stats]
/// [Column Headers - table only]
/// [Rows or Cards]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_list_mode(
    vm: &UIViewModel,
    theme: &Theme,
    view_mode: ViewMode,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    current_row = render_stats(current_row, &vm.stats, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        match view_mode {
            ViewMode::Table => {
                current_row = render_table_headers(current_row, theme);
                let _current_row = render_table_rows(current_row, &vm.rows, theme, cols);
            }
            ViewMode::Cards => {
                let _current_row = render_cards(current_row, &vm.rows, theme, cols);
            }
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the detail drawer layout for the selected record.
///
/// Layout structure:
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Drawer content]
/// [Border]
/// [Footer]
/// ```
pub fn render_detail_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let Some(detail) = &vm.detail else {
        return;
    };

    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    let _current_row = render_detail(current_row, detail, theme, cols, border_row);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
