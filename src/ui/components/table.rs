//! Table component renderer.
//!
//! Renders the service list as a six-column table: position, name,
//! category, tier, score, and feature badges. Supports selection
//! highlighting and search match highlighting in the name column.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ServiceRow;

/// Width of the position column, including gap.
const IDX_WIDTH: usize = 4;
/// Width of the SERVICE column, including gap.
const NAME_WIDTH: usize = 26;
/// Width of the CATEGORY column, including gap.
const CATEGORY_WIDTH: usize = 11;
/// Width of the TIER column, including gap.
const TIER_WIDTH: usize = 6;
/// Width of the SCORE column, including gap.
const SCORE_WIDTH: usize = 7;

/// Renders the table column headers at the specified row.
///
/// Returns the next available row position.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<IDX_WIDTH$}{:<NAME_WIDTH$}{:<CATEGORY_WIDTH$}{:<TIER_WIDTH$}{:<SCORE_WIDTH$}{}",
        "##", "SERVICE", "CATEGORY", "TIER", "SCORE", "FEATURES"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// Returns the next available row position.
pub fn render_table_rows(row: usize, items: &[ServiceRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single table row at the specified row position.
///
/// Selection takes precedence over all per-column colors: a selected row is
/// drawn entirely in the selection colors and padded to the terminal width.
fn render_table_row(row: usize, item: &ServiceRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }

    print!("{:<IDX_WIDTH$}", item.index_label);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    let name_len = item.name.chars().count();
    print!("{}", " ".repeat(NAME_WIDTH.saturating_sub(name_len)));

    print!("{:<CATEGORY_WIDTH$}", item.category_label);

    if !item.is_selected {
        print!("{}", Theme::fg(theme.tier_fg(item.tier)));
    }
    print!("{:<TIER_WIDTH$}", format!("T{}", item.tier));

    if !item.is_selected {
        print!("{}", Theme::fg(theme.score_fg(item.score_bucket)));
    }
    print!("{:<SCORE_WIDTH$}", item.score);

    let mut badges_len = 0;
    for badge in &item.badges {
        if !item.is_selected {
            print!("{}", Theme::fg(theme.badge_fg(badge.emphasis)));
        }
        print!("{}  ", badge.label);
        badges_len += badge.label.chars().count() + 2;
    }

    let line_len =
        IDX_WIDTH + NAME_WIDTH + CATEGORY_WIDTH + TIER_WIDTH + SCORE_WIDTH + badges_len;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
