//! Cards component renderer.
//!
//! Renders the service list as three-line blocks: a title line with tier
//! and score, a description line, and a badge line with the freshness
//! label. The cards view shows more of each record at the cost of fewer
//! records per screen; it consumes the same filtered and sorted rows as
//! the table.

use crate::ui::helpers::{self, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ServiceRow;

/// Indent for the description and badge lines.
const BODY_INDENT: usize = 4;

/// Renders all cards starting at the specified row.
///
/// Returns the next available row position.
pub fn render_cards(row: usize, items: &[ServiceRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_card(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single three-line card.
///
/// Only the title line carries the selection background; the body lines
/// stay dimmed so the cursor remains easy to track.
fn render_card(row: usize, item: &ServiceRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }

    print!("{:<4}", item.index_label);

    if !item.is_selected {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    if !item.is_selected {
        print!("{}", Theme::reset());
    }

    let name_len = item.name.chars().count();
    let title_tail = format!("  [{}]  T{}  {}", item.category_label, item.tier, item.score);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("{title_tail}");
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  [{}]  ", item.category_label);
        print!("{}", Theme::fg(theme.tier_fg(item.tier)));
        print!("T{}  ", item.tier);
        print!("{}", Theme::fg(theme.score_fg(item.score_bucket)));
        print!("{}", item.score);
    }

    let title_len = 4 + name_len + title_tail.chars().count();
    if item.is_selected {
        print!("{}", " ".repeat(cols.saturating_sub(title_len)));
    }
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(BODY_INDENT));
    print!(
        "{}",
        truncate(&item.description, cols.saturating_sub(BODY_INDENT + 1))
    );
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(BODY_INDENT));
    for badge in &item.badges {
        print!("{}", Theme::fg(theme.badge_fg(badge.emphasis)));
        print!("{}  ", badge.label);
    }
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", item.freshness);
    print!("{}", Theme::reset());

    row + 3
}
