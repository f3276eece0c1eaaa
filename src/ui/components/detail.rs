//! Detail drawer component renderer.
//!
//! Renders the full-screen detail view for the selected record: title line
//! with tier and score, description, capabilities, the feature grid,
//! strengths, gaps, best-for, and resource links. Sections that would fall
//! below the footer are cut rather than scrolled.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Indent for section content lines.
const CONTENT_INDENT: usize = 2;

/// Renders the detail drawer between the given row and `bottom` (exclusive).
///
/// Returns the next available row position. Content past `bottom` is
/// dropped; the caller reserves the footer rows below it.
#[allow(clippy::too_many_lines)]
pub fn render_detail(row: usize, detail: &DetailView, theme: &Theme, cols: usize, bottom: usize) -> usize {
    let mut current_row = row;

    // Title: name, tier, category, score.
    if current_row < bottom {
        position_cursor(current_row, 1);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", detail.name);
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(theme.tier_fg(detail.tier)));
        print!("  Tier {}", detail.tier);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  [{}]", detail.category_label);
        print!("{}", Theme::fg(theme.score_fg(detail.score_bucket)));
        print!("  {}/100", detail.score);
        if detail.recommended {
            print!("{}", Theme::fg(&theme.colors.badge_strong_fg));
            print!("  recommended pick");
        }
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  {}", detail.freshness);
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if current_row < bottom {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", truncate(&detail.description, cols.saturating_sub(1)));
        print!("{}", Theme::reset());
        current_row += 2;
    }

    current_row = render_section_title(current_row, "CAPABILITIES", theme, bottom);
    for entry in &detail.capabilities {
        if current_row >= bottom {
            break;
        }
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(CONTENT_INDENT));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{:<14}", entry.title);
        print!("{}", Theme::fg(theme.badge_fg(entry.badge.emphasis)));
        print!("{:<14}", entry.badge.label);
        if let Some(extra) = &entry.extra {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{}", truncate(extra, cols.saturating_sub(CONTENT_INDENT + 28)));
        }
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row += 1;

    current_row = render_section_title(current_row, "FEATURES", theme, bottom);
    for entry in &detail.features {
        if current_row >= bottom {
            break;
        }
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(CONTENT_INDENT));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{:<16}", entry.label);
        if entry.is_positive {
            print!("{}", Theme::fg(&theme.colors.badge_strong_fg));
        }
        print!("{}", entry.value);
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row += 1;

    if !detail.strengths.is_empty() {
        current_row = render_section_title(current_row, "STRENGTHS", theme, bottom);
        current_row = render_numbered_list(
            current_row,
            &detail.strengths,
            &theme.colors.badge_strong_fg,
            theme,
            cols,
            bottom,
        );
        current_row += 1;
    }

    if !detail.gaps.is_empty() {
        current_row = render_section_title(current_row, "GAPS", theme, bottom);
        current_row = render_numbered_list(
            current_row,
            &detail.gaps,
            &theme.colors.tier3_fg,
            theme,
            cols,
            bottom,
        );
        current_row += 1;
    }

    current_row = render_section_title(current_row, "BEST FOR", theme, bottom);
    if current_row < bottom {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(CONTENT_INDENT));
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!(
            "{}",
            truncate(&detail.best_for, cols.saturating_sub(CONTENT_INDENT + 1))
        );
        print!("{}", Theme::reset());
        current_row += 2;
    }

    current_row = render_section_title(current_row, "RESOURCES", theme, bottom);
    for resource in &detail.resources {
        if current_row >= bottom {
            break;
        }
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(CONTENT_INDENT));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{:<10}", resource.label);
        print!("{}", Theme::fg(&theme.colors.empty_state_fg));
        print!(
            "{}",
            truncate(&resource.url, cols.saturating_sub(CONTENT_INDENT + 11))
        );
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

/// Renders an uppercase section title, returning the next row.
fn render_section_title(row: usize, title: &str, theme: &Theme, bottom: usize) -> usize {
    if row >= bottom {
        return row;
    }
    position_cursor(row, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{title}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a numbered list with colored indices, returning the next row.
fn render_numbered_list(
    row: usize,
    items: &[String],
    index_color: &str,
    theme: &Theme,
    cols: usize,
    bottom: usize,
) -> usize {
    let mut current_row = row;
    for (idx, item) in items.iter().enumerate() {
        if current_row >= bottom {
            break;
        }
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(CONTENT_INDENT));
        print!("{}", Theme::fg(index_color));
        print!("{:02} ", idx + 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!(
            "{}",
            truncate(item, cols.saturating_sub(CONTENT_INDENT + 4))
        );
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}
