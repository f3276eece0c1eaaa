//! Header component renderer.
//!
//! Renders the dashboard title bar with the production-ready count from the
//! catalog metadata, left-aligned like the original masthead.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// Displays the title left-aligned with bold styling and theme colors,
/// padding the line to fill the entire terminal width.
///
/// Returns the next available row position.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(title_len)));

    print!("{}", Theme::reset());
    row + 1
}
