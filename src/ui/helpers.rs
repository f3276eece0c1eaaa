//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning,
//! width-bounded truncation, and search match highlighting with ANSI
//! escape sequence management.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates text to at most `max` characters, appending `...` when cut.
///
/// Operates on character counts, not bytes. Widths of 3 or less degrade to
/// a plain prefix.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the
/// provided character ranges. Highlighting is skipped entirely on selected
/// rows, where the selection background takes precedence.
///
/// Ranges are `(start, end)` character indices with exclusive end, as
/// produced by the view model.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Neon", 10), "Neon");
        assert_eq!(truncate("Neon", 4), "Neon");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("Cloudflare Workers", 10), "Cloudfl...");
    }

    #[test]
    fn truncate_handles_tiny_widths() {
        assert_eq!(truncate("Clerk", 2), "Cl");
    }
}
