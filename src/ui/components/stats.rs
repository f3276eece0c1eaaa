//! Stats bar component renderer.
//!
//! Renders the line below the header summarizing the query result: how many
//! records survive the filter, the per-tier counts over the full catalog,
//! the active sort, and how many filter dimensions are engaged.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatsInfo;

/// Renders the stats bar at the specified row.
///
/// Layout:
///
/// ```text
/// Showing 8 of 12 | T1: 6  T2: 4  T3: 2 | sort: score v | filters: 2
/// ```
///
/// Tier counts use the tier colors; the rest uses dimmed text. The filters
/// segment only appears when at least one dimension is active.
///
/// Returns the next available row position.
pub fn render_stats(row: usize, stats: &StatsInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut printed = 0;

    print!("{}", Theme::fg(&theme.colors.text_dim));
    let showing = format!("Showing {} of {} | ", stats.showing, stats.total);
    print!("{showing}");
    printed += showing.chars().count();

    for (idx, count) in stats.tier_counts.iter().enumerate() {
        let tier = u8::try_from(idx + 1).unwrap_or(3);
        let segment = format!("T{tier}: {count}  ");
        print!("{}", Theme::fg(theme.tier_fg(tier)));
        print!("{segment}");
        printed += segment.chars().count();
    }

    print!("{}", Theme::fg(&theme.colors.text_dim));
    let sort = format!(
        "| sort: {} {}",
        stats.sort_key.label(),
        stats.sort_direction.arrow()
    );
    print!("{sort}");
    printed += sort.chars().count();

    if stats.active_filters > 0 {
        let filters = format!(" | filters: {}", stats.active_filters);
        print!("{filters}");
        printed += filters.chars().count();
    }

    print!("{}", " ".repeat(cols.saturating_sub(printed)));
    print!("{}", Theme::reset());
    row + 1
}
