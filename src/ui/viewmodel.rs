//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application
//! state. View models are optimized for rendering and contain pre-computed
//! display information like badge emphasis, highlight ranges, and selection
//! state. They carry no colors; components map emphasis to theme colors at
//! render time.

use crate::query::{SortDirection, SortKey};

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render one frame. Computed
/// from `AppState` via `compute_viewmodel`.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the visible window into the filtered, sorted collection.
    pub rows: Vec<ServiceRow>,

    /// Index of the cursor row within `rows`.
    pub selected_index: usize,

    /// Header information (title, production-ready counts).
    pub header: HeaderInfo,

    /// Stats bar information (counts, active sort).
    pub stats: StatsInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Empty state message, set when no records survive the filter.
    pub empty_state: Option<EmptyState>,

    /// Search bar state, set when in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Detail drawer content, set when a record is selected.
    pub detail: Option<DetailView>,
}

/// Visual weight of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeEmphasis {
    /// Present and first-party (official support, enabled flag).
    Strong,
    /// Present but community-maintained.
    Soft,
    /// Absent.
    Off,
}

/// A small labelled marker rendered in the FEATURES column and the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub emphasis: BadgeEmphasis,
}

/// Score color bucket, mirroring the badge thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBucket {
    High,
    Mid,
    Low,
}

/// Buckets a 0-100 score: 80 and above is high, 70 and above is mid.
#[must_use]
pub const fn score_bucket(score: u8) -> ScoreBucket {
    if score >= 80 {
        ScoreBucket::High
    } else if score >= 70 {
        ScoreBucket::Mid
    } else {
        ScoreBucket::Low
    }
}

/// Display information for a single record in the list window.
///
/// Used by both presentations: the table renders one line per row, the
/// cards view renders a three-line block. Fields the table does not show
/// (description, freshness) are pre-computed here so the card renderer
/// stays dumb.
#[derive(Debug, Clone)]
pub struct ServiceRow {
    /// Two-digit position label within the full visible list ("01", "02", ...).
    pub index_label: String,
    pub name: String,
    pub description: String,
    pub category_label: &'static str,
    pub tier: u8,
    pub score: u8,
    pub score_bucket: ScoreBucket,
    /// Freshness label ("updated 3d ago"), shown in the cards view.
    pub freshness: String,
    pub badges: Vec<Badge>,
    pub is_selected: bool,
    /// Character ranges of the name matching the active search query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Stats bar display information.
#[derive(Debug, Clone)]
pub struct StatsInfo {
    /// Number of records surviving the filter.
    pub showing: usize,
    /// Total number of records in the catalog.
    pub total: usize,
    /// Records per tier over the full catalog, indexed by tier minus one.
    pub tier_counts: [usize; 3],
    /// Active sort key.
    pub sort_key: SortKey,
    /// Active sort direction.
    pub sort_direction: SortDirection,
    /// Number of active filter dimensions.
    pub active_filters: usize,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown when no records survive the active filter.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// One capability entry in the detail drawer (MCP Server, Platform API, ...).
#[derive(Debug, Clone)]
pub struct CapabilityEntry {
    pub title: &'static str,
    pub badge: Badge,
    /// Supplementary text: the MCP docs URL, the API type, the CLI name.
    pub extra: Option<String>,
}

/// One row of the feature grid in the detail drawer.
#[derive(Debug, Clone)]
pub struct FeatureEntry {
    pub label: &'static str,
    pub value: String,
    pub is_positive: bool,
}

/// One resource link in the detail drawer.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pub label: &'static str,
    pub url: String,
}

/// Detail drawer content for the selected record.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub name: String,
    pub tier: u8,
    pub score: u8,
    pub score_bucket: ScoreBucket,
    pub category_label: &'static str,
    /// Whether this record is the recommended pick for its category.
    pub recommended: bool,
    pub description: String,
    pub freshness: String,
    pub capabilities: Vec<CapabilityEntry>,
    pub features: Vec<FeatureEntry>,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub best_for: String,
    pub resources: Vec<ResourceEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_buckets_follow_badge_thresholds() {
        assert_eq!(score_bucket(100), ScoreBucket::High);
        assert_eq!(score_bucket(80), ScoreBucket::High);
        assert_eq!(score_bucket(79), ScoreBucket::Mid);
        assert_eq!(score_bucket(70), ScoreBucket::Mid);
        assert_eq!(score_bucket(69), ScoreBucket::Low);
        assert_eq!(score_bucket(0), ScoreBucket::Low);
    }
}
