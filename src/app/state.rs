//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! dashboard, along with methods for query application, cursor management,
//! and UI view model generation. It is the single source of truth for all
//! transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the immutable catalog) from derived state
//! (the visible record list, the cursor) to maintain consistency and
//! simplify state transitions. The interaction handler is the only writer;
//! view models are computed on demand from state snapshots.
//!
//! # State Components
//!
//! - **Catalog**: the immutable record collection plus aggregate metadata
//! - **Filters/Sort**: the active [`FilterSpec`] and [`SortSpec`]
//! - **Visible**: the filtered, sorted window source, recomputed by
//!   [`apply_query`](AppState::apply_query)
//! - **Cursor**: current position within the visible list
//! - **Selection**: id of the record open in the detail drawer, if any
//! - **Modes**: input mode and list presentation

use super::modes::{InputMode, SearchFocus, ViewMode};
use crate::catalog::Catalog;
use crate::domain::{ServiceRecord, SupportLevel};
use crate::query::{filter_services, sort_services, FilterSpec, SortSpec};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    score_bucket, Badge, BadgeEmphasis, CapabilityEntry, DetailView, EmptyState, FeatureEntry,
    FooterInfo, HeaderInfo, ResourceEntry, SearchBarInfo, ServiceRow, StatsInfo, UIViewModel,
};

/// Canonical feature filter names, in keyboard shortcut order.
pub const FEATURE_FILTERS: [&str; 4] = ["MCP", "CLI", "OAuth", "Webhooks"];

/// Maximum characters of a record name shown in the table NAME column.
const NAME_COLUMN_WIDTH: usize = 24;

/// Central application state container.
///
/// Holds all transient UI state including the query specification, cursor,
/// selection, and mode information. Mutated by the event handler in
/// response to user input. View models are computed on demand.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The immutable record collection and aggregate metadata.
    pub catalog: Catalog,

    /// Records surviving the active filter, in active sort order.
    ///
    /// Recomputed by `apply_query()` after every filter or sort change.
    /// Used for rendering and cursor bounds checking.
    pub visible: Vec<ServiceRecord>,

    /// Zero-based cursor index within `visible`.
    ///
    /// Clamped to valid bounds by `apply_query()`. Wraps around during
    /// navigation via `move_cursor_up/down()`.
    pub cursor: usize,

    /// Active filter specification. Never persisted.
    pub filters: FilterSpec,

    /// Active sort key and direction.
    pub sort: SortSpec,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current list presentation.
    pub view_mode: ViewMode,

    /// Id of the record open in the detail drawer, `None` when closed.
    ///
    /// Holding the id rather than a copy keeps the catalog the single
    /// owner of record data; the drawer resolves it on render.
    pub selected: Option<String>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state over a loaded catalog.
    ///
    /// Starts in normal mode, table presentation, with an empty filter and
    /// the default sort (score descending) already applied.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        let mut state = Self {
            catalog,
            visible: vec![],
            cursor: 0,
            filters: FilterSpec::default(),
            sort: SortSpec::default(),
            input_mode: InputMode::Normal,
            view_mode: ViewMode::Table,
            selected: None,
            theme,
        };
        state.apply_query();
        state
    }

    /// Moves the cursor down by one position, wrapping to the top at the end.
    ///
    /// No-op if the visible list is empty.
    pub fn move_cursor_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.visible.len();
    }

    /// Moves the cursor up by one position, wrapping to the bottom at the top.
    ///
    /// No-op if the visible list is empty.
    pub fn move_cursor_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.visible.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Returns the record under the cursor, if any.
    #[must_use]
    pub fn cursor_service(&self) -> Option<&ServiceRecord> {
        self.visible.get(self.cursor)
    }

    /// Returns the record open in the detail drawer, if any.
    ///
    /// Resolves the stored id against the catalog; a stale id (which cannot
    /// occur while the catalog is immutable) would simply yield `None`.
    #[must_use]
    pub fn selected_service(&self) -> Option<&ServiceRecord> {
        self.selected
            .as_deref()
            .and_then(|id| self.catalog.service_by_id(id))
    }

    /// Recomputes the visible list from the catalog and the active query.
    ///
    /// Runs the filter evaluator, then the sorter, then clamps the cursor
    /// to the new bounds. Called after every filter or sort change.
    pub fn apply_query(&mut self) {
        let _span = tracing::debug_span!(
            "apply_query",
            total = self.catalog.len(),
            sort_key = self.sort.key.label(),
        )
        .entered();

        let filtered = filter_services(self.catalog.services(), &self.filters);
        self.visible = sort_services(&filtered, self.sort);

        if self.visible.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.visible.len() - 1);
        }

        tracing::debug!(visible = self.visible.len(), "query applied");
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Handles windowing (showing a subset of results centered on the
    /// cursor), substring match highlighting, and empty state handling.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        if self.visible.is_empty() {
            return UIViewModel {
                rows: vec![],
                selected_index: 0,
                header: self.compute_header(),
                stats: self.compute_stats(),
                footer: self.compute_footer(),
                empty_state: Some(EmptyState {
                    message: "No services match filters".to_string(),
                    subtitle: "Press Esc to clear all filters".to_string(),
                }),
                search_bar: self.compute_search_bar(),
                detail: self.compute_detail(),
            };
        }

        let capacity = self.window_capacity(rows);

        let mut visible_start = self.cursor.saturating_sub(capacity / 2);
        let visible_end = (visible_start + capacity).min(self.visible.len());

        let actual_count = visible_end - visible_start;
        if actual_count < capacity && self.visible.len() >= capacity {
            visible_start = visible_end.saturating_sub(capacity);
        }

        let display_rows: Vec<ServiceRow> = self.visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, record)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_row(record, absolute_idx)
            })
            .collect();

        UIViewModel {
            rows: display_rows,
            selected_index: self.cursor.saturating_sub(visible_start),
            header: self.compute_header(),
            stats: self.compute_stats(),
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            detail: self.compute_detail(),
        }
    }

    /// Computes a display row for a single record in the visible window.
    fn compute_row(&self, record: &ServiceRecord, absolute_idx: usize) -> ServiceRow {
        let name = if record.name.chars().count() > NAME_COLUMN_WIDTH {
            let truncated: String = record.name.chars().take(NAME_COLUMN_WIDTH - 3).collect();
            format!("{truncated}...")
        } else {
            record.name.clone()
        };

        let highlight_ranges =
            if matches!(self.input_mode, InputMode::Search(_)) && !self.filters.search.is_empty() {
                compute_highlight_ranges(&name, &self.filters.search)
            } else {
                vec![]
            };

        ServiceRow {
            index_label: format!("{:02}", absolute_idx + 1),
            name,
            description: record.metadata.description.clone(),
            category_label: record.category.label(),
            tier: record.tier,
            score: record.score,
            score_bucket: score_bucket(record.score),
            freshness: record.updated_label(),
            badges: list_badges(record),
            is_selected: absolute_idx == self.cursor,
            highlight_ranges,
        }
    }

    /// Computes header information from catalog metadata.
    fn compute_header(&self) -> HeaderInfo {
        let metadata = self.catalog.metadata();
        HeaderInfo {
            title: format!(
                " STACKDASH ({}/{} production ready) ",
                metadata.production_ready, metadata.total_services
            ),
        }
    }

    /// Computes the stats bar: counts, active sort, active filter dimensions.
    fn compute_stats(&self) -> StatsInfo {
        let active_filters = usize::from(!self.filters.tiers.is_empty())
            + usize::from(!self.filters.categories.is_empty())
            + usize::from(!self.filters.features.is_empty())
            + usize::from(!self.filters.search.is_empty());

        StatsInfo {
            showing: self.visible.len(),
            total: self.catalog.len(),
            tier_counts: self.catalog.tier_counts(),
            sort_key: self.sort.key,
            sort_direction: self.sort.direction,
            active_filters,
        }
    }

    /// Computes footer keybinding hints for the current mode combination.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.selected.is_some() {
            "ESC/q: close  y: export JSON".to_string()
        } else {
            match (self.input_mode, self.view_mode) {
                (InputMode::Search(SearchFocus::Typing), _) => {
                    "ESC: exit search  Tab: results  Enter: details  Ctrl+n/p: navigate  Type to filter"
                        .to_string()
                }
                (InputMode::Search(SearchFocus::Navigating), _) => {
                    "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: details"
                        .to_string()
                }
                (InputMode::Category, _) => {
                    "1:auth 2:database 3:deploy 4:jobs 5:email 6:files 7:messaging 8:edge 9:code  ESC: done"
                        .to_string()
                }
                (InputMode::Feature, _) => {
                    "1:MCP 2:CLI 3:OAuth 4:Webhooks  ESC: done".to_string()
                }
                (InputMode::Normal, ViewMode::Table) => {
                    "j/k: move  Enter: details  /: search  1-3: tier  c: category  f: feature  s/n/t: sort  v: cards  q: quit"
                        .to_string()
                }
                (InputMode::Normal, ViewMode::Cards) => {
                    "j/k: move  Enter: details  /: search  1-3: tier  c: category  f: feature  s/n/t: sort  v: table  q: quit"
                        .to_string()
                }
            }
        };

        FooterInfo { keybindings }
    }

    /// Computes search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.filters.search.clone(),
            })
        } else {
            None
        }
    }

    /// Computes the detail drawer content for the selected record.
    fn compute_detail(&self) -> Option<DetailView> {
        let record = self.selected_service()?;

        let mut capabilities = vec![
            CapabilityEntry {
                title: "MCP Server",
                badge: support_badge("MCP", record.capabilities.mcp),
                extra: record.capabilities.mcp_url.clone(),
            },
            CapabilityEntry {
                title: "Platform API",
                badge: bool_badge("API", record.capabilities.platform_api),
                extra: record.capabilities.api_type.map(|t| t.as_str().to_string()),
            },
            CapabilityEntry {
                title: "CLI Tool",
                badge: support_badge("CLI", record.capabilities.cli),
                extra: record.capabilities.cli_name.clone(),
            },
        ];
        if record.capabilities.oauth {
            capabilities.push(CapabilityEntry {
                title: "OAuth",
                badge: bool_badge("OAuth", true),
                extra: None,
            });
        }
        if record.features.webhooks {
            capabilities.push(CapabilityEntry {
                title: "Webhooks",
                badge: bool_badge("Webhooks", true),
                extra: None,
            });
        }

        let features = vec![
            FeatureEntry {
                label: "webhooks",
                value: yes_no(record.features.webhooks),
                is_positive: record.features.webhooks,
            },
            FeatureEntry {
                label: "agent_rules",
                value: yes_no(record.features.agent_rules),
                is_positive: record.features.agent_rules,
            },
            FeatureEntry {
                label: "error_handling",
                value: record.features.error_handling.as_str().to_string(),
                is_positive: !matches!(
                    record.features.error_handling,
                    crate::domain::ErrorHandling::Basic
                ),
            },
            FeatureEntry {
                label: "rate_limits",
                value: yes_no(record.features.rate_limits),
                is_positive: record.features.rate_limits,
            },
        ];

        let mut resources = vec![
            ResourceEntry {
                label: "homepage",
                url: record.metadata.homepage.clone(),
            },
            ResourceEntry {
                label: "docs",
                url: record.metadata.docs.clone(),
            },
        ];
        let links = &record.links;
        for (label, url) in [
            ("mcp docs", &links.mcp_docs),
            ("api docs", &links.api_docs),
            ("cli docs", &links.cli_docs),
            ("github", &links.github),
            ("community", &links.community),
        ] {
            if let Some(url) = url {
                resources.push(ResourceEntry {
                    label,
                    url: url.clone(),
                });
            }
        }
        if let Some(guides) = &links.guides {
            for guide in guides {
                resources.push(ResourceEntry {
                    label: "guide",
                    url: guide.clone(),
                });
            }
        }

        Some(DetailView {
            name: record.name.clone(),
            tier: record.tier,
            score: record.score,
            score_bucket: score_bucket(record.score),
            category_label: record.category.label(),
            recommended: self.catalog.recommended_for(record.category) == record.name,
            description: record.metadata.description.clone(),
            freshness: record.updated_label(),
            capabilities,
            features,
            strengths: record.strengths.clone(),
            gaps: record.gaps.clone(),
            best_for: record.best_for.clone(),
            resources,
        })
    }

    /// Number of records the visible window can hold for the terminal size.
    ///
    /// Accounts for chrome (blank line, header, borders, stats bar, column
    /// headers, footer, search box when active) and the per-record height of
    /// the active presentation.
    fn window_capacity(&self, total_rows: usize) -> usize {
        let mut chrome = match self.view_mode {
            // blank + header + border + stats + column headers + border + footer
            ViewMode::Table => 7,
            ViewMode::Cards => 6,
        };
        if matches!(self.input_mode, InputMode::Search(_)) {
            chrome += 3;
        }

        let available = total_rows.saturating_sub(chrome);
        let per_item = match self.view_mode {
            ViewMode::Table => 1,
            ViewMode::Cards => 3,
        };

        (available / per_item).max(1)
    }
}

/// Formats a boolean as the drawer's yes/no string.
fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

/// Builds a badge for an official/community/none support level.
fn support_badge(prefix: &str, level: SupportLevel) -> Badge {
    match level {
        SupportLevel::Official => Badge {
            label: format!("{prefix} \u{2713}"),
            emphasis: BadgeEmphasis::Strong,
        },
        SupportLevel::Community => Badge {
            label: format!("{prefix} (C)"),
            emphasis: BadgeEmphasis::Soft,
        },
        SupportLevel::None => Badge {
            label: format!("{prefix} \u{2717}"),
            emphasis: BadgeEmphasis::Off,
        },
    }
}

/// Builds a badge for a boolean flag.
fn bool_badge(prefix: &str, value: bool) -> Badge {
    if value {
        Badge {
            label: format!("{prefix} \u{2713}"),
            emphasis: BadgeEmphasis::Strong,
        }
    } else {
        Badge {
            label: format!("{prefix} \u{2717}"),
            emphasis: BadgeEmphasis::Off,
        }
    }
}

/// Builds the FEATURES column badges for a record.
///
/// MCP, API, and CLI badges always appear; OAuth and Webhooks badges only
/// when set.
fn list_badges(record: &ServiceRecord) -> Vec<Badge> {
    let mut badges = vec![
        support_badge("MCP", record.capabilities.mcp),
        bool_badge("API", record.capabilities.platform_api),
        support_badge("CLI", record.capabilities.cli),
    ];
    if record.capabilities.oauth {
        badges.push(bool_badge("OAuth", true));
    }
    if record.features.webhooks {
        badges.push(bool_badge("Webhooks", true));
    }
    badges
}

/// Computes character index ranges of every occurrence of `query` in `text`.
///
/// Matching is case-insensitive; ranges are `(start, end)` character
/// indices with exclusive end, suitable for the highlight renderer.
fn compute_highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return vec![];
    }

    let lower = text.to_lowercase();
    let query_chars = query.chars().count();
    let mut ranges = Vec::new();
    let mut offset = 0;

    while let Some(pos) = lower[offset..].find(&query) {
        let byte_start = offset + pos;
        let char_start = lower[..byte_start].chars().count();
        ranges.push((char_start, char_start + query_chars));
        offset = byte_start + query.len();
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SortDirection, SortKey};

    fn state() -> AppState {
        AppState::new(Catalog::bundled().unwrap(), Theme::default())
    }

    #[test]
    fn new_state_shows_everything_sorted_by_score_desc() {
        let state = state();
        assert_eq!(state.visible.len(), state.catalog.len());
        assert!(state
            .visible
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut state = state();
        state.move_cursor_up();
        assert_eq!(state.cursor, state.visible.len() - 1);
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn apply_query_clamps_cursor() {
        let mut state = state();
        state.cursor = state.visible.len() - 1;
        state.filters.toggle_tier(3);
        state.apply_query();
        assert!(state.cursor < state.visible.len());
    }

    #[test]
    fn empty_result_produces_empty_state() {
        let mut state = state();
        state.filters.search = "zzz-no-such-service".to_string();
        state.apply_query();

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.rows.is_empty());
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn viewmodel_marks_cursor_row_selected() {
        let mut state = state();
        state.move_cursor_down();
        let vm = state.compute_viewmodel(40, 100);
        assert!(vm.rows[vm.selected_index].is_selected);
        assert_eq!(vm.rows[vm.selected_index].index_label, "02");
    }

    #[test]
    fn search_mode_exposes_search_bar_and_highlights() {
        let mut state = state();
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.filters.search = "clerk".to_string();
        state.apply_query();

        let vm = state.compute_viewmodel(24, 80);
        let bar = vm.search_bar.expect("search bar should be visible");
        assert_eq!(bar.query, "clerk");

        let row = vm
            .rows
            .iter()
            .find(|r| r.name == "Clerk")
            .expect("Clerk should match its own name");
        assert_eq!(row.highlight_ranges, vec![(0, 5)]);
    }

    #[test]
    fn selection_resolves_through_the_catalog() {
        let mut state = state();
        state.selected = Some("resend".to_string());
        let service = state.selected_service().unwrap();
        assert_eq!(service.name, "Resend");

        let vm = state.compute_viewmodel(24, 80);
        let detail = vm.detail.unwrap();
        assert_eq!(detail.name, "Resend");
        assert!(detail.recommended);
        assert!(detail.capabilities.iter().any(|c| c.title == "Webhooks"));

        state.selected = None;
        assert!(state.selected_service().is_none());
    }

    #[test]
    fn stats_track_filters_and_sort() {
        let mut state = state();
        state.filters.toggle_tier(1);
        state.filters.search = "e".to_string();
        state.sort.toggle(SortKey::Name);
        state.apply_query();

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.stats.total, state.catalog.len());
        assert_eq!(vm.stats.showing, state.visible.len());
        assert_eq!(vm.stats.active_filters, 2);
        assert_eq!(vm.stats.sort_key, SortKey::Name);
        assert_eq!(vm.stats.sort_direction, SortDirection::Desc);
        assert_eq!(vm.stats.tier_counts.iter().sum::<usize>(), vm.stats.total);
    }

    #[test]
    fn window_capacity_shrinks_for_cards() {
        let mut state = state();
        let table_vm = state.compute_viewmodel(13, 80);
        state.view_mode = ViewMode::Cards;
        let cards_vm = state.compute_viewmodel(13, 80);
        assert!(cards_vm.rows.len() < table_vm.rows.len());
        assert!(!cards_vm.rows.is_empty());
    }

    #[test]
    fn highlight_ranges_cover_repeated_matches() {
        let ranges = compute_highlight_ranges("Cloudflare Workers", "o");
        assert_eq!(ranges, vec![(2, 3), (12, 13)]);
        assert!(compute_highlight_ranges("Neon", "xyz").is_empty());
    }
}
