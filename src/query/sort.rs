//! Sorting over the filtered service collection.
//!
//! This module implements the sort half of the query layer: a total order
//! over records by score, name, or tier, in either direction. The sort is
//! stable, so records with equal keys keep the relative order the filter
//! produced.

use std::cmp::Ordering;

use crate::domain::ServiceRecord;

/// Sortable column of the service collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Numeric score, 0-100.
    Score,
    /// Display name, compared case-insensitively.
    Name,
    /// Tier ordinal, 1 is best.
    Tier,
}

impl SortKey {
    /// Returns the label shown in the stats bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Name => "name",
            Self::Tier => "tier",
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Returns the arrow glyph shown next to the active sort key.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "\u{2191}",
            Self::Desc => "\u{2193}",
        }
    }
}

/// Active sort key and direction.
///
/// The default matches the dashboard's initial presentation: score,
/// descending.
///
/// # Examples
///
/// ```
/// use stackdash::query::{SortDirection, SortKey, SortSpec};
///
/// let mut spec = SortSpec::default();
/// assert_eq!(spec.key, SortKey::Score);
/// assert_eq!(spec.direction, SortDirection::Desc);
///
/// // Re-selecting the active key flips direction.
/// spec.toggle(SortKey::Score);
/// assert_eq!(spec.direction, SortDirection::Asc);
///
/// // Selecting a new key resets to descending.
/// spec.toggle(SortKey::Name);
/// assert_eq!(spec.key, SortKey::Name);
/// assert_eq!(spec.direction, SortDirection::Desc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Score,
            direction: SortDirection::Desc,
        }
    }
}

impl SortSpec {
    /// Applies the column-header toggle convention: selecting the active
    /// key flips direction, selecting a new key resets to descending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Desc;
        }
    }
}

/// Compares two records by the given key in ascending direction.
fn compare(a: &ServiceRecord, b: &ServiceRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Score => a.score.cmp(&b.score),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Tier => a.tier.cmp(&b.tier),
    }
}

/// Returns a sorted copy of `records` ordered by `spec`.
///
/// Pure: the input is never mutated. The underlying sort is stable, so
/// records comparing equal keep their relative input order in either
/// direction.
#[must_use]
pub fn sort_services(records: &[ServiceRecord], spec: SortSpec) -> Vec<ServiceRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, spec.key);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Capabilities, Category, DocsInfo, ErrorHandling, Features, Provisioning, ServiceLinks,
        ServiceMetadata, SupportLevel,
    };

    fn svc(id: &str, name: &str, tier: u8, score: u8) -> ServiceRecord {
        ServiceRecord {
            id: id.to_string(),
            name: name.to_string(),
            category: Category::Auth,
            tier,
            score,
            capabilities: Capabilities {
                mcp: SupportLevel::None,
                mcp_url: None,
                platform_api: false,
                api_type: None,
                cli: SupportLevel::None,
                cli_name: None,
                skills: false,
                oauth: false,
            },
            features: Features {
                webhooks: false,
                agent_rules: false,
                error_handling: ErrorHandling::Basic,
                rate_limits: false,
            },
            docs: DocsInfo {
                ai_focused: false,
                open_api: false,
                quick_start: false,
            },
            provisioning: Provisioning {
                one_shot: false,
                secrets: false,
                branching: false,
            },
            metadata: ServiceMetadata {
                homepage: String::new(),
                docs: String::new(),
                logo: String::new(),
                description: String::new(),
            },
            links: ServiceLinks::default(),
            strengths: vec![],
            gaps: vec![],
            best_for: String::new(),
            last_updated: "2026-01-01".to_string(),
        }
    }

    fn ids(records: &[ServiceRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    const DESC_SCORE: SortSpec = SortSpec {
        key: SortKey::Score,
        direction: SortDirection::Desc,
    };

    #[test]
    fn score_desc_orders_highest_first() {
        let records = vec![svc("a", "A", 1, 90), svc("b", "B", 2, 95), svc("c", "C", 1, 70)];
        assert_eq!(ids(&sort_services(&records, DESC_SCORE)), vec!["b", "a", "c"]);
    }

    #[test]
    fn filtered_subset_keeps_score_order() {
        // The spec.md worked example: tier-1 subset [A, C] sorts to [A, C].
        let records = vec![svc("a", "A", 1, 90), svc("c", "C", 1, 70)];
        assert_eq!(ids(&sort_services(&records, DESC_SCORE)), vec!["a", "c"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let records = vec![svc("a", "A", 1, 90), svc("b", "B", 2, 95), svc("c", "C", 1, 70)];
        let once = sort_services(&records, DESC_SCORE);
        let twice = sort_services(&once, DESC_SCORE);
        assert_eq!(once, twice);
    }

    #[test]
    fn sorting_is_a_permutation() {
        let records = vec![svc("a", "A", 3, 10), svc("b", "B", 1, 99), svc("c", "C", 2, 50)];
        for key in [SortKey::Score, SortKey::Name, SortKey::Tier] {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let sorted = sort_services(&records, SortSpec { key, direction });
                let mut before = ids(&records);
                let mut after = ids(&sorted);
                before.sort_unstable();
                after.sort_unstable();
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn ties_keep_relative_input_order() {
        let records = vec![svc("x", "X", 2, 80), svc("y", "Y", 2, 80), svc("z", "Z", 2, 80)];
        let spec = SortSpec {
            key: SortKey::Tier,
            direction: SortDirection::Desc,
        };
        assert_eq!(ids(&sort_services(&records, spec)), vec!["x", "y", "z"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        // Byte-wise ordering would put "Zebra" before "amber".
        let records = vec![svc("z", "Zebra", 2, 60), svc("a", "amber", 1, 90)];
        let spec = SortSpec {
            key: SortKey::Name,
            direction: SortDirection::Asc,
        };
        assert_eq!(ids(&sort_services(&records, spec)), vec!["a", "z"]);
    }

    #[test]
    fn tier_asc_puts_best_first() {
        let records = vec![svc("a", "A", 3, 10), svc("b", "B", 1, 20), svc("c", "C", 2, 30)];
        let spec = SortSpec {
            key: SortKey::Tier,
            direction: SortDirection::Asc,
        };
        assert_eq!(ids(&sort_services(&records, spec)), vec!["b", "c", "a"]);
    }

    #[test]
    fn toggle_flips_then_resets() {
        let mut spec = SortSpec::default();
        spec.toggle(SortKey::Score);
        assert_eq!(spec.direction, SortDirection::Asc);
        spec.toggle(SortKey::Score);
        assert_eq!(spec.direction, SortDirection::Desc);
        spec.toggle(SortKey::Tier);
        assert_eq!(spec.key, SortKey::Tier);
        assert_eq!(spec.direction, SortDirection::Desc);
    }
}
