//! Filter evaluation over the service collection.
//!
//! This module implements the filter half of the query layer: a pure
//! predicate chain that narrows the record collection by tier, category,
//! feature flags, and free-text search. Filtering never reorders records;
//! ordering is the [sorter's](crate::query::sort) job.
//!
//! # Predicate composition
//!
//! Composition is conjunctive across dimensions and disjunctive within the
//! tier and category dimensions. The features dimension is the intentional
//! exception: every selected feature must hold (conjunctive within the
//! dimension), and a feature name the evaluator does not recognize fails
//! the record rather than being ignored.

use crate::domain::{Category, ServiceRecord};

/// Transient query input describing which records should survive filtering.
///
/// An empty dimension places no constraint on that dimension; a fully empty
/// specification is the identity filter. Specs are built up by user
/// interaction and live only in view state; nothing persists them across
/// runs.
///
/// # Examples
///
/// ```
/// use stackdash::query::FilterSpec;
///
/// let mut spec = FilterSpec::default();
/// assert!(spec.is_empty());
///
/// spec.toggle_tier(1);
/// spec.features.push("MCP".to_string());
/// assert!(!spec.is_empty());
///
/// spec.clear();
/// assert!(spec.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Selected tiers; a record must match one of them when non-empty.
    pub tiers: Vec<u8>,
    /// Selected categories; a record must match one of them when non-empty.
    pub categories: Vec<Category>,
    /// Selected feature names; a record must satisfy all of them when
    /// non-empty. Canonical names are `MCP`, `CLI`, `OAuth`, `Webhooks`,
    /// matched case-insensitively.
    pub features: Vec<String>,
    /// Free-text query matched case-insensitively against name,
    /// description, and category.
    pub search: String,
}

impl FilterSpec {
    /// Returns `true` when no dimension constrains the collection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
            && self.categories.is_empty()
            && self.features.is_empty()
            && self.search.is_empty()
    }

    /// Resets every dimension, turning the spec back into the identity filter.
    pub fn clear(&mut self) {
        self.tiers.clear();
        self.categories.clear();
        self.features.clear();
        self.search.clear();
    }

    /// Adds the tier to the selection, or removes it if already selected.
    pub fn toggle_tier(&mut self, tier: u8) {
        if let Some(pos) = self.tiers.iter().position(|t| *t == tier) {
            self.tiers.remove(pos);
        } else {
            self.tiers.push(tier);
        }
    }

    /// Adds the category to the selection, or removes it if already selected.
    pub fn toggle_category(&mut self, category: Category) {
        if let Some(pos) = self.categories.iter().position(|c| *c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category);
        }
    }

    /// Adds the feature name to the selection, or removes it if already
    /// selected (compared case-insensitively).
    pub fn toggle_feature(&mut self, feature: &str) {
        if let Some(pos) = self
            .features
            .iter()
            .position(|f| f.eq_ignore_ascii_case(feature))
        {
            self.features.remove(pos);
        } else {
            self.features.push(feature.to_string());
        }
    }
}

/// Evaluates a single named feature predicate against a record.
///
/// Unrecognized names return `false`, which excludes the record
/// (fail-closed).
fn feature_matches(record: &ServiceRecord, feature: &str) -> bool {
    match feature.to_ascii_lowercase().as_str() {
        "mcp" => record.capabilities.mcp.is_available(),
        "cli" => record.capabilities.cli.is_available(),
        "oauth" => record.capabilities.oauth,
        "webhooks" => record.features.webhooks,
        _ => false,
    }
}

/// Whether the record matches the free-text query.
///
/// The query is expected to be lowercased already; matching is substring
/// containment against the name, the description, and the category name.
fn search_matches(record: &ServiceRecord, query: &str) -> bool {
    record.name.to_lowercase().contains(query)
        || record.metadata.description.to_lowercase().contains(query)
        || record.category.as_str().contains(query)
}

/// Returns the subset of `records` matching every active dimension of `spec`.
///
/// Pure and order-preserving: surviving records keep their relative input
/// order, and an entirely empty spec returns the input collection unchanged
/// in both content and order.
#[must_use]
pub fn filter_services(records: &[ServiceRecord], spec: &FilterSpec) -> Vec<ServiceRecord> {
    let _span = tracing::debug_span!(
        "filter_services",
        total = records.len(),
        tiers = spec.tiers.len(),
        categories = spec.categories.len(),
        features = spec.features.len(),
        query_len = spec.search.len()
    )
    .entered();

    let query = spec.search.to_lowercase();

    let filtered: Vec<ServiceRecord> = records
        .iter()
        .filter(|record| {
            if !spec.tiers.is_empty() && !spec.tiers.contains(&record.tier) {
                return false;
            }

            if !spec.categories.is_empty() && !spec.categories.contains(&record.category) {
                return false;
            }

            if !spec.features.is_empty()
                && !spec
                    .features
                    .iter()
                    .all(|feature| feature_matches(record, feature))
            {
                return false;
            }

            if !query.is_empty() && !search_matches(record, &query) {
                return false;
            }

            true
        })
        .cloned()
        .collect();

    tracing::debug!(matched = filtered.len(), "filter applied");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ApiType, Capabilities, DocsInfo, ErrorHandling, Features, Provisioning, ServiceLinks,
        ServiceMetadata, SupportLevel,
    };

    fn svc(id: &str, name: &str, category: Category, tier: u8, score: u8) -> ServiceRecord {
        ServiceRecord {
            id: id.to_string(),
            name: name.to_string(),
            category,
            tier,
            score,
            capabilities: Capabilities {
                mcp: SupportLevel::Official,
                mcp_url: None,
                platform_api: true,
                api_type: Some(ApiType::Rest),
                cli: SupportLevel::Official,
                cli_name: None,
                skills: false,
                oauth: true,
            },
            features: Features {
                webhooks: true,
                agent_rules: false,
                error_handling: ErrorHandling::Good,
                rate_limits: true,
            },
            docs: DocsInfo {
                ai_focused: false,
                open_api: true,
                quick_start: true,
            },
            provisioning: Provisioning {
                one_shot: false,
                secrets: true,
                branching: false,
            },
            metadata: ServiceMetadata {
                homepage: format!("https://{id}.dev"),
                docs: format!("https://{id}.dev/docs"),
                logo: id.to_string(),
                description: format!("{name} is a developer service"),
            },
            links: ServiceLinks::default(),
            strengths: vec![],
            gaps: vec![],
            best_for: String::new(),
            last_updated: "2026-01-01".to_string(),
        }
    }

    fn sample() -> Vec<ServiceRecord> {
        vec![
            svc("clerk", "Clerk", Category::Auth, 1, 90),
            svc("neon", "Neon", Category::Database, 2, 95),
            svc("resend", "Resend", Category::Email, 1, 70),
        ]
    }

    fn ids(records: &[ServiceRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_spec_is_identity() {
        let records = sample();
        let out = filter_services(&records, &FilterSpec::default());
        assert_eq!(out, records);
    }

    #[test]
    fn tier_filter_is_sound_and_complete() {
        let records = sample();
        let spec = FilterSpec {
            tiers: vec![1],
            ..Default::default()
        };
        let out = filter_services(&records, &spec);

        assert!(out.iter().all(|r| r.tier == 1));
        let expected: Vec<&str> = records
            .iter()
            .filter(|r| r.tier == 1)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids(&out), expected);
    }

    #[test]
    fn tier_filter_preserves_input_order() {
        let records = sample();
        let spec = FilterSpec {
            tiers: vec![1],
            ..Default::default()
        };
        assert_eq!(ids(&filter_services(&records, &spec)), vec!["clerk", "resend"]);
    }

    #[test]
    fn category_filter_accepts_any_selected_category() {
        let records = sample();
        let spec = FilterSpec {
            categories: vec![Category::Auth, Category::Email],
            ..Default::default()
        };
        assert_eq!(ids(&filter_services(&records, &spec)), vec!["clerk", "resend"]);
    }

    #[test]
    fn feature_filter_is_conjunctive() {
        let mut records = sample();
        records[0].capabilities.oauth = false;

        let both = FilterSpec {
            features: vec!["MCP".to_string(), "OAuth".to_string()],
            ..Default::default()
        };
        let mcp_only = FilterSpec {
            features: vec!["MCP".to_string()],
            ..Default::default()
        };
        let oauth_only = FilterSpec {
            features: vec!["OAuth".to_string()],
            ..Default::default()
        };

        let chained = filter_services(&filter_services(&records, &mcp_only), &oauth_only);
        assert_eq!(filter_services(&records, &both), chained);
        assert_eq!(ids(&chained), vec!["neon", "resend"]);
    }

    #[test]
    fn webhooks_filter_excludes_record_regardless_of_other_matches() {
        let mut records = sample();
        records[1].features.webhooks = false;

        let spec = FilterSpec {
            features: vec!["Webhooks".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_services(&records, &spec)), vec!["clerk", "resend"]);
    }

    #[test]
    fn unknown_feature_name_fails_closed() {
        let records = sample();
        let spec = FilterSpec {
            features: vec!["Telepathy".to_string()],
            ..Default::default()
        };
        assert!(filter_services(&records, &spec).is_empty());
    }

    #[test]
    fn feature_names_match_case_insensitively() {
        let records = sample();
        let upper = FilterSpec {
            features: vec!["MCP".to_string()],
            ..Default::default()
        };
        let lower = FilterSpec {
            features: vec!["mcp".to_string()],
            ..Default::default()
        };
        assert_eq!(
            filter_services(&records, &upper),
            filter_services(&records, &lower)
        );
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = sample();
        let upper = FilterSpec {
            search: "CLERK".to_string(),
            ..Default::default()
        };
        let lower = FilterSpec {
            search: "clerk".to_string(),
            ..Default::default()
        };
        assert_eq!(
            filter_services(&records, &upper),
            filter_services(&records, &lower)
        );
        assert_eq!(ids(&filter_services(&records, &lower)), vec!["clerk"]);
    }

    #[test]
    fn search_matches_description_and_category() {
        let records = sample();

        let by_description = FilterSpec {
            search: "developer service".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_services(&records, &by_description).len(), 3);

        let by_category = FilterSpec {
            search: "email".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_services(&records, &by_category)), vec!["resend"]);
    }

    #[test]
    fn dimensions_compose_conjunctively() {
        let records = sample();
        let spec = FilterSpec {
            tiers: vec![1],
            categories: vec![Category::Auth],
            ..Default::default()
        };
        assert_eq!(ids(&filter_services(&records, &spec)), vec!["clerk"]);
    }

    #[test]
    fn toggle_helpers_add_and_remove() {
        let mut spec = FilterSpec::default();
        spec.toggle_tier(2);
        assert_eq!(spec.tiers, vec![2]);
        spec.toggle_tier(2);
        assert!(spec.tiers.is_empty());

        spec.toggle_feature("OAuth");
        spec.toggle_feature("oauth");
        assert!(spec.features.is_empty());

        spec.toggle_category(Category::Edge);
        spec.toggle_tier(3);
        spec.search.push('x');
        assert!(!spec.is_empty());
        spec.clear();
        assert!(spec.is_empty());
    }
}
