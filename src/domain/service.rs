//! Service record domain model.
//!
//! This module defines the core [`ServiceRecord`] type representing one
//! developer-tooling service in the comparison catalog, along with the
//! enumerations used by its sub-records. Records are deserialized once from
//! the bundled JSON dataset and never mutated at runtime.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days per month used for coarse freshness bucketing.
const DAYS_PER_MONTH: i64 = 30;

/// Days per year used for coarse freshness bucketing.
const DAYS_PER_YEAR: i64 = 365;

/// Category a service belongs to.
///
/// The catalog covers nine fixed categories. The serialized form is the
/// lowercase name (`"auth"`, `"database"`, ...), which is also the form
/// matched by free-text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Auth,
    Database,
    Deploy,
    Jobs,
    Email,
    Files,
    Messaging,
    Edge,
    Code,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 9] = [
        Self::Auth,
        Self::Database,
        Self::Deploy,
        Self::Jobs,
        Self::Email,
        Self::Files,
        Self::Messaging,
        Self::Edge,
        Self::Code,
    ];

    /// Returns the lowercase serialized name (used by search matching).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Database => "database",
            Self::Deploy => "deploy",
            Self::Jobs => "jobs",
            Self::Email => "email",
            Self::Files => "files",
            Self::Messaging => "messaging",
            Self::Edge => "edge",
            Self::Code => "code",
        }
    }

    /// Returns the human-readable badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auth => "Auth",
            Self::Database => "Database",
            Self::Deploy => "Deploy",
            Self::Jobs => "Jobs",
            Self::Email => "Email",
            Self::Files => "Files",
            Self::Messaging => "Messaging",
            Self::Edge => "Edge",
            Self::Code => "Code",
        }
    }

    /// Maps a 1-based index to a category (keyboard shortcut order).
    ///
    /// Returns `None` for indices outside `1..=9`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index.wrapping_sub(1)).copied()
    }
}

/// Support level for an integration surface (MCP server, CLI tool).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    /// First-party, vendor-maintained.
    Official,
    /// Community-maintained.
    Community,
    /// Not available.
    None,
}

impl SupportLevel {
    /// Whether the surface exists at all (official or community).
    #[must_use]
    pub const fn is_available(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Quality bucket for a service's error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorHandling {
    Excellent,
    Good,
    Basic,
}

impl ErrorHandling {
    /// Returns the lowercase display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Basic => "basic",
        }
    }
}

/// Style of a service's platform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiType {
    #[serde(rename = "REST")]
    Rest,
    #[serde(rename = "GraphQL")]
    GraphQl,
    #[serde(rename = "Both")]
    Both,
}

impl ApiType {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rest => "REST",
            Self::GraphQl => "GraphQL",
            Self::Both => "Both",
        }
    }
}

/// Integration surfaces a service exposes to agents and tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    /// MCP server support level.
    pub mcp: SupportLevel,
    /// Documentation URL for the MCP server, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp_url: Option<String>,
    /// Whether the service exposes a platform API.
    #[serde(rename = "platformAPI")]
    pub platform_api: bool,
    /// API style, when a platform API exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_type: Option<ApiType>,
    /// CLI tool support level.
    pub cli: SupportLevel,
    /// Name of the CLI binary, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cli_name: Option<String>,
    /// Whether the vendor publishes agent skills.
    pub skills: bool,
    /// Whether OAuth flows are supported.
    pub oauth: bool,
}

/// Operational feature flags declared by a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub webhooks: bool,
    pub agent_rules: bool,
    pub error_handling: ErrorHandling,
    pub rate_limits: bool,
}

/// Documentation quality flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsInfo {
    pub ai_focused: bool,
    #[serde(rename = "openAPI")]
    pub open_api: bool,
    pub quick_start: bool,
}

/// Provisioning characteristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provisioning {
    pub one_shot: bool,
    pub secrets: bool,
    pub branching: bool,
}

/// Free-text metadata attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetadata {
    pub homepage: String,
    pub docs: String,
    pub logo: String,
    pub description: String,
}

/// Optional deep links for the detail drawer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp_docs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_docs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cli_docs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guides: Option<Vec<String>>,
}

/// One developer-tooling service in the comparison catalog.
///
/// Records are the unit of data for the whole dashboard: the catalog loads
/// them once, the query layer filters and sorts them, and the UI renders
/// them as table rows, cards, and the detail drawer.
///
/// # Invariants
///
/// - `id` is unique across the collection
/// - `tier` is 1, 2, or 3 (lower is better)
/// - `score` is in `0..=100`
///
/// These are upheld by the catalog loader; the query layer trusts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub tier: u8,
    pub score: u8,
    pub capabilities: Capabilities,
    pub features: Features,
    pub docs: DocsInfo,
    pub provisioning: Provisioning,
    pub metadata: ServiceMetadata,
    #[serde(default)]
    pub links: ServiceLinks,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub best_for: String,
    /// ISO date (`YYYY-MM-DD`) of the last research pass over this record.
    pub last_updated: String,
}

impl ServiceRecord {
    /// Returns the number of days between `last_updated` and `today`.
    ///
    /// Returns `None` if `last_updated` is not a valid `YYYY-MM-DD` date.
    /// Future dates clamp to zero.
    #[must_use]
    pub fn updated_days_ago(&self, today: NaiveDate) -> Option<i64> {
        let updated = NaiveDate::parse_from_str(&self.last_updated, "%Y-%m-%d").ok()?;
        Some((today - updated).num_days().max(0))
    }

    /// Returns a human-readable freshness label for the record.
    ///
    /// The format varies based on the time elapsed since `last_updated`:
    /// - Less than 1 day: "updated today"
    /// - Less than 1 month: "updated Xd ago"
    /// - Less than 1 year: "updated Xmo ago"
    /// - Otherwise: "updated Xy ago"
    ///
    /// Falls back to the raw date string if it cannot be parsed.
    #[must_use]
    pub fn updated_label(&self) -> String {
        let today = chrono::Utc::now().date_naive();
        self.updated_days_ago(today).map_or_else(
            || format!("updated {}", self.last_updated),
            |days| {
                if days < 1 {
                    "updated today".to_string()
                } else if days < DAYS_PER_MONTH {
                    format!("updated {days}d ago")
                } else if days < DAYS_PER_YEAR {
                    let months = days / DAYS_PER_MONTH;
                    format!("updated {months}mo ago")
                } else {
                    let years = days / DAYS_PER_YEAR;
                    format!("updated {years}y ago")
                }
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record_updated(last_updated: &str) -> ServiceRecord {
        ServiceRecord {
            id: "svc".to_string(),
            name: "Svc".to_string(),
            category: Category::Auth,
            tier: 1,
            score: 90,
            capabilities: Capabilities {
                mcp: SupportLevel::Official,
                mcp_url: None,
                platform_api: true,
                api_type: Some(ApiType::Rest),
                cli: SupportLevel::None,
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
                ai_focused: true,
                open_api: true,
                quick_start: true,
            },
            provisioning: Provisioning {
                one_shot: true,
                secrets: true,
                branching: false,
            },
            metadata: ServiceMetadata {
                homepage: "https://svc.dev".to_string(),
                docs: "https://svc.dev/docs".to_string(),
                logo: "svc".to_string(),
                description: "A service".to_string(),
            },
            links: ServiceLinks::default(),
            strengths: vec![],
            gaps: vec![],
            best_for: "Everything".to_string(),
            last_updated: last_updated.to_string(),
        }
    }

    #[test]
    fn category_from_index_covers_all_nine() {
        for (i, expected) in Category::ALL.iter().enumerate() {
            assert_eq!(Category::from_index(i + 1), Some(*expected));
        }
        assert_eq!(Category::from_index(0), None);
        assert_eq!(Category::from_index(10), None);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Database).unwrap();
        assert_eq!(json, "\"database\"");
        let back: Category = serde_json::from_str("\"edge\"").unwrap();
        assert_eq!(back, Category::Edge);
    }

    #[test]
    fn support_level_availability() {
        assert!(SupportLevel::Official.is_available());
        assert!(SupportLevel::Community.is_available());
        assert!(!SupportLevel::None.is_available());
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = record_updated("2026-01-15");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"platformAPI\":true"));
        assert!(json.contains("\"errorHandling\":\"good\""));
        let back: ServiceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn updated_days_ago_buckets() {
        let record = record_updated("2026-01-01");
        assert_eq!(record.updated_days_ago(date("2026-01-01")), Some(0));
        assert_eq!(record.updated_days_ago(date("2026-01-11")), Some(10));
        // Future dates clamp to zero rather than going negative.
        assert_eq!(record.updated_days_ago(date("2025-12-01")), Some(0));
    }

    #[test]
    fn updated_days_ago_rejects_garbage_dates() {
        let record = record_updated("not-a-date");
        assert_eq!(record.updated_days_ago(date("2026-01-01")), None);
    }
}
