//! Serialized container types for the catalog dataset.
//!
//! These types mirror the on-disk JSON layout of the dataset: the record
//! collection itself plus the aggregate research metadata and the
//! recommended-stack summary shown in the dashboard chrome.

use serde::{Deserialize, Serialize};

use crate::domain::ServiceRecord;

/// Top-level dataset layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    /// The record collection, in dataset order.
    pub services: Vec<ServiceRecord>,
    /// Aggregate research metadata.
    pub metadata: CatalogMetadata,
    /// Recommended service per category.
    pub recommendations: Recommendations,
}

/// Aggregate metadata about the research pass that produced the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub research_date: String,
    pub researcher: String,
    pub phase: String,
    /// Total number of services covered by the research.
    pub total_services: usize,
    /// How many of them are considered production ready.
    pub production_ready: usize,
}

/// Recommended stack summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub recommended_stack: RecommendedStack,
    pub estimated_cost: String,
}

/// One recommended service name per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedStack {
    pub auth: String,
    pub database: String,
    pub deployment: String,
    pub jobs: String,
    pub code: String,
    pub email: String,
    pub files: String,
    pub messaging: String,
    pub edge: String,
}
