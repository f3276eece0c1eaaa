//! Catalog layer: the immutable service collection and its metadata.
//!
//! The catalog is the dashboard's data provider. It is created exactly once,
//! either from the dataset bundled into the binary or from a user-supplied
//! JSON file, validated against the record invariants, and never mutated
//! afterwards. The query layer and the UI only ever borrow from it.
//!
//! # Modules
//!
//! - `models`: serialized container types (dataset layout, metadata,
//!   recommendations)

pub mod models;

pub use models::{CatalogData, CatalogMetadata, RecommendedStack, Recommendations};

use std::path::Path;

use crate::domain::{Category, Result, ServiceRecord, StackdashError};

/// Dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../../data/services.json");

/// The immutable record collection plus aggregate metadata.
///
/// Invariants upheld at load time:
///
/// - `id` is unique across the collection
/// - `tier` is 1, 2, or 3
/// - `score` is at most 100
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
}

impl Catalog {
    /// Loads the dataset bundled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled dataset is malformed or violates an
    /// invariant; with a well-formed build this does not happen.
    pub fn bundled() -> Result<Self> {
        tracing::debug!("loading bundled dataset");
        Self::from_json_str(BUNDLED_DATASET)
    }

    /// Loads a dataset from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid JSON,
    /// or violates a catalog invariant.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading dataset from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses and validates a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`StackdashError::Data`] on parse failures and invariant
    /// violations.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)
            .map_err(|e| StackdashError::Data(format!("failed to parse dataset JSON: {e}")))?;

        Self::validate(&data.services)?;

        tracing::debug!(
            service_count = data.services.len(),
            production_ready = data.metadata.production_ready,
            "catalog loaded"
        );

        Ok(Self { data })
    }

    /// Checks the record invariants over a freshly parsed collection.
    fn validate(services: &[ServiceRecord]) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for service in services {
            if !seen.insert(service.id.as_str()) {
                return Err(StackdashError::Data(format!(
                    "duplicate service id: {}",
                    service.id
                )));
            }
            if !(1..=3).contains(&service.tier) {
                return Err(StackdashError::Data(format!(
                    "service {} has tier {} outside 1..=3",
                    service.id, service.tier
                )));
            }
            if service.score > 100 {
                return Err(StackdashError::Data(format!(
                    "service {} has score {} above 100",
                    service.id, service.score
                )));
            }
        }
        Ok(())
    }

    /// The record collection, in dataset order.
    #[must_use]
    pub fn services(&self) -> &[ServiceRecord] {
        &self.data.services
    }

    /// Aggregate research metadata.
    #[must_use]
    pub const fn metadata(&self) -> &CatalogMetadata {
        &self.data.metadata
    }

    /// Recommended stack summary.
    #[must_use]
    pub const fn recommendations(&self) -> &Recommendations {
        &self.data.recommendations
    }

    /// Looks up a record by its identifier.
    ///
    /// Linear scan; returns `None` when no record carries the id.
    #[must_use]
    pub fn service_by_id(&self, id: &str) -> Option<&ServiceRecord> {
        self.data.services.iter().find(|s| s.id == id)
    }

    /// Returns the recommended service name for a category.
    #[must_use]
    pub fn recommended_for(&self, category: Category) -> &str {
        let stack = &self.data.recommendations.recommended_stack;
        match category {
            Category::Auth => &stack.auth,
            Category::Database => &stack.database,
            Category::Deploy => &stack.deployment,
            Category::Jobs => &stack.jobs,
            Category::Email => &stack.email,
            Category::Files => &stack.files,
            Category::Messaging => &stack.messaging,
            Category::Edge => &stack.edge,
            Category::Code => &stack.code,
        }
    }

    /// Number of records per tier, indexed by tier minus one.
    #[must_use]
    pub fn tier_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for service in &self.data.services {
            counts[usize::from(service.tier) - 1] += 1;
        }
        counts
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.services.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_dataset_loads_and_upholds_invariants() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.metadata().total_services, catalog.len());
        assert!(catalog.metadata().production_ready <= catalog.len());
        assert_eq!(catalog.tier_counts().iter().sum::<usize>(), catalog.len());
    }

    #[test]
    fn service_by_id_finds_and_misses() {
        let catalog = Catalog::bundled().unwrap();
        let first = &catalog.services()[0];
        assert_eq!(
            catalog.service_by_id(&first.id).map(|s| s.name.as_str()),
            Some(first.name.as_str())
        );
        assert!(catalog.service_by_id("no-such-service").is_none());
    }

    #[test]
    fn recommended_for_maps_every_category() {
        let catalog = Catalog::bundled().unwrap();
        for category in Category::ALL {
            assert!(!catalog.recommended_for(category).is_empty());
        }
        assert_eq!(catalog.recommended_for(Category::Deploy), "Vercel");
    }

    #[test]
    fn from_file_round_trips() {
        let catalog = Catalog::bundled().unwrap();
        let json = serde_json::to_string(&catalog.data).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let reloaded = Catalog::from_file(file.path()).unwrap();
        assert_eq!(reloaded.len(), catalog.len());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Catalog::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, StackdashError::Io(_)));
    }

    #[test]
    fn malformed_json_is_a_data_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, StackdashError::Data(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let catalog = Catalog::bundled().unwrap();
        let mut data = catalog.data;
        let clone = data.services[0].clone();
        data.services.push(clone);

        let json = serde_json::to_string(&data).unwrap();
        let err = Catalog::from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate service id"));
    }

    #[test]
    fn out_of_range_tier_is_rejected() {
        let catalog = Catalog::bundled().unwrap();
        let mut data = catalog.data;
        data.services[0].tier = 4;
        // A duplicate-free collection with one bad tier.
        data.services[0].id = "bad-tier".to_string();

        let json = serde_json::to_string(&data).unwrap();
        let err = Catalog::from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("tier"));
    }
}
