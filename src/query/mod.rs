//! Query layer: pure filtering and sorting over the service collection.
//!
//! The query layer is the functional core of the dashboard. Both list
//! presentations (table and cards) consume the same two functions:
//!
//! ```text
//! catalog records ──▶ filter_services ──▶ sort_services ──▶ display
//! ```
//!
//! Both operations are pure, synchronous, single-pass functions over the
//! in-memory collection; neither mutates its input.
//!
//! # Modules
//!
//! - [`filter`]: [`FilterSpec`] and the conjunctive predicate chain
//! - [`sort`]: [`SortSpec`] and the stable three-key sorter

pub mod filter;
pub mod sort;

pub use filter::{filter_services, FilterSpec};
pub use sort::{sort_services, SortDirection, SortKey, SortSpec};
