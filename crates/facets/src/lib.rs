//! Faceted filtering of a venue catalog.
//!
//! This crate provides:
//! - The fixed facet definitions (event categories, capacity buckets)
//! - `FacetSelection`, the set-valued Filter State
//! - One `Facet` per filter dimension
//! - `PredicateComposer`, which conjoins the facets and filters a catalog
//!
//! ## Semantics
//! - Empty facet: no constraint
//! - Within a facet: OR over the selected values
//! - Across facets: AND
//! - A venue missing a field fails that facet only while it is active
//!
//! ## Example Usage
//! ```ignore
//! use facets::{CapacityBucket, FacetSelection, PriceBound, PredicateComposer};
//!
//! let mut selection = FacetSelection::new();
//! selection.toggle_category("Weddings", true)?;
//! selection.toggle_capacity_bucket(CapacityBucket::from_label("50-100")?.bounds, true)?;
//! selection.set_price_bound(PriceBound::Max, Some(400.0))?;
//!
//! let visible = PredicateComposer::new(&selection).apply(store.all());
//! ```

pub mod composer;
pub mod definitions;
pub mod error;
pub mod facets;
pub mod selection;
pub mod traits;

// Re-export main types
pub use composer::{PARALLEL_THRESHOLD, PredicateComposer, filter_venues};
pub use definitions::{BucketBounds, CAPACITY_BUCKETS, CapacityBucket, Category};
pub use error::{FacetError, Result};
pub use selection::{FacetSelection, PriceBound, PriceBounds};
pub use traits::Facet;
