//! The PredicateComposer turns a selection into one inclusion test.
//!
//! A venue is visible when it passes every facet (AND across facets). Within
//! a facet, matching any selected value is enough (OR within a facet).

use crate::facets::{CapacityFacet, CategoryFacet, PriceFacet};
use crate::selection::FacetSelection;
use crate::traits::Facet;
use catalog::VenueRecord;
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Catalogs at least this large are scanned in parallel.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Conjunction of the three facets derived from one [`FacetSelection`].
///
/// Holds no results. Every call to [`PredicateComposer::apply`] re-evaluates
/// the whole catalog, so a stale view is impossible.
///
/// ## Usage
/// ```ignore
/// let composer = PredicateComposer::new(&selection);
/// let visible = composer.apply(store.all());
/// ```
pub struct PredicateComposer<'s> {
    category: CategoryFacet<'s>,
    capacity: CapacityFacet<'s>,
    price: PriceFacet,
}

impl<'s> PredicateComposer<'s> {
    /// Derive the predicate for the current selection.
    pub fn new(selection: &'s FacetSelection) -> Self {
        Self {
            category: CategoryFacet::new(selection.categories()),
            capacity: CapacityFacet::new(selection.capacity_buckets()),
            price: PriceFacet::new(selection.price()),
        }
    }

    /// The facets in evaluation order
    pub fn facets(&self) -> [&dyn Facet; 3] {
        [&self.category, &self.capacity, &self.price]
    }

    /// Whether a single venue is visible under the selection
    pub fn admits(&self, venue: &VenueRecord) -> bool {
        self.category.admits(venue) && self.capacity.admits(venue) && self.price.admits(venue)
    }

    /// Stable filter: the venues that pass, in catalog order.
    ///
    /// Returns references into `catalog`, never copies.
    #[instrument(skip_all, fields(catalog_len = catalog.len()))]
    pub fn apply<'c>(&self, catalog: &'c [VenueRecord]) -> Vec<&'c VenueRecord> {
        let visible: Vec<&VenueRecord> = if catalog.len() >= PARALLEL_THRESHOLD {
            // Collecting an ordered parallel iterator keeps catalog order
            catalog.par_iter().filter(|venue| self.admits(venue)).collect()
        } else {
            catalog.iter().filter(|venue| self.admits(venue)).collect()
        };

        debug!(
            "Active facets: [{}] (visible: {} of {})",
            self.active_facet_names().join(", "),
            visible.len(),
            catalog.len()
        );
        visible
    }

    /// Number of venues that pass, without collecting them
    pub fn count(&self, catalog: &[VenueRecord]) -> usize {
        catalog.iter().filter(|venue| self.admits(venue)).count()
    }

    fn active_facet_names(&self) -> Vec<&str> {
        self.facets()
            .into_iter()
            .filter(|facet| facet.is_active())
            .map(|facet| facet.name())
            .collect()
    }
}

/// Filter a catalog by a selection in one call.
pub fn filter_venues<'c>(
    catalog: &'c [VenueRecord],
    selection: &FacetSelection,
) -> Vec<&'c VenueRecord> {
    PredicateComposer::new(selection).apply(catalog)
}
