//! # Browse Session
//!
//! One venue-browsing screen: a catalog fetched once on entry, plus the
//! user's facet selections. Events arrive one at a time:
//! 1. Catalog load completes (or fails)
//! 2. The user toggles a category or capacity bucket, or edits a price bound
//! 3. The visible list is recomputed from scratch on request
//!
//! Every mutator takes `&mut self`, so two events can never interleave and a
//! recomputation always sees a settled state.

use catalog::{CatalogError, CatalogStore, VenueRecord, VenueSource};
use facets::{
    BucketBounds, CapacityBucket, FacetError, FacetSelection, PredicateComposer, PriceBound,
};
use thiserror::Error;
use tracing::{info, instrument};

/// Errors surfaced to whoever drives the session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Facet(#[from] FacetError),
}

/// A discrete user interaction on the browsing screen.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseEvent {
    ToggleCategory { tag: String, included: bool },
    ToggleCapacity { label: String, included: bool },
    SetPriceBound { which: PriceBound, value: Option<f64> },
    ResetFilters,
}

/// Catalog plus Filter State for one browsing session.
#[derive(Debug, Default)]
pub struct BrowseSession {
    catalog: CatalogStore,
    selection: FacetSelection,
}

impl BrowseSession {
    /// Enter the screen: empty catalog, no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog. Filter State is untouched whatever the outcome.
    pub async fn load<S: VenueSource>(&mut self, source: &S) -> Result<usize, SessionError> {
        Ok(self.catalog.load(source).await?)
    }

    /// Apply one user interaction.
    ///
    /// A rejected event leaves the selection exactly as it was.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: BrowseEvent) -> Result<(), SessionError> {
        match event {
            BrowseEvent::ToggleCategory { tag, included } => {
                self.toggle_category(&tag, included)?;
            }
            BrowseEvent::ToggleCapacity { label, included } => {
                self.toggle_capacity_label(&label, included)?;
            }
            BrowseEvent::SetPriceBound { which, value } => {
                self.set_price_bound(which, value)?;
            }
            BrowseEvent::ResetFilters => self.reset_filters(),
        }
        Ok(())
    }

    pub fn toggle_category(&mut self, tag: &str, included: bool) -> Result<bool, FacetError> {
        self.selection.toggle_category(tag, included)
    }

    pub fn toggle_capacity_bucket(
        &mut self,
        bounds: BucketBounds,
        included: bool,
    ) -> Result<bool, FacetError> {
        self.selection.toggle_capacity_bucket(bounds, included)
    }

    /// Toggle a capacity bucket by its display label
    pub fn toggle_capacity_label(&mut self, label: &str, included: bool) -> Result<bool, FacetError> {
        let bucket = CapacityBucket::from_label(label)?;
        self.selection.toggle_capacity_bucket(bucket.bounds, included)
    }

    pub fn set_price_bound(
        &mut self,
        which: PriceBound,
        value: Option<f64>,
    ) -> Result<(), FacetError> {
        self.selection.set_price_bound(which, value)
    }

    pub fn reset_filters(&mut self) {
        self.selection.clear();
        info!("Filters reset");
    }

    /// Venues passing every active facet, in catalog order.
    ///
    /// Recomputed on every call; nothing is cached between calls.
    pub fn visible(&self) -> Vec<&VenueRecord> {
        PredicateComposer::new(&self.selection).apply(self.catalog.all())
    }

    /// Look up a venue for the detail view, filtered or not
    pub fn venue(&self, id: &str) -> Option<&VenueRecord> {
        self.catalog.get(id)
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }
}
