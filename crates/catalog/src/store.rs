//! The Catalog Store: a fetch-once, read-only snapshot of venues.

use crate::error::Result;
use crate::source::VenueSource;
use crate::types::VenueRecord;
use std::collections::HashMap;
use tracing::{info, instrument, warn};

/// Holds the venue list for one browsing session.
///
/// Contents only change through a successful [`CatalogStore::load`]. A failed
/// load leaves whatever was there before, so readers never see a half-built
/// catalog.
#[derive(Debug, Default)]
pub struct CatalogStore {
    venues: Vec<VenueRecord>,
    /// Position of each venue in `venues`, by id
    by_id: HashMap<String, usize>,
    loaded: bool,
}

impl CatalogStore {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the full venue list and replace the current contents.
    ///
    /// Returns the number of venues now held. On error the store is left
    /// untouched and the error is returned; there is no retry.
    #[instrument(skip(self, source), fields(source = %source.describe()))]
    pub async fn load<S: VenueSource>(&mut self, source: &S) -> Result<usize> {
        match source.fetch_venues().await {
            Ok(venues) => {
                self.replace(venues);
                info!("Loaded {} venues", self.venues.len());
                Ok(self.venues.len())
            }
            Err(err) => {
                warn!(
                    "Catalog load failed, keeping {} previously loaded venues: {}",
                    self.venues.len(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Every venue, in the order the source returned them
    pub fn all(&self) -> &[VenueRecord] {
        &self.venues
    }

    /// Look up one venue by id
    ///
    /// If the source returned duplicate ids, the first occurrence wins.
    pub fn get(&self, id: &str) -> Option<&VenueRecord> {
        self.by_id.get(id).map(|&pos| &self.venues[pos])
    }

    /// Whether at least one load has succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    fn replace(&mut self, venues: Vec<VenueRecord>) {
        let mut by_id = HashMap::with_capacity(venues.len());
        for (pos, venue) in venues.iter().enumerate() {
            by_id.entry(venue.id.clone()).or_insert(pos);
        }
        self.venues = venues;
        self.by_id = by_id;
        self.loaded = true;
    }
}
