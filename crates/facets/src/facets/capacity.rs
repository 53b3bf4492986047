//! Capacity facet: the venue's guest count must fall in a selected bucket.

use crate::definitions::BucketBounds;
use crate::traits::Facet;
use catalog::VenueRecord;
use std::collections::BTreeSet;

/// Admits venues whose capacity lies in at least one selected bucket.
///
/// Buckets are held as a set of bounds, so duplicate selections collapse into
/// a single test. Overlapping buckets are fine: any one match admits.
pub struct CapacityFacet<'a> {
    selected: &'a BTreeSet<BucketBounds>,
}

impl<'a> CapacityFacet<'a> {
    pub fn new(selected: &'a BTreeSet<BucketBounds>) -> Self {
        Self { selected }
    }
}

impl Facet for CapacityFacet<'_> {
    fn name(&self) -> &str {
        "CapacityFacet"
    }

    fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    fn admits(&self, venue: &VenueRecord) -> bool {
        if !self.is_active() {
            return true;
        }
        match venue.capacity {
            Some(capacity) => self.selected.iter().any(|bounds| bounds.contains(capacity)),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(capacity: u32) -> VenueRecord {
        VenueRecord::new(capacity.to_string()).with_capacity(capacity)
    }

    #[test]
    fn test_empty_selection_admits_everything() {
        let selected = BTreeSet::new();
        let facet = CapacityFacet::new(&selected);

        assert!(facet.admits(&venue(10_000)));
        assert!(facet.admits(&VenueRecord::new("no-capacity")));
    }

    #[test]
    fn test_union_of_buckets() {
        let selected = BTreeSet::from([
            BucketBounds::new(0, Some(50)),
            BucketBounds::new(501, None),
        ]);
        let facet = CapacityFacet::new(&selected);

        assert!(facet.admits(&venue(0)));
        assert!(facet.admits(&venue(50)));
        assert!(!facet.admits(&venue(51)));
        assert!(!facet.admits(&venue(500)));
        assert!(facet.admits(&venue(501)));
        assert!(facet.admits(&venue(5_000)));
    }

    #[test]
    fn test_missing_capacity_fails_active_facet() {
        let selected = BTreeSet::from([BucketBounds::new(0, Some(50))]);
        let facet = CapacityFacet::new(&selected);

        assert!(!facet.admits(&VenueRecord::new("1")));
    }
}
