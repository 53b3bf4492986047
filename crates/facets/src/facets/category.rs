//! Event category facet: the venue's tag must be one of the selected ones.

use crate::definitions::Category;
use crate::traits::Facet;
use catalog::VenueRecord;
use std::collections::BTreeSet;

/// Admits venues whose category is in the selected set.
///
/// A venue with no category, or a tag outside the fixed list, only passes
/// when nothing is selected.
pub struct CategoryFacet<'a> {
    selected: &'a BTreeSet<Category>,
}

impl<'a> CategoryFacet<'a> {
    pub fn new(selected: &'a BTreeSet<Category>) -> Self {
        Self { selected }
    }
}

impl Facet for CategoryFacet<'_> {
    fn name(&self) -> &str {
        "CategoryFacet"
    }

    fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    fn admits(&self, venue: &VenueRecord) -> bool {
        if !self.is_active() {
            return true;
        }
        venue
            .category
            .as_deref()
            .and_then(|tag| tag.parse::<Category>().ok())
            .is_some_and(|category| self.selected.contains(&category))
    }
}
