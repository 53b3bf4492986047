//! Price facet: the venue's price must lie within the optional bounds.

use crate::selection::PriceBounds;
use crate::traits::Facet;
use catalog::VenueRecord;

/// Admits venues with `min <= price <= max`, skipping whichever bound is unset.
///
/// An inverted range (min > max) admits nothing. That falls out of the two
/// comparisons and is not special-cased.
pub struct PriceFacet {
    bounds: PriceBounds,
}

impl PriceFacet {
    pub fn new(bounds: PriceBounds) -> Self {
        Self { bounds }
    }
}

impl Facet for PriceFacet {
    fn name(&self) -> &str {
        "PriceFacet"
    }

    fn is_active(&self) -> bool {
        !self.bounds.is_unset()
    }

    fn admits(&self, venue: &VenueRecord) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(price) = venue.price else {
            return false;
        };
        self.bounds.min.is_none_or(|min| price >= min)
            && self.bounds.max.is_none_or(|max| price <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(price: f64) -> VenueRecord {
        VenueRecord::new(price.to_string()).with_price(price)
    }

    #[test]
    fn test_unset_bounds_admit_everything() {
        let facet = PriceFacet::new(PriceBounds::default());
        assert!(!facet.is_active());
        assert!(facet.admits(&venue(0.0)));
        assert!(facet.admits(&VenueRecord::new("no-price")));
    }

    #[test]
    fn test_partial_bounds() {
        let min_only = PriceFacet::new(PriceBounds { min: Some(300.0), max: None });
        assert!(!min_only.admits(&venue(299.99)));
        assert!(min_only.admits(&venue(300.0)));
        assert!(min_only.admits(&venue(1e9)));

        let max_only = PriceFacet::new(PriceBounds { min: None, max: Some(300.0) });
        assert!(max_only.admits(&venue(0.0)));
        assert!(max_only.admits(&venue(300.0)));
        assert!(!max_only.admits(&venue(300.01)));
    }

    #[test]
    fn test_inverted_range_admits_nothing() {
        let facet = PriceFacet::new(PriceBounds { min: Some(100.0), max: Some(50.0) });
        for price in [0.0, 50.0, 75.0, 100.0, 500.0] {
            assert!(!facet.admits(&venue(price)), "price {price}");
        }
    }

    #[test]
    fn test_missing_price_fails_active_facet() {
        let facet = PriceFacet::new(PriceBounds { min: None, max: Some(1_000.0) });
        assert!(!facet.admits(&VenueRecord::new("1")));
    }
}
