//! Filter State: what the user has picked in each facet.
//!
//! Categories and capacity buckets are true sets, so toggling a value on and
//! then off always returns to the previous membership, and repeated toggles
//! never grow the selection.

use crate::definitions::{BucketBounds, CapacityBucket, Category};
use crate::error::{FacetError, Result};
use std::collections::BTreeSet;
use tracing::debug;

/// Which end of the price range to set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBound {
    Min,
    Max,
}

/// Optional lower and upper price limits, each independent of the other.
///
/// No ordering between `min` and `max` is enforced. An inverted range is
/// legal and simply matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceBounds {
    pub fn is_unset(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// The three facet selections for one browsing session.
///
/// Starts empty, which places no constraint on the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetSelection {
    categories: BTreeSet<Category>,
    capacity_buckets: BTreeSet<BucketBounds>,
    price: PriceBounds,
}

impl FacetSelection {
    /// Create a new, unconstrained selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include or exclude an event category.
    ///
    /// `tag` must name one of [`Category::ALL`]. Returns whether the
    /// selection changed; asking for the state that already holds is a no-op.
    pub fn toggle_category(&mut self, tag: &str, included: bool) -> Result<bool> {
        let category: Category = tag.parse()?;
        Ok(self.set_category(category, included))
    }

    /// Typed form of [`FacetSelection::toggle_category`].
    pub fn set_category(&mut self, category: Category, included: bool) -> bool {
        let changed = if included {
            self.categories.insert(category)
        } else {
            self.categories.remove(&category)
        };
        debug!(%category, included, changed, "Category toggled");
        changed
    }

    /// Include or exclude a capacity bucket, identified by its bounds.
    ///
    /// The bounds must match one of the defined buckets exactly. Returns
    /// whether the selection changed.
    pub fn toggle_capacity_bucket(&mut self, bounds: BucketBounds, included: bool) -> Result<bool> {
        if CapacityBucket::from_bounds(bounds).is_none() {
            return Err(FacetError::UnknownFacetValue {
                facet: "capacity bucket",
                value: bounds.to_string(),
            });
        }

        let changed = if included {
            self.capacity_buckets.insert(bounds)
        } else {
            self.capacity_buckets.remove(&bounds)
        };
        debug!(%bounds, included, changed, "Capacity bucket toggled");
        Ok(changed)
    }

    /// Set or clear one end of the price range.
    ///
    /// `None` clears the bound. Negative or non-finite values are rejected.
    pub fn set_price_bound(&mut self, which: PriceBound, value: Option<f64>) -> Result<()> {
        if let Some(value) = value {
            if !value.is_finite() || value < 0.0 {
                return Err(FacetError::InvalidPriceBound { value });
            }
        }

        match which {
            PriceBound::Min => self.price.min = value,
            PriceBound::Max => self.price.max = value,
        }
        debug!(?which, ?value, "Price bound set");
        Ok(())
    }

    /// Drop every constraint.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no facet has an active constraint
    pub fn is_unconstrained(&self) -> bool {
        self.categories.is_empty() && self.capacity_buckets.is_empty() && self.price.is_unset()
    }

    pub fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    pub fn capacity_buckets(&self) -> &BTreeSet<BucketBounds> {
        &self.capacity_buckets
    }

    pub fn price(&self) -> PriceBounds {
        self.price
    }
}
