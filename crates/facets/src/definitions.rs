//! Fixed facet definitions: the event categories and capacity buckets a user
//! can pick from.
//!
//! These lists are owned by the UI, not derived from the catalog. The engine
//! only ever selects among them; it never invents a category or a bucket.

use crate::error::FacetError;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Event categories
// =============================================================================

/// Event-type tag a venue is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Conference,
    Weddings,
    Birthdays,
    Corporate,
}

impl Category {
    /// Every selectable category, in display order
    pub const ALL: [Category; 4] = [
        Category::Conference,
        Category::Weddings,
        Category::Birthdays,
        Category::Corporate,
    ];

    /// The tag as it appears in venue records
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Conference => "Conference",
            Category::Weddings => "Weddings",
            Category::Birthdays => "Birthdays",
            Category::Corporate => "Corporate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FacetError;

    /// Matches a tag exactly against the fixed list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| FacetError::UnknownFacetValue {
                facet: "category",
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Capacity buckets
// =============================================================================

/// Closed capacity interval `[low, high]`; `high == None` is unbounded.
///
/// This pair is a bucket's identity. Two buckets with equal bounds are the
/// same selection whatever their labels say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketBounds {
    pub low: u32,
    pub high: Option<u32>,
}

impl BucketBounds {
    pub const fn new(low: u32, high: Option<u32>) -> Self {
        Self { low, high }
    }

    /// `low <= capacity <= high`, inclusive on both ends
    pub fn contains(&self, capacity: u32) -> bool {
        capacity >= self.low && self.high.is_none_or(|high| capacity <= high)
    }
}

impl fmt::Display for BucketBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(high) => write!(f, "[{}, {}]", self.low, high),
            None => write!(f, "[{}, ∞)", self.low),
        }
    }
}

/// A named capacity interval offered in the capacity facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityBucket {
    pub label: &'static str,
    pub bounds: BucketBounds,
}

/// The capacity buckets, in display order.
///
/// Boundaries are kept exactly as listed: "Less than 50" tops out at 50 under
/// the inclusive test, so a venue for exactly 50 guests also falls in "50-100".
pub const CAPACITY_BUCKETS: [CapacityBucket; 5] = [
    CapacityBucket {
        label: "Less than 50",
        bounds: BucketBounds::new(0, Some(50)),
    },
    CapacityBucket {
        label: "50-100",
        bounds: BucketBounds::new(50, Some(100)),
    },
    CapacityBucket {
        label: "101-200",
        bounds: BucketBounds::new(101, Some(200)),
    },
    CapacityBucket {
        label: "201-500",
        bounds: BucketBounds::new(201, Some(500)),
    },
    CapacityBucket {
        label: "Above 500",
        bounds: BucketBounds::new(501, None),
    },
];

impl CapacityBucket {
    /// Find a bucket by its exact display label.
    pub fn from_label(label: &str) -> Result<&'static CapacityBucket, FacetError> {
        CAPACITY_BUCKETS
            .iter()
            .find(|bucket| bucket.label == label)
            .ok_or_else(|| FacetError::UnknownFacetValue {
                facet: "capacity bucket",
                value: label.to_string(),
            })
    }

    /// Find the bucket defined with exactly these bounds.
    pub fn from_bounds(bounds: BucketBounds) -> Option<&'static CapacityBucket> {
        CAPACITY_BUCKETS.iter().find(|bucket| bucket.bounds == bounds)
    }
}
