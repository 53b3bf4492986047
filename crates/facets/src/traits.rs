//! Core trait for facet predicates.
//!
//! Each facet turns one part of the [`FacetSelection`](crate::FacetSelection)
//! into a per-venue test. The composer conjoins them.

use catalog::VenueRecord;

/// One filter dimension evaluated against a single venue.
///
/// ## Design Note
/// - `Send + Sync` so a composed predicate can be shared across rayon workers
/// - `admits` is total: a malformed venue simply fails an active facet
pub trait Facet: Send + Sync {
    /// Returns the name of this facet (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether this facet constrains anything at all.
    ///
    /// An inactive facet admits every venue.
    fn is_active(&self) -> bool;

    /// Whether the venue passes this facet
    fn admits(&self, venue: &VenueRecord) -> bool;
}
