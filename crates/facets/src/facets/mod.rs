//! Facet implementations.
//!
//! One module per filter dimension. Each facet borrows its part of the
//! selection, so building one is free.

pub mod capacity;
pub mod category;
pub mod price;

// Re-export for convenience
pub use capacity::CapacityFacet;
pub use category::CategoryFacet;
pub use price::PriceFacet;
