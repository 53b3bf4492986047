//! Error types for the facets crate.

use thiserror::Error;

/// Errors returned by Filter State mutators.
///
/// A rejected mutation never changes the selection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FacetError {
    /// The value is not one of the fixed facet definitions
    #[error("Unknown {facet} value: {value}")]
    UnknownFacetValue { facet: &'static str, value: String },

    /// Price bounds must be finite and non-negative
    #[error("Invalid price bound: {value}")]
    InvalidPriceBound { value: f64 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FacetError>;
