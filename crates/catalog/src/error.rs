//! Error types for the catalog crate.
//!
//! Any `CatalogError` means the catalog is unavailable to the caller; the
//! variants only say why.

use thiserror::Error;

/// Errors that can occur while fetching or ingesting a venue catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The booking API could not be reached or answered with a failure status
    #[error("Catalog unavailable: {reason}")]
    Unavailable { reason: String },

    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The payload was not valid JSON, or not shaped like a venue list
    #[error("Invalid catalog payload: {0}")]
    InvalidPayload(String),

    /// One venue entry could not be ingested
    ///
    /// The whole payload is rejected when this happens, so the store never
    /// holds a partial catalog.
    #[error("Parse error at venue #{index}: {reason}")]
    ParseError { index: usize, reason: String },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::InvalidPayload(err.to_string())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Unavailable {
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
