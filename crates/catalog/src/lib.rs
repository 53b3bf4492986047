//! # Catalog Crate
//!
//! This crate fetches and holds the venue catalog for a browsing session.
//!
//! ## Main Components
//!
//! - **types**: `VenueRecord` and its id type
//! - **parser**: Ingestion of booking API payloads, with lenient per-field
//!   deserializers for the filtering fields
//! - **source**: The `VenueSource` seam plus file, HTTP and in-memory sources
//! - **store**: `CatalogStore`, the fetch-once snapshot
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogStore, HttpVenueSource};
//!
//! let source = HttpVenueSource::new("http://localhost:8080/api")?;
//! let mut store = CatalogStore::new();
//! store.load(&source).await?;
//!
//! for venue in store.all() {
//!     println!("{} ({:?} guests)", venue.display_name(), venue.capacity);
//! }
//! ```

// Public modules
pub mod error;
mod lenient;
pub mod parser;
pub mod source;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use source::{HttpVenueSource, JsonFileSource, StaticSource, VenueSource};
pub use store::CatalogStore;
pub use types::{VenueId, VenueRecord};
