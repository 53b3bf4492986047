//! Core domain types for the venue catalog.
//!
//! A [`VenueRecord`] is what the booking API hands us for one venue. Only
//! `category`, `capacity` and `price` matter to filtering; the rest is carried
//! through for display.

use crate::lenient;
use serde::Deserialize;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a venue, as issued by the booking API.
///
/// The API uses both string and numeric ids; numeric ones are stringified on
/// ingestion so lookups never depend on the JSON type.
pub type VenueId = String;

// =============================================================================
// Venue Record
// =============================================================================

/// One venue as returned by the booking API.
///
/// The three filtering fields are `Option` because real payloads are
/// heterogeneous: a record may omit a field or carry something non-numeric.
/// Such a record still belongs to the catalog, it just fails any active facet
/// that needs the missing field.
///
/// Deserializing requires an `id` (or `_id`); every other field is optional
/// and lenient, see [`parse_venues`](crate::parser::parse_venues).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VenueRecord {
    #[serde(alias = "_id", deserialize_with = "lenient::venue_id")]
    pub id: VenueId,
    /// Event-type tag, e.g. "Conference" or "Weddings"
    #[serde(default, deserialize_with = "lenient::tag")]
    pub category: Option<String>,
    /// Number of guests the venue holds
    #[serde(default, deserialize_with = "lenient::capacity")]
    pub capacity: Option<u32>,
    /// Cost per booking day
    #[serde(default, deserialize_with = "lenient::price")]
    pub price: Option<f64>,

    // Display-only fields
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(default, alias = "image", deserialize_with = "lenient::images")]
    pub images: Vec<String>,
}

impl VenueRecord {
    /// Create a record carrying only an id; every other field is absent.
    pub fn new(id: impl Into<VenueId>) -> Self {
        Self {
            id: id.into(),
            category: None,
            capacity: None,
            price: None,
            name: None,
            location: None,
            images: Vec::new(),
        }
    }

    /// Set the event-type tag (builder pattern).
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the guest capacity (builder pattern).
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the per-day price (builder pattern).
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the display name (builder pattern).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the display location (builder pattern).
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Name for display, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
