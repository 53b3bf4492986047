//! Parser for venue payloads from the booking API.
//!
//! Accepted shapes:
//! - a top-level array: `[ {venue}, ... ]`
//! - an envelope: `{ "venues": [ ... ] }` or `{ "data": [ ... ] }`
//!
//! Each venue must be an object with an `id`; one bad entry rejects the whole
//! payload. The filtering fields are read leniently through `VenueRecord`'s
//! own `Deserialize`: numbers and numeric strings are accepted, anything else
//! leaves the field as `None` instead of failing the payload.

use crate::error::{CatalogError, Result};
use crate::lenient::json_kind;
use crate::types::VenueRecord;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Parse a JSON payload into venue records, preserving payload order.
pub fn parse_venues(payload: &str) -> Result<Vec<VenueRecord>> {
    let value: Value = serde_json::from_str(payload)?;
    parse_venue_value(value)
}

/// Same as [`parse_venues`] for an already-decoded JSON value.
pub fn parse_venue_value(value: Value) -> Result<Vec<VenueRecord>> {
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut envelope) => match envelope
            .remove("venues")
            .or_else(|| envelope.remove("data"))
        {
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                return Err(CatalogError::InvalidPayload(
                    "venue list is not an array".to_string(),
                ));
            }
            None => {
                return Err(CatalogError::InvalidPayload(
                    "expected an array or an object with `venues`/`data`".to_string(),
                ));
            }
        },
        other => {
            return Err(CatalogError::InvalidPayload(format!(
                "expected a venue list, found {}",
                json_kind(&other)
            )));
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_venue(index, entry))
        .collect()
}

fn parse_venue(index: usize, entry: &Value) -> Result<VenueRecord> {
    // Serde would also read a struct from an array; only objects are venues
    if !entry.is_object() {
        return Err(CatalogError::ParseError {
            index,
            reason: format!("expected an object, found {}", json_kind(entry)),
        });
    }

    let venue = VenueRecord::deserialize(entry).map_err(|err| CatalogError::ParseError {
        index,
        reason: err.to_string(),
    })?;

    if venue.category.is_none() || venue.capacity.is_none() || venue.price.is_none() {
        debug!(
            "Venue {} is missing filter fields (category: {:?}, capacity: {:?}, price: {:?})",
            venue.id, venue.category, venue.capacity, venue.price
        );
    }

    Ok(venue)
}
