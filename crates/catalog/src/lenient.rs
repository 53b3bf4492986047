//! Field deserializers used by [`VenueRecord`](crate::types::VenueRecord).
//!
//! Only the id is strict. Every other field degrades to `None` (or an empty
//! list) when the API sends something unusable, so one odd field never drops
//! a venue from the catalog.

use crate::types::VenueId;
use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

/// String or integer id; numbers are stringified.
pub(crate) fn venue_id<'de, D>(deserializer: D) -> Result<VenueId, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) if !id.is_empty() => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(de::Error::custom(format!(
            "id must be a non-empty string or a number, found {}",
            json_kind(&other)
        ))),
    }
}

/// Category tag, kept byte for byte. Blank or non-string tags are dropped.
pub(crate) fn tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Display text, trimmed. Blank or non-string values are dropped.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    })
}

/// Whole, non-negative guest count. Accepts numeric strings such as `"80"`.
pub(crate) fn capacity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let capacity = number(Value::deserialize(deserializer)?)
        .filter(|c| *c >= 0.0 && c.fract() == 0.0 && *c <= u32::MAX as f64);
    Ok(capacity.map(|c| c as u32))
}

/// Non-negative price. Accepts numeric strings.
pub(crate) fn price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number(Value::deserialize(deserializer)?).filter(|price| *price >= 0.0))
}

/// An `images` array (non-string entries skipped) or a single `image` string.
pub(crate) fn images<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(images) => images
            .into_iter()
            .filter_map(|image| match image {
                Value::String(image) => Some(image),
                _ => None,
            })
            .collect(),
        Value::String(image) => vec![image],
        _ => Vec::new(),
    })
}

fn number(value: Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
