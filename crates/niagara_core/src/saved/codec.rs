//! JSON layout of the persisted saved-places blob.
//!
//! The blob is a JSON array of
//! `{"id", "title", "address", "coords": {"lat", "lng"}}` objects.
//! Items that do not match that shape are carried as raw JSON so a rewrite
//! puts them back unchanged.

use crate::model::place::SavedPlace;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key of the saved-places blob. A format change gets a new key.
pub const SAVED_PLACES_KEY: &str = "saved_places_v1";

/// Why a persisted blob could not be read back as a collection.
#[derive(Debug)]
pub enum DecodeError {
    /// Not JSON.
    Malformed(serde_json::Error),
    /// Well-formed JSON of the wrong kind (object, string, null, ...).
    NotASequence(&'static str),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed saved places blob: {err}"),
            Self::NotASequence(kind) => {
                write!(f, "saved places blob is a JSON {kind}, expected an array")
            }
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::NotASequence(_) => None,
        }
    }
}

/// One item of the persisted array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoredEntry {
    Place(SavedPlace),
    /// An item without the record shape, kept verbatim.
    Unreadable(Value),
}

impl StoredEntry {
    fn from_value(value: Value) -> Self {
        match SavedPlace::deserialize(&value) {
            Ok(place) => Self::Place(place),
            Err(_) => Self::Unreadable(value),
        }
    }

    /// The `id` field, when the item carries a string one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Place(place) => Some(place.id.as_str()),
            Self::Unreadable(value) => value.get("id").and_then(Value::as_str),
        }
    }

    pub fn as_place(&self) -> Option<&SavedPlace> {
        match self {
            Self::Place(place) => Some(place),
            Self::Unreadable(_) => None,
        }
    }

    pub fn into_place(self) -> Option<SavedPlace> {
        match self {
            Self::Place(place) => Some(place),
            Self::Unreadable(_) => None,
        }
    }
}

/// Serializes the collection, preserving order.
pub fn encode_places(places: &[SavedPlace]) -> Result<String, serde_json::Error> {
    serde_json::to_string(places)
}

/// Serializes stored items, unreadable ones included, preserving order.
pub fn encode_entries(entries: &[StoredEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string(entries)
}

/// Parses a persisted blob item by item.
///
/// A blank blob is an empty collection. Only input that is not JSON, or JSON
/// that is not an array, fails.
pub fn decode_entries(raw: &str) -> Result<Vec<StoredEntry>, DecodeError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(raw).map_err(DecodeError::Malformed)?;
    match value {
        Value::Array(items) => Ok(items.into_iter().map(StoredEntry::from_value).collect()),
        other => Err(DecodeError::NotASequence(json_kind(&other))),
    }
}

/// Parses a persisted blob, skipping items that lack the record shape.
pub fn decode_places(raw: &str) -> Result<Vec<SavedPlace>, DecodeError> {
    Ok(decode_entries(raw)?
        .into_iter()
        .filter_map(StoredEntry::into_place)
        .collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
