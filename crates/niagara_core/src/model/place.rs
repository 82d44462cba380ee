//! Coordinates and the persisted saved-place projection.

use serde::{Deserialize, Serialize};

/// Stable catalog identifier such as `p1`.
pub type PlaceId = String;

/// WGS84 position in degrees. Not validated; values come from static catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The reduced record persisted for a bookmarked place.
///
/// Field names are part of the stored JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlace {
    /// Primary key within the saved collection.
    pub id: PlaceId,
    /// Display name captured at save time.
    pub title: String,
    /// Free-form human-readable address.
    pub address: String,
    pub coords: Coordinates,
}

impl SavedPlace {
    pub fn new(
        id: impl Into<PlaceId>,
        title: impl Into<String>,
        address: impl Into<String>,
        coords: Coordinates,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            address: address.into(),
            coords,
        }
    }
}
