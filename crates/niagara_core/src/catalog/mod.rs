//! Canonical catalog of curated Niagara points of interest.
//!
//! # Responsibility
//! - Hold the one static place list every screen reads from.
//! - Project catalog places into the `SavedPlace` record the store persists.
//!
//! # Invariants
//! - Place ids are unique and stable across releases.
//! - Every place belongs to exactly one category listed in `CATEGORIES`.

mod data;

use crate::model::place::{Coordinates, SavedPlace};

pub use data::{CATEGORIES, PLACES};

/// Map center used when no place is focused (Rainbow Bridge).
pub const DEFAULT_MAP_CENTER: Coordinates = Coordinates::new(43.0893, -79.0714);

/// A browsing section on the curated-spots screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub title: &'static str,
}

/// A curated point of interest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    pub id: &'static str,
    /// Key of the owning `Category`.
    pub category: &'static str,
    pub title: &'static str,
    /// Long text shown when browsing by category.
    pub description: &'static str,
    /// Short blurb shown on map and saved cards.
    pub summary: &'static str,
    pub address: &'static str,
    pub coords: Coordinates,
}

impl Place {
    /// Reduced projection handed to the saved-places store.
    pub fn to_saved(&self) -> SavedPlace {
        SavedPlace::new(self.id, self.title, self.address, self.coords)
    }
}

/// A place a screen should center on, either from the catalog or rebuilt
/// from a saved record whose id the catalog no longer knows.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusedPlace {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub address: String,
    pub coords: Coordinates,
    /// `false` when the place came from the saved record only.
    pub in_catalog: bool,
}

pub fn categories() -> &'static [Category] {
    CATEGORIES
}

pub fn places() -> &'static [Place] {
    PLACES
}

/// Places of one category in catalog order; empty for unknown keys.
pub fn places_in(category_key: &str) -> impl Iterator<Item = &'static Place> + '_ {
    PLACES
        .iter()
        .filter(move |place| place.category == category_key)
}

pub fn find_place(id: &str) -> Option<&'static Place> {
    PLACES.iter().find(|place| place.id == id)
}

pub fn find_category(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.key == key)
}

/// Resolves a deep-link focus target, preferring current catalog text.
pub fn resolve_focus(target: &SavedPlace) -> FocusedPlace {
    match find_place(&target.id) {
        Some(place) => FocusedPlace {
            id: place.id.to_string(),
            title: place.title.to_string(),
            summary: place.summary.to_string(),
            address: place.address.to_string(),
            coords: place.coords,
            in_catalog: true,
        },
        None => FocusedPlace {
            id: target.id.clone(),
            title: target.title.clone(),
            summary: String::new(),
            address: target.address.clone(),
            coords: target.coords,
            in_catalog: false,
        },
    }
}
