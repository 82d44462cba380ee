//! Core logic for the Niagara guide app.
//! Owns the saved-places store and the static content the screens browse.

pub mod catalog;
pub mod db;
pub mod kv;
pub mod logging;
pub mod model;
pub mod notes;
pub mod random;
pub mod saved;
pub mod share;

pub use catalog::{find_place, places, places_in, resolve_focus, Category, FocusedPlace, Place};
pub use kv::{KeyValueStore, KvError, KvResult, MemoryKeyValueStore, SqliteKeyValueStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::place::{Coordinates, PlaceId, SavedPlace};
pub use notes::{nature_notes, NatureNote};
pub use random::{pick_random_place, pick_random_place_default};
pub use saved::{SavedPlacesStore, StoreError, StoreResult, SAVED_PLACES_KEY};
pub use share::{note_share_message, place_share_message};

/// Health-check for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
