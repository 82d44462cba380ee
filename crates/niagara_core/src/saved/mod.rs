//! Saved-places store: the user's on-device shortlist of places.
//!
//! # Responsibility
//! - Own the durable ordered collection of `SavedPlace` records.
//! - Offer list/contains/add/remove/toggle as whole-collection
//!   read-modify-write operations over one storage key.
//!
//! # Invariants
//! - No two persisted records share an `id`.
//! - Insertion order is preserved; add appends, remove never reorders.
//! - A blob that is not a JSON array reads as an empty collection.
//! - Array items without the record shape are skipped on read and kept on
//!   write.
//! - Operations on one store instance never interleave.

pub mod codec;
mod store;

pub use codec::{
    decode_entries, decode_places, encode_entries, encode_places, DecodeError, StoredEntry,
    SAVED_PLACES_KEY,
};
pub use store::{SavedPlacesStore, StoreError, StoreResult};
