//! Place data model shared by the catalog and the saved-places store.
//!
//! # Invariants
//! - A place is identified by its catalog `id` string; ids are never reused.
//! - Saved records are snapshots and are not re-synced with the catalog.

pub mod place;
