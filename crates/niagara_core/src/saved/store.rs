//! Saved-places store over a key-value backend.
//!
//! # Invariants
//! - Every public call takes the backend lock once and holds it for its whole
//!   read-modify-write, so concurrent callers are applied one at a time.
//! - Mutations write the full collection; nothing is patched in place.
//! - Stored items without the record shape are hidden from readers but
//!   written back unchanged, unless a mutation targets their id.

use super::codec::{decode_entries, encode_entries, StoredEntry, SAVED_PLACES_KEY};
use crate::kv::{KeyValueStore, KvError};
use crate::model::place::SavedPlace;
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by the saved-places store.
///
/// Malformed persisted state is not an error; it reads as an empty collection.
#[derive(Debug)]
pub enum StoreError {
    /// The storage medium could not be read or written. Callers should treat
    /// the saved state as unknown and retry later.
    Storage(KvError),
    /// The collection could not be serialized.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "saved places storage unavailable: {err}"),
            Self::Encode(err) => write!(f, "saved places could not be encoded: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Durable, de-duplicated, insertion-ordered list of saved places.
///
/// Construct one per application and share it by reference.
pub struct SavedPlacesStore<S> {
    backend: Mutex<S>,
}

impl<S: KeyValueStore> SavedPlacesStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend: Mutex::new(backend),
        }
    }

    /// Returns the saved places in insertion order.
    ///
    /// Missing or undecodable state yields an empty list; unreadable items
    /// are skipped.
    pub fn list(&self) -> StoreResult<Vec<SavedPlace>> {
        let backend = self.lock();
        let entries = read_entries(&*backend)?;
        Ok(entries
            .into_iter()
            .filter_map(StoredEntry::into_place)
            .collect())
    }

    /// Returns whether a place with `id` is saved. Scans the full list.
    pub fn contains(&self, id: &str) -> StoreResult<bool> {
        let backend = self.lock();
        let entries = read_entries(&*backend)?;
        Ok(is_saved(&entries, id))
    }

    /// Answers membership for many ids with a single read.
    pub fn membership<I, T>(&self, ids: I) -> StoreResult<BTreeMap<String, bool>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let backend = self.lock();
        let entries = read_entries(&*backend)?;
        Ok(ids
            .into_iter()
            .map(|id| {
                let id = id.as_ref();
                (id.to_string(), is_saved(&entries, id))
            })
            .collect())
    }

    /// Appends `place` unless its id is already saved.
    ///
    /// An existing record is never overwritten, even if other fields differ.
    pub fn add(&self, place: &SavedPlace) -> StoreResult<()> {
        let mut backend = self.lock();
        let entries = read_entries(&*backend)?;
        append_place(&mut *backend, entries, place)
    }

    /// Drops every record whose id equals `id`. Missing ids are a no-op.
    pub fn remove(&self, id: &str) -> StoreResult<()> {
        let mut backend = self.lock();
        let entries = read_entries(&*backend)?;
        drop_place(&mut *backend, entries, id)
    }

    /// Flips membership of `place` and returns the resulting state:
    /// `true` when it is now saved, `false` when it was removed.
    pub fn toggle(&self, place: &SavedPlace) -> StoreResult<bool> {
        let mut backend = self.lock();
        let entries = read_entries(&*backend)?;
        if is_saved(&entries, &place.id) {
            drop_place(&mut *backend, entries, &place.id)?;
            Ok(false)
        } else {
            append_place(&mut *backend, entries, place)?;
            Ok(true)
        }
    }

    /// Releases the backend, e.g. to inspect or close it.
    pub fn into_inner(self) -> S {
        self.backend
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A panic mid-operation cannot leave a half-written blob behind, so a
    // poisoned lock still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, S> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn is_saved(entries: &[StoredEntry], id: &str) -> bool {
    entries
        .iter()
        .filter_map(StoredEntry::as_place)
        .any(|place| place.id == id)
}

fn read_entries<S: KeyValueStore>(backend: &S) -> StoreResult<Vec<StoredEntry>> {
    let Some(raw) = backend.get_item(SAVED_PLACES_KEY)? else {
        return Ok(Vec::new());
    };

    match decode_entries(&raw) {
        Ok(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                if entry.as_place().is_none() {
                    warn!(
                        "event=saved_places_read module=saved status=item_skipped error_code=malformed_item index={index}"
                    );
                }
            }
            Ok(entries)
        }
        Err(err) => {
            warn!(
                "event=saved_places_read module=saved status=recovered error_code=malformed_state bytes={} error={err}",
                raw.len()
            );
            Ok(Vec::new())
        }
    }
}

fn write_entries<S: KeyValueStore>(backend: &mut S, entries: &[StoredEntry]) -> StoreResult<()> {
    let raw = encode_entries(entries)?;
    backend.set_item(SAVED_PLACES_KEY, &raw)?;
    Ok(())
}

// An unreadable item with the same id is replaced by the new record so the
// id stays unique in the blob.
fn append_place<S: KeyValueStore>(
    backend: &mut S,
    mut entries: Vec<StoredEntry>,
    place: &SavedPlace,
) -> StoreResult<()> {
    if is_saved(&entries, &place.id) {
        info!(
            "event=saved_place_add module=saved status=skipped reason=duplicate place_id={}",
            place.id
        );
        return Ok(());
    }

    let before = entries.len();
    entries.retain(|entry| entry.id() != Some(place.id.as_str()));
    let replaced = before - entries.len();
    entries.push(StoredEntry::Place(place.clone()));
    write_entries(backend, &entries)?;
    info!(
        "event=saved_place_add module=saved status=ok place_id={} replaced={replaced} count={}",
        place.id,
        entries.len()
    );
    Ok(())
}

fn drop_place<S: KeyValueStore>(
    backend: &mut S,
    mut entries: Vec<StoredEntry>,
    id: &str,
) -> StoreResult<()> {
    let before = entries.len();
    entries.retain(|entry| entry.id() != Some(id));
    write_entries(backend, &entries)?;
    info!(
        "event=saved_place_remove module=saved status=ok place_id={id} removed={} count={}",
        before - entries.len(),
        entries.len()
    );
    Ok(())
}
