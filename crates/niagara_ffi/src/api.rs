//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose catalog, notes, share text and saved-places operations to Dart.
//! - Hold the one saved-places store instance for the app process.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Store functions are not `sync`: Dart awaits them off the UI thread.
//! - Store failures come back as `ok=false` envelopes, never as exceptions.

use log::{error, warn};
use niagara_core::catalog::{self, Category, FocusedPlace, Place, DEFAULT_MAP_CENTER};
use niagara_core::notes::{self, NatureNote};
use niagara_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    note_share_message, pick_random_place_default, ping as ping_inner, place_share_message,
    Coordinates, SavedPlace, SavedPlacesStore, SqliteKeyValueStore, StoreResult,
};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const DB_FILE_NAME: &str = "niagara_guide.sqlite3";
const DB_PATH_ENV: &str = "NIAGARA_DB_PATH";

static SAVED_STORE: OnceCell<StoreHandle> = OnceCell::new();

struct StoreHandle {
    db_path: PathBuf,
    store: SavedPlacesStore<SqliteKeyValueStore>,
}

/// Health-check for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success, otherwise the error message.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Browsing section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryItem {
    pub key: String,
    pub title: String,
}

/// Catalog place with display text.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceItem {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub summary: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// Trivia card with its ready-made share text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: String,
    pub title: String,
    pub body: String,
    pub share_message: String,
}

/// Persisted saved-place record as seen by Dart.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPlaceItem {
    pub id: String,
    pub title: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// A map position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Place the map screen centers on when opened from a saved card.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusedPlaceItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    /// `false` when only the saved record knew this place.
    pub in_catalog: bool,
}

/// Result of a saved-places command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedActionResponse {
    pub ok: bool,
    /// Membership after the call, when the command determines it.
    pub saved: Option<bool>,
    pub message: String,
}

impl SavedActionResponse {
    fn success(saved: Option<bool>, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            saved,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            saved: None,
            message: message.into(),
        }
    }
}

/// Saved-places listing envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedListResponse {
    pub ok: bool,
    pub items: Vec<SavedPlaceItem>,
    pub message: String,
}

/// One row of a batch membership answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedMembershipEntry {
    pub id: String,
    pub saved: bool,
}

/// Batch membership envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedMembershipResponse {
    pub ok: bool,
    pub entries: Vec<SavedMembershipEntry>,
    pub message: String,
}

#[flutter_rust_bridge::frb(sync)]
pub fn catalog_categories() -> Vec<CategoryItem> {
    catalog::categories().iter().map(to_category_item).collect()
}

/// Catalog places, optionally restricted to one category key.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_places(category: Option<String>) -> Vec<PlaceItem> {
    match category {
        Some(key) => catalog::places_in(key.trim())
            .map(to_place_item)
            .collect(),
        None => catalog::places().iter().map(to_place_item).collect(),
    }
}

/// Uniformly random catalog place.
#[flutter_rust_bridge::frb(sync)]
pub fn random_place() -> Option<PlaceItem> {
    pick_random_place_default().map(to_place_item)
}

#[flutter_rust_bridge::frb(sync)]
pub fn nature_notes() -> Vec<NoteItem> {
    notes::nature_notes().iter().map(to_note_item).collect()
}

/// Map center when no place is focused.
#[flutter_rust_bridge::frb(sync)]
pub fn default_map_center() -> MapPoint {
    MapPoint {
        lat: DEFAULT_MAP_CENTER.lat,
        lng: DEFAULT_MAP_CENTER.lng,
    }
}

/// Focus target for a saved record, using current catalog text when the id
/// is still in the catalog.
#[flutter_rust_bridge::frb(sync)]
pub fn map_focus(place: SavedPlaceItem) -> FocusedPlaceItem {
    to_focused_item(catalog::resolve_focus(&to_saved_place(place)))
}

/// Share text for a catalog place, or `None` for unknown ids.
#[flutter_rust_bridge::frb(sync)]
pub fn place_share_text(place_id: String) -> Option<String> {
    catalog::find_place(place_id.trim())
        .map(|place| place_share_message(place.title, place.address, place.coords))
}

/// Share text for a saved record, whether or not the catalog still has it.
#[flutter_rust_bridge::frb(sync)]
pub fn saved_place_share_text(place: SavedPlaceItem) -> String {
    place_share_message(&place.title, &place.address, Coordinates::new(place.lat, place.lng))
}

/// Opens the saved-places store at `db_path`.
///
/// Call once at app start. Repeating the call with the same path succeeds;
/// a different path is rejected. Without this call the store opens lazily at
/// `NIAGARA_DB_PATH` or a temp-dir default.
pub fn saved_places_init(db_path: String) -> SavedActionResponse {
    let requested = PathBuf::from(db_path.trim());
    if requested.as_os_str().is_empty() {
        return SavedActionResponse::failure("saved_places_init failed: db_path cannot be empty");
    }

    match store_handle_at(&requested) {
        Ok(handle) if handle.db_path == requested => {
            SavedActionResponse::success(None, "Saved places ready.")
        }
        Ok(handle) => SavedActionResponse::failure(format!(
            "saved_places_init failed: store already open at `{}`",
            handle.db_path.display()
        )),
        Err(err) => SavedActionResponse::failure(format!("saved_places_init failed: {err}")),
    }
}

pub fn saved_places_list() -> SavedListResponse {
    match with_store(|store| store.list()) {
        Ok(places) => {
            let items: Vec<_> = places.into_iter().map(to_saved_item).collect();
            let message = if items.is_empty() {
                "No saved places.".to_string()
            } else {
                format!("{} saved place(s).", items.len())
            };
            SavedListResponse {
                ok: true,
                items,
                message,
            }
        }
        Err(err) => SavedListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("saved_places_list failed: {err}"),
        },
    }
}

pub fn saved_places_contains(place_id: String) -> SavedActionResponse {
    match with_store(|store| store.contains(&place_id)) {
        Ok(saved) => SavedActionResponse::success(Some(saved), ""),
        Err(err) => SavedActionResponse::failure(format!("saved_places_contains failed: {err}")),
    }
}

/// Batch membership, e.g. for every card in a category section.
pub fn saved_places_membership(place_ids: Vec<String>) -> SavedMembershipResponse {
    match with_store(|store| store.membership(&place_ids)) {
        Ok(map) => SavedMembershipResponse {
            ok: true,
            entries: map
                .into_iter()
                .map(|(id, saved)| SavedMembershipEntry { id, saved })
                .collect(),
            message: String::new(),
        },
        Err(err) => SavedMembershipResponse {
            ok: false,
            entries: Vec::new(),
            message: format!("saved_places_membership failed: {err}"),
        },
    }
}

pub fn saved_places_add(place: SavedPlaceItem) -> SavedActionResponse {
    let place = to_saved_place(place);
    match with_store(|store| store.add(&place)) {
        Ok(()) => SavedActionResponse::success(Some(true), "Place saved."),
        Err(err) => SavedActionResponse::failure(format!("saved_places_add failed: {err}")),
    }
}

pub fn saved_places_remove(place_id: String) -> SavedActionResponse {
    match with_store(|store| store.remove(&place_id)) {
        Ok(()) => SavedActionResponse::success(Some(false), "Place removed."),
        Err(err) => SavedActionResponse::failure(format!("saved_places_remove failed: {err}")),
    }
}

/// Flips membership; `saved` carries the resulting state.
pub fn saved_places_toggle(place: SavedPlaceItem) -> SavedActionResponse {
    let place = to_saved_place(place);
    match with_store(|store| store.toggle(&place)) {
        Ok(true) => SavedActionResponse::success(Some(true), "Place saved."),
        Ok(false) => SavedActionResponse::success(Some(false), "Place removed."),
        Err(err) => SavedActionResponse::failure(format!("saved_places_toggle failed: {err}")),
    }
}

fn with_store<T>(
    f: impl FnOnce(&SavedPlacesStore<SqliteKeyValueStore>) -> StoreResult<T>,
) -> Result<T, String> {
    let handle = store_handle_at(&resolve_default_db_path())?;
    f(&handle.store).map_err(|err| {
        warn!("event=ffi_saved_places module=ffi status=error error={err}");
        err.to_string()
    })
}

// The first caller decides the path; later callers get the same store.
fn store_handle_at(db_path: &Path) -> Result<&'static StoreHandle, String> {
    SAVED_STORE.get_or_try_init(|| {
        let store = SqliteKeyValueStore::open(db_path).map_err(|err| {
            error!("event=ffi_store_open module=ffi status=error error={err}");
            format!("saved places DB open failed: {err}")
        })?;
        Ok(StoreHandle {
            db_path: db_path.to_path_buf(),
            store: SavedPlacesStore::new(store),
        })
    })
}

fn resolve_default_db_path() -> PathBuf {
    if let Ok(raw) = std::env::var(DB_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join(DB_FILE_NAME)
}

fn to_category_item(category: &Category) -> CategoryItem {
    CategoryItem {
        key: category.key.to_string(),
        title: category.title.to_string(),
    }
}

fn to_place_item(place: &Place) -> PlaceItem {
    PlaceItem {
        id: place.id.to_string(),
        category: place.category.to_string(),
        title: place.title.to_string(),
        description: place.description.to_string(),
        summary: place.summary.to_string(),
        address: place.address.to_string(),
        lat: place.coords.lat,
        lng: place.coords.lng,
    }
}

fn to_focused_item(focus: FocusedPlace) -> FocusedPlaceItem {
    FocusedPlaceItem {
        id: focus.id,
        title: focus.title,
        summary: focus.summary,
        address: focus.address,
        lat: focus.coords.lat,
        lng: focus.coords.lng,
        in_catalog: focus.in_catalog,
    }
}

fn to_note_item(note: &NatureNote) -> NoteItem {
    NoteItem {
        id: note.id.to_string(),
        title: note.title.to_string(),
        body: note.body.to_string(),
        share_message: note_share_message(note),
    }
}

fn to_saved_item(place: SavedPlace) -> SavedPlaceItem {
    SavedPlaceItem {
        id: place.id,
        title: place.title,
        address: place.address,
        lat: place.coords.lat,
        lng: place.coords.lng,
    }
}

fn to_saved_place(item: SavedPlaceItem) -> SavedPlace {
    SavedPlace::new(
        item.id,
        item.title,
        item.address,
        Coordinates::new(item.lat, item.lng),
    )
}
