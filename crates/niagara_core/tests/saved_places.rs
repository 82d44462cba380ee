use niagara_core::saved::{decode_places, encode_places};
use niagara_core::{
    Coordinates, KeyValueStore, MemoryKeyValueStore, SavedPlace, SavedPlacesStore,
    SqliteKeyValueStore, SAVED_PLACES_KEY,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn horseshoe() -> SavedPlace {
    SavedPlace::new(
        "p1",
        "Horseshoe Falls Overlook",
        "Niagara Parkway",
        Coordinates::new(43.0799, -79.0747),
    )
}

fn skylon() -> SavedPlace {
    SavedPlace::new(
        "p2",
        "Skylon Tower Observation Deck",
        "5200 Robinson St, Niagara Falls, ON L2G 2A3, Canada",
        Coordinates::new(43.0822, -79.0789),
    )
}

fn memory_store() -> SavedPlacesStore<MemoryKeyValueStore> {
    SavedPlacesStore::new(MemoryKeyValueStore::new())
}

fn store_with_raw(raw: &str) -> SavedPlacesStore<MemoryKeyValueStore> {
    let mut kv = MemoryKeyValueStore::new();
    kv.set_item(SAVED_PLACES_KEY, raw).unwrap();
    SavedPlacesStore::new(kv)
}

#[test]
fn empty_store_lists_nothing() {
    let store = memory_store();
    assert!(store.list().unwrap().is_empty());
    assert!(!store.contains("p1").unwrap());
}

#[test]
fn toggle_on_empty_store_saves_place() {
    let store = memory_store();

    assert!(store.toggle(&horseshoe()).unwrap());
    assert_eq!(store.list().unwrap(), vec![horseshoe()]);
    assert!(store.contains("p1").unwrap());
}

#[test]
fn removing_unknown_id_leaves_list_unchanged() {
    let store = memory_store();
    store.add(&horseshoe()).unwrap();

    store.remove("p9").unwrap();

    assert_eq!(store.list().unwrap(), vec![horseshoe()]);
}

#[test]
fn add_with_existing_id_keeps_original_record() {
    let store = memory_store();
    store.add(&horseshoe()).unwrap();
    store.add(&skylon()).unwrap();

    let mut renamed = horseshoe();
    renamed.title = "Renamed Overlook".to_string();
    store.add(&renamed).unwrap();

    assert_eq!(store.list().unwrap(), vec![horseshoe(), skylon()]);
}

#[test]
fn add_is_idempotent() {
    let once = memory_store();
    once.add(&horseshoe()).unwrap();

    let twice = memory_store();
    twice.add(&horseshoe()).unwrap();
    twice.add(&horseshoe()).unwrap();

    assert_eq!(once.list().unwrap(), twice.list().unwrap());
}

#[test]
fn remove_is_idempotent() {
    let store = memory_store();
    store.add(&horseshoe()).unwrap();
    store.add(&skylon()).unwrap();

    store.remove("p1").unwrap();
    let after_once = store.list().unwrap();
    store.remove("p1").unwrap();

    assert_eq!(store.list().unwrap(), after_once);
    assert_eq!(after_once, vec![skylon()]);
}

#[test]
fn toggle_twice_restores_previous_collection() {
    let store = memory_store();
    store.add(&skylon()).unwrap();
    let before = store.list().unwrap();

    assert!(store.toggle(&horseshoe()).unwrap());
    assert!(store.contains("p1").unwrap());
    assert!(!store.toggle(&horseshoe()).unwrap());
    assert!(!store.contains("p1").unwrap());

    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn add_appends_in_insertion_order() {
    let store = memory_store();
    let ids = ["p5", "p1", "p12", "p3"];
    for id in ids {
        store
            .add(&SavedPlace::new(id, id, "addr", Coordinates::new(43.0, -79.0)))
            .unwrap();
    }

    let listed: Vec<_> = store.list().unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(listed, ids);
}

#[test]
fn ids_stay_unique_across_mixed_operations() {
    let store = memory_store();
    let ids = ["p1", "p2", "p3", "p1", "p2", "p1", "p4", "p3"];
    for (step, id) in ids.iter().enumerate() {
        let place = SavedPlace::new(*id, "t", "a", Coordinates::new(43.0, -79.0));
        match step % 3 {
            0 => store.add(&place).unwrap(),
            1 => {
                store.toggle(&place).unwrap();
            }
            _ => {
                store.add(&place).unwrap();
                store.add(&place).unwrap();
            }
        }

        let listed = store.list().unwrap();
        let unique: HashSet<_> = listed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(unique.len(), listed.len(), "duplicate id after step {step}");
    }
}

#[test]
fn codec_round_trip_preserves_records_and_order() {
    let places = vec![skylon(), horseshoe()];
    let raw = encode_places(&places).unwrap();
    assert_eq!(decode_places(&raw).unwrap(), places);
}

#[test]
fn persisted_blob_is_a_json_array_under_fixed_key() {
    let store = memory_store();
    store.add(&horseshoe()).unwrap();

    let kv = store.into_inner();
    let raw = kv.get_item("saved_places_v1").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["id"], "p1");
    assert_eq!(value[0]["address"], "Niagara Parkway");
    assert_eq!(value[0]["coords"]["lng"], -79.0747);
}

#[test]
fn corrupt_blob_reads_as_empty() {
    for raw in ["not json at all", "{\"id\":\"p1\"}", "42", "null"] {
        let store = store_with_raw(raw);
        assert!(store.list().unwrap().is_empty(), "blob {raw:?}");
        assert!(!store.contains("p1").unwrap());
    }
}

#[test]
fn corrupt_blob_is_replaced_on_next_write() {
    let store = store_with_raw("{garbage");
    assert!(store.toggle(&horseshoe()).unwrap());
    assert_eq!(store.list().unwrap(), vec![horseshoe()]);
}

const MIXED_BLOB: &str = r#"[{"id":"p1","title":"Horseshoe Falls Overlook","address":"Niagara Parkway","coords":{"lat":43.0799,"lng":-79.0747}},{"id":"p2","title":"Skylon"}]"#;

fn table_rock() -> SavedPlace {
    SavedPlace::new(
        "p3",
        "Table Rock Welcome Centre",
        "6650 Niagara Pkwy, Niagara Falls, ON L2E 6T2, Canada",
        Coordinates::new(43.0791, -79.0786),
    )
}

fn stored_json(kv: &MemoryKeyValueStore) -> serde_json::Value {
    let raw = kv.get_item(SAVED_PLACES_KEY).unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn unreadable_item_does_not_hide_valid_places() {
    let store = store_with_raw(MIXED_BLOB);

    assert_eq!(store.list().unwrap(), vec![horseshoe()]);
    assert!(store.contains("p1").unwrap());
    assert!(!store.contains("p2").unwrap());

    let only_bad = store_with_raw("[{\"id\":1}]");
    assert!(only_bad.list().unwrap().is_empty());
}

#[test]
fn adding_next_to_unreadable_item_keeps_everything() {
    let store = store_with_raw(MIXED_BLOB);

    store.add(&table_rock()).unwrap();

    assert_eq!(store.list().unwrap(), vec![horseshoe(), table_rock()]);
    let value = stored_json(&store.into_inner());
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[0]["id"], "p1");
    assert_eq!(value[1], serde_json::json!({"id": "p2", "title": "Skylon"}));
    assert_eq!(value[2]["id"], "p3");
}

#[test]
fn saving_id_of_unreadable_item_replaces_it() {
    let store = store_with_raw(MIXED_BLOB);

    assert!(store.toggle(&skylon()).unwrap());

    assert_eq!(store.list().unwrap(), vec![horseshoe(), skylon()]);
    let value = stored_json(&store.into_inner());
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["title"], "Skylon Tower Observation Deck");
}

#[test]
fn removing_id_of_unreadable_item_drops_it() {
    let store = store_with_raw(MIXED_BLOB);

    store.remove("p2").unwrap();

    let value = stored_json(&store.into_inner());
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["id"], "p1");
}

#[test]
fn saved_places_survive_app_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guide.sqlite3");

    let store = SavedPlacesStore::new(SqliteKeyValueStore::open(&path).unwrap());
    store.add(&horseshoe()).unwrap();
    store.add(&skylon()).unwrap();
    drop(store);

    let reopened = SavedPlacesStore::new(SqliteKeyValueStore::open(&path).unwrap());
    assert_eq!(reopened.list().unwrap(), vec![horseshoe(), skylon()]);
    assert!(!reopened.toggle(&skylon()).unwrap());
    assert_eq!(reopened.list().unwrap(), vec![horseshoe()]);
}

#[test]
fn concurrent_toggles_do_not_lose_updates() {
    let store = Arc::new(SavedPlacesStore::new(
        SqliteKeyValueStore::open_in_memory().unwrap(),
    ));

    let handles: Vec<_> = (1..=12)
        .map(|n| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let place = SavedPlace::new(
                    format!("p{n}"),
                    format!("place {n}"),
                    "Niagara Parkway",
                    Coordinates::new(43.08, -79.07),
                );
                store.toggle(&place).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }

    let ids: HashSet<_> = store.list().unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 12);
}
