//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `niagara_core` linkage without the Flutter runtime.
//! - Exercise the saved-places store end to end on an in-memory database.

use niagara_core::{find_place, SavedPlacesStore, SqliteKeyValueStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("niagara_core ping={}", niagara_core::ping());
    println!("niagara_core version={}", niagara_core::core_version());
    println!("niagara_core places={}", niagara_core::places().len());

    match saved_places_probe() {
        Ok(summary) => {
            println!("niagara_core saved_places={summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("niagara_core saved_places=error {err}");
            ExitCode::FAILURE
        }
    }
}

fn saved_places_probe() -> Result<String, Box<dyn std::error::Error>> {
    let store = SavedPlacesStore::new(SqliteKeyValueStore::open_in_memory()?);
    let place = find_place("p1").ok_or("catalog is missing p1")?.to_saved();

    let saved = store.toggle(&place)?;
    let count = store.list()?.len();
    let unsaved = !store.toggle(&place)?;

    Ok(format!(
        "ok toggle_on={saved} count={count} toggle_off={unsaved}"
    ))
}
