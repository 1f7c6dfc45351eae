//! Undo/redo example for travelmap-rs
//!
//! Walks through the snapshot history: undoing a cascading delete, redoing
//! it, and losing the redo branch after a new edit.

use chrono::NaiveDate;
use travelmap_rs::prelude::*;

fn show(label: &str, store: &TravelStore) {
    let names: Vec<&str> = store.cities().iter().map(City::name).collect();
    let stops: usize = store.trips().iter().map(|t| t.city_ids.len()).sum();
    println!(
        "{label:<18} cities=[{}] trip stops={stops} undo={} redo={}",
        names.join(", "),
        store.can_undo(),
        store.can_redo()
    );
}

fn main() -> Result<()> {
    println!("=== travelmap-rs Undo/Redo Example ===\n");

    let mut store = TravelStore::new();
    let day = NaiveDate::from_ymd_opt(2023, 7, 14).unwrap_or_default();

    let paris_at = Coordinates::new(48.8566, 2.3522);
    let paris = City::new("Paris", "France", paris_at, CityKind::Visited, day);
    let paris_id = store.add_city(paris)?.id.clone();
    let lyon_at = Coordinates::new(45.764, 4.8357);
    let lyon = City::new("Lyon", "France", lyon_at, CityKind::Visited, day);
    let lyon_id = store.add_city(lyon)?.id.clone();
    store.add_trip(Trip::new("France", "blue").with_cities([paris_id.clone(), lyon_id]))?;
    show("initial", &store);

    store.delete_city(&paris_id);
    show("delete Paris", &store);

    store.undo();
    show("undo", &store);

    store.redo();
    show("redo", &store);

    store.undo();
    store.update_city(&paris_id, &CityPatch::kind(CityKind::Lived))?;
    show("edit after undo", &store);

    println!(
        "\nHistory holds {} snapshots (cap {}).",
        store.history().len(),
        store.history().config().max_depth
    );

    Ok(())
}
