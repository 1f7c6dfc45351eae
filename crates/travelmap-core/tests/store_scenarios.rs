//! End-to-end scenarios against the public store API.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use travelmap_core::prelude::*;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 14).unwrap()
}

fn city(id: &str, lat: f64, lng: f64) -> City {
    City::new(id, "Earth", Coordinates::new(lat, lng), CityKind::Visited, day()).with_id(id)
}

#[test]
fn tokyo_paris_duplicate_and_undo_redo() {
    let mut store = TravelStore::new();

    store.add_city(city("tokyo", 35.6762, 139.6503)).unwrap();
    assert_eq!(store.cities().len(), 1);

    let err = store.add_city(city("near-tokyo", 35.6800, 139.6550)).unwrap_err();
    assert_eq!(err.conflicting_city(), Some(&CityId::new("tokyo")));
    assert_eq!(store.cities().len(), 1);

    store.add_city(city("paris", 48.8566, 2.3522)).unwrap();
    assert_eq!(store.cities().len(), 2);

    assert!(store.undo());
    assert_eq!(store.cities().len(), 1);
    assert!(store.city(&CityId::new("paris")).is_none());

    assert!(store.redo());
    assert_eq!(store.cities().len(), 2);
}

#[test]
fn delete_city_in_trip_then_undo_restores_both() {
    let mut store = TravelStore::new();
    store.add_city(city("x", 1.0, 1.0)).unwrap();
    store.add_city(city("y", 5.0, 5.0)).unwrap();
    store
        .add_trip(Trip::new("T", "teal").with_id("t").with_cities(["y", "x"]))
        .unwrap();
    let original = store.trip(&TripId::new("t")).unwrap().city_ids.clone();

    store.delete_city(&CityId::new("x"));
    assert!(store.trips().iter().all(|t| !t.contains(&CityId::new("x"))));

    assert!(store.undo());
    assert!(store.city(&CityId::new("x")).is_some());
    assert_eq!(store.trip(&TripId::new("t")).unwrap().city_ids, original);
}

#[test]
fn undo_after_mutation_sequence_returns_to_start() {
    let mut store = TravelStore::new();
    store.add_city(city("base", 0.0, 0.0)).unwrap();
    let start_cities = store.cities().to_vec();
    let start_trips = store.trips().to_vec();

    store.add_city(city("a", 10.0, 10.0)).unwrap();
    store.add_trip(Trip::new("Trip", "red").with_id("t").with_cities(["a", "base"])).unwrap();
    store.update_city(&CityId::new("a"), &CityPatch::kind(CityKind::Lived)).unwrap();
    store.update_trip(&TripId::new("t"), &TripPatch::rename("Renamed"));
    store.delete_city(&CityId::new("base"));
    let end_cities = store.cities().to_vec();
    let end_trips = store.trips().to_vec();

    for _ in 0..5 {
        assert!(store.undo());
    }
    assert_eq!(store.cities(), start_cities.as_slice());
    assert_eq!(store.trips(), start_trips.as_slice());

    for _ in 0..5 {
        assert!(store.redo());
    }
    assert_eq!(store.cities(), end_cities.as_slice());
    assert_eq!(store.trips(), end_trips.as_slice());
}

#[test]
fn new_mutation_after_undo_discards_redo() {
    let mut store = TravelStore::new();
    store.add_city(city("a", 1.0, 1.0)).unwrap();
    store.add_city(city("b", 2.0, 2.0)).unwrap();
    store.undo();
    assert!(store.can_redo());

    store.add_city(city("c", 3.0, 3.0)).unwrap();
    assert!(!store.can_redo());
    assert!(!store.redo());
    let ids: Vec<&str> = store.cities().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn history_is_capped_at_fifty() {
    let mut store = TravelStore::new();
    for i in 0..60 {
        store.add_city(city(&format!("c{i}"), i as f64, 0.0)).unwrap();
    }
    assert_eq!(store.history().len(), 50);

    let mut undos = 0;
    while store.undo() {
        undos += 1;
    }
    assert_eq!(undos, 49);
    // The oldest retained snapshot holds cities c0..=c10.
    assert_eq!(store.cities().len(), 11);
}

#[test]
fn import_resets_undo_and_redo() {
    let mut source = TravelStore::new();
    source.add_city(city("a", 1.0, 1.0)).unwrap();
    let payload = source.export_value().unwrap();

    let mut store = TravelStore::new();
    store.add_city(city("z", 9.0, 9.0)).unwrap();
    store.add_city(city("y", 8.0, 8.0)).unwrap();
    store.undo();
    assert!(store.can_undo() && store.can_redo());

    store.import_snapshot(&payload).unwrap();
    assert!(!store.can_undo());
    assert!(!store.can_redo());
    assert_eq!(store.cities(), source.cities());
}

#[test]
fn selected_trip_filters_map_until_deleted() {
    let mut store = TravelStore::new();
    store.add_city(city("a", 1.0, 1.0)).unwrap();
    store.add_city(city("b", 2.0, 2.0)).unwrap();
    store.add_trip(Trip::new("Only b", "red").with_id("t").with_cities(["b"])).unwrap();
    store.update_preferences(&PreferencesPatch::select_trip(Some(TripId::new("t"))));
    assert_eq!(store.filtered_cities().len(), 1);

    store.delete_trip(&TripId::new("t"));
    assert_eq!(store.filtered_cities().len(), 2);

    store.undo();
    assert_eq!(store.filtered_cities().len(), 1);
}

#[test]
fn search_candidate_flows_into_store() {
    let index = LocalCityIndex::new(vec![
        CityCandidate::new("Lisbon", "Portugal", Coordinates::new(38.7223, -9.1393)),
        CityCandidate::new("Porto", "Portugal", Coordinates::new(41.1579, -8.6291)),
    ]);
    let mut store = TravelStore::new();

    let pick = index.search("lisb", 5).remove(0);
    store.add_city(pick.clone().into_city(CityKind::Lived, day())).unwrap();

    // Picking the same search result again is a duplicate.
    assert!(matches!(
        store.add_city(pick.into_city(CityKind::Visited, day())),
        Err(TravelError::DuplicateCity { .. })
    ));
    assert_eq!(store.stats().lived, 1);
}

#[test]
fn file_storage_round_trip_restores_without_history() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("travel.json"));

    let mut store = TravelStore::new();
    store.add_city(city("a", 1.0, 1.0)).unwrap();
    store.add_trip(Trip::new("T", "red").with_cities(["a"])).unwrap();
    store.update_preferences(&PreferencesPatch {
        theme: Some(Theme::Dark),
        ..PreferencesPatch::default()
    });
    store.persist(&storage).unwrap();

    let (restored, _) = TravelStore::restore(&storage).unwrap();
    assert_eq!(restored.cities(), store.cities());
    assert_eq!(restored.trips(), store.trips());
    assert_eq!(restored.preferences(), store.preferences());
    assert!(!restored.can_undo());
}

#[test]
fn nearby_edit_and_unplanned_stop_survive_persist_and_restore() {
    let storage = MemoryStorage::new();
    let mut store = TravelStore::new();
    store.add_city(city("a", 5.0, 5.0)).unwrap();
    store.add_city(city("b", 45.0, 45.0)).unwrap();
    let next_to_a = CityPatch {
        coordinates: Some(Coordinates::new(5.003, 5.003)),
        ..CityPatch::default()
    };
    store.update_city(&CityId::new("b"), &next_to_a).unwrap();
    store
        .add_trip(Trip::new("T", "red").with_id("t").with_cities(["a", "b"]))
        .unwrap();
    store
        .add_trip(Trip::new("Later", "blue").with_id("later").with_cities(["not-yet-added"]))
        .unwrap();
    store.persist(&storage).unwrap();

    let (restored, summary) = TravelStore::restore(&storage).unwrap();
    let summary = summary.unwrap();
    assert_eq!(summary.skipped_cities, 0);
    assert_eq!(summary.skipped_trips, 0);
    assert_eq!(restored.cities(), store.cities());
    assert_eq!(restored.trips(), store.trips());
}

#[test]
fn non_finite_city_never_reaches_storage() {
    let storage = MemoryStorage::new();
    let mut store = TravelStore::new();
    assert!(matches!(
        store.add_city(city("nan", f64::NAN, 2.0)),
        Err(TravelError::InvalidCoordinates { .. })
    ));
    store.add_city(city("ok", 1.0, 2.0)).unwrap();
    store.persist(&storage).unwrap();

    let (restored, summary) = TravelStore::restore(&storage).unwrap();
    assert_eq!(summary.unwrap().skipped_cities, 0);
    assert_eq!(restored.cities(), store.cities());
}
