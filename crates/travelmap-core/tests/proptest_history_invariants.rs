//! Property tests for undo/redo over the store.
//!
//! Validates:
//! - Undoing N successful commands restores the starting collections, and
//!   redoing them restores the end state.
//! - A commit after an undo always clears the redo branch.
//! - The snapshot timeline never grows past its cap.
//! - No trip ever references a deleted city.

use chrono::NaiveDate;
use proptest::prelude::*;
use travelmap_core::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    AddCity(u8, u8),
    DeleteCity(u8),
    ToggleKind(u8),
    AddTrip(Vec<u8>),
    DeleteTrip(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..20, 0u8..20).prop_map(|(a, b)| Op::AddCity(a, b)),
        2 => (0u8..20).prop_map(Op::DeleteCity),
        2 => (0u8..20).prop_map(Op::ToggleKind),
        2 => prop::collection::vec(0u8..20, 0..5).prop_map(Op::AddTrip),
        1 => (0u8..10).prop_map(Op::DeleteTrip),
    ]
}

fn city_id(n: u8) -> CityId {
    CityId::new(format!("c{n}"))
}

/// Applies `op`; returns whether it committed a snapshot.
fn apply(store: &mut TravelStore, op: &Op, seq: usize) -> bool {
    let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    match op {
        Op::AddCity(a, b) => {
            let city = City::new(
                "p",
                "c",
                Coordinates::new(*a as f64, *b as f64),
                CityKind::Visited,
                day,
            )
            .with_id(format!("c{seq}"));
            store.add_city(city).is_ok()
        }
        Op::DeleteCity(n) => {
            store.delete_city(&city_id(*n));
            true
        }
        Op::ToggleKind(n) => {
            store
                .update_city(&city_id(*n), &CityPatch::kind(CityKind::Lived))
                .is_ok()
        }
        Op::AddTrip(ids) => {
            let trip = Trip::new("t", "red")
                .with_id(format!("t{seq}"))
                .with_cities(ids.iter().map(|n| city_id(*n)));
            store.add_trip(trip).is_ok()
        }
        Op::DeleteTrip(n) => {
            store.delete_trip(&TripId::new(format!("t{n}")));
            true
        }
    }
}

fn roomy_store() -> TravelStore {
    TravelStore::with_config(StoreConfig {
        history: HistoryConfig::new(10_000),
        ..StoreConfig::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn undo_redo_inverse_law(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut store = roomy_store();
        let start_cities = store.cities().to_vec();
        let start_trips = store.trips().to_vec();

        let mut committed = 0;
        for (seq, op) in ops.iter().enumerate() {
            if apply(&mut store, op, seq) {
                committed += 1;
            }
        }
        let end_cities = store.cities().to_vec();
        let end_trips = store.trips().to_vec();

        for _ in 0..committed {
            prop_assert!(store.undo());
        }
        prop_assert!(!store.can_undo());
        prop_assert_eq!(store.cities(), start_cities.as_slice());
        prop_assert_eq!(store.trips(), start_trips.as_slice());

        for _ in 0..committed {
            prop_assert!(store.redo());
        }
        prop_assert!(!store.can_redo());
        prop_assert_eq!(store.cities(), end_cities.as_slice());
        prop_assert_eq!(store.trips(), end_trips.as_slice());
    }

    #[test]
    fn commit_after_undo_truncates(
        ops in prop::collection::vec(op_strategy(), 2..30),
        undos in 1usize..10,
    ) {
        let mut store = TravelStore::new();
        for (seq, op) in ops.iter().enumerate() {
            apply(&mut store, op, seq);
        }
        let mut undone = 0;
        for _ in 0..undos {
            if store.undo() {
                undone += 1;
            }
        }
        prop_assume!(undone > 0);
        prop_assert!(store.can_redo());

        prop_assert!(store.update_city(&city_id(0), &CityPatch::default()).is_ok());
        prop_assert!(!store.can_redo());
    }

    #[test]
    fn history_never_exceeds_cap(
        cap in 1usize..20,
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let mut store = TravelStore::with_config(StoreConfig {
            history: HistoryConfig::new(cap),
            ..StoreConfig::default()
        });
        for (seq, op) in ops.iter().enumerate() {
            apply(&mut store, op, seq);
            prop_assert!(store.history().len() <= cap);
            prop_assert!(store.history().cursor() < store.history().len());
        }
    }

    #[test]
    fn trips_never_reference_deleted_cities(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut store = TravelStore::new();
        for (seq, op) in ops.iter().enumerate() {
            apply(&mut store, op, seq);
            if let Op::DeleteCity(n) = op {
                let id = city_id(*n);
                prop_assert!(store.trips().iter().all(|t| !t.contains(&id)));
            }
        }
    }
}
