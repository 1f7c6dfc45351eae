// crates/travelmap-core/src/views.rs

//! # Derived Views
//!
//! Read-only projections recomputed from live state on every call.

use crate::common::TravelStats;
use crate::model::{City, CityId, Trip, TripId};
use crate::store::TravelStore;
use crate::text::fold_key;
use crate::traits::NameMatch;
use std::collections::HashSet;

impl TravelStore {
    pub fn city(&self, id: &CityId) -> Option<&City> {
        self.cities().iter().find(|c| &c.id == id)
    }

    pub fn trip(&self, id: &TripId) -> Option<&Trip> {
        self.trips().iter().find(|t| &t.id == id)
    }

    /// The trip named by `preferences.selected_trip_id`, if it still exists.
    pub fn selected_trip(&self) -> Option<&Trip> {
        self.preferences()
            .selected_trip_id
            .as_ref()
            .and_then(|id| self.trip(id))
    }

    /// Cities shown on the map.
    ///
    /// With no selected trip (or one that no longer resolves) every city is
    /// returned. Otherwise only the trip's cities, in the store's own order
    /// rather than itinerary order.
    pub fn filtered_cities(&self) -> Vec<&City> {
        match self.selected_trip() {
            None => self.cities().iter().collect(),
            Some(trip) => self
                .cities()
                .iter()
                .filter(|c| trip.contains(&c.id))
                .collect(),
        }
    }

    /// A trip's cities in itinerary order. Repeated stops repeat; ids that
    /// do not resolve are skipped.
    pub fn trip_itinerary(&self, id: &TripId) -> Vec<&City> {
        self.trip(id)
            .map(|trip| trip.city_ids.iter().filter_map(|cid| self.city(cid)).collect())
            .unwrap_or_default()
    }

    /// Trips whose itinerary includes `city_id`.
    pub fn trips_containing(&self, city_id: &CityId) -> Vec<&Trip> {
        self.trips().iter().filter(|t| t.contains(city_id)).collect()
    }

    /// Cities whose name contains `query` (accent- and case-insensitive).
    pub fn find_cities_by_name(&self, query: &str) -> Vec<&City> {
        if fold_key(query).is_empty() {
            return Vec::new();
        }
        self.cities()
            .iter()
            .filter(|c| c.name_contains(query))
            .collect()
    }

    pub fn stats(&self) -> TravelStats {
        let cities = self.cities();
        let lived = cities.iter().filter(|c| c.is_lived()).count();
        let countries = cities
            .iter()
            .map(|c| fold_key(&c.country))
            .filter(|k| !k.is_empty())
            .collect::<HashSet<_>>()
            .len();

        TravelStats {
            cities: cities.len(),
            visited: cities.len() - lived,
            lived,
            countries,
            trips: self.trips().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{City, CityKind, Coordinates, PreferencesPatch, Trip, TripId};
    use crate::TravelStore;
    use chrono::NaiveDate;

    fn city(id: &str, country: &str, lat: f64, kind: CityKind) -> City {
        City::new(
            id,
            country,
            Coordinates::new(lat, 0.0),
            kind,
            NaiveDate::from_ymd_opt(2022, 8, 1).unwrap(),
        )
        .with_id(id)
    }

    fn sample() -> TravelStore {
        let mut store = TravelStore::new();
        store.add_city(city("Paris", "France", 1.0, CityKind::Lived)).unwrap();
        store.add_city(city("Rome", "Italy", 2.0, CityKind::Visited)).unwrap();
        store.add_city(city("Lyon", "france", 3.0, CityKind::Visited)).unwrap();
        store
            .add_trip(
                Trip::new("South", "orange")
                    .with_id("south")
                    .with_cities(["Lyon", "Paris", "ghost"]),
            )
            .unwrap();
        store
    }

    fn names(cities: Vec<&City>) -> Vec<&str> {
        cities.into_iter().map(|c| c.name()).collect()
    }

    #[test]
    fn unfiltered_without_selection() {
        let store = sample();
        assert_eq!(names(store.filtered_cities()), vec!["Paris", "Rome", "Lyon"]);
    }

    #[test]
    fn filtered_keeps_store_order() {
        let mut store = sample();
        store.update_preferences(&PreferencesPatch::select_trip(Some(TripId::new("south"))));
        assert_eq!(names(store.filtered_cities()), vec!["Paris", "Lyon"]);
    }

    #[test]
    fn unknown_selection_shows_all() {
        let mut store = sample();
        store.update_preferences(&PreferencesPatch::select_trip(Some(TripId::new("gone"))));
        assert_eq!(store.filtered_cities().len(), 3);
        assert!(store.selected_trip().is_none());
    }

    #[test]
    fn itinerary_follows_trip_order_and_skips_dangling() {
        let store = sample();
        assert_eq!(
            names(store.trip_itinerary(&TripId::new("south"))),
            vec!["Lyon", "Paris"]
        );
        assert!(store.trip_itinerary(&TripId::new("nope")).is_empty());
    }

    #[test]
    fn trips_containing_city() {
        let store = sample();
        let paris = store.cities()[0].id.clone();
        let rome = store.cities()[1].id.clone();
        assert_eq!(store.trips_containing(&paris).len(), 1);
        assert!(store.trips_containing(&rome).is_empty());
    }

    #[test]
    fn name_search_folds_accents() {
        let mut store = TravelStore::new();
        store.add_city(city("Kraków", "Poland", 50.0, CityKind::Visited)).unwrap();
        assert_eq!(store.find_cities_by_name("krak").len(), 1);
        assert!(store.find_cities_by_name("  ").is_empty());
    }

    #[test]
    fn stats_count_kinds_and_folded_countries() {
        let stats = sample().stats();
        assert_eq!(stats.cities, 3);
        assert_eq!(stats.lived, 1);
        assert_eq!(stats.visited, 2);
        assert_eq!(stats.countries, 2);
        assert_eq!(stats.trips, 1);
    }
}
