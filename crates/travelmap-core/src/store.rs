// crates/travelmap-core/src/store.rs

//! # Mutation Commands
//!
//! [`TravelStore`] owns every city, trip and the preferences record, and is
//! the only place they change. Each successful city/trip command commits one
//! history snapshot; preference changes never do.
//!
//! The store is single-writer: wrap it in whatever the host uses to
//! serialize access (a `Mutex`, an actor, a UI thread).

use crate::error::{Result, TravelError};
use crate::history::{HistoryConfig, Snapshot, SnapshotHistory};
use crate::integrity::{self, COORDINATE_TOLERANCE};
use crate::model::{
    City, CityId, CityPatch, Coordinates, Preferences, PreferencesPatch, Trip, TripId, TripPatch,
};

/// Store-wide settings.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub history: HistoryConfig,
    /// Degrees on each axis under which two cities count as the same place.
    pub coordinate_tolerance: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            coordinate_tolerance: COORDINATE_TOLERANCE,
        }
    }
}

/// The travel record store.
#[derive(Debug)]
pub struct TravelStore {
    cities: Vec<City>,
    trips: Vec<Trip>,
    preferences: Preferences,
    history: SnapshotHistory,
    config: StoreConfig,
}

impl Default for TravelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TravelStore {
    /// Empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            cities: Vec::new(),
            trips: Vec::new(),
            preferences: Preferences::default(),
            history: SnapshotHistory::new(Snapshot::empty(), config.history.clone()),
            config,
        }
    }

    // -----------------------------------------------------------------------
    // Read API
    // -----------------------------------------------------------------------

    /// All cities, in insertion order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // City commands
    // -----------------------------------------------------------------------

    /// Append a city unless one already sits within the coordinate tolerance.
    ///
    /// # Errors
    ///
    /// - [`TravelError::InvalidCoordinates`] if either axis is not finite.
    /// - [`TravelError::DuplicateCity`] naming the first colliding city.
    /// - [`TravelError::IdConflict`] if `city.id` is already taken.
    ///
    /// On error nothing changes and no snapshot is committed.
    pub fn add_city(&mut self, city: City) -> Result<&City> {
        check_finite(&city.coordinates)?;
        if let Some(existing) = integrity::find_duplicate(
            &self.cities,
            &city.coordinates,
            self.config.coordinate_tolerance,
        ) {
            tracing::debug!(
                candidate = %city.name,
                existing = %existing.id,
                "rejected duplicate city"
            );
            return Err(TravelError::DuplicateCity {
                existing_id: existing.id.clone(),
                existing_name: existing.name.clone(),
            });
        }
        if self.city(&city.id).is_some() {
            return Err(TravelError::IdConflict(city.id.to_string()));
        }

        tracing::debug!(id = %city.id, name = %city.name, "add city");
        self.cities.push(city);
        self.commit();
        let idx = self.cities.len() - 1;
        Ok(&self.cities[idx])
    }

    /// Shallow-merge `patch` onto the city with `id`.
    ///
    /// An unknown id is a no-op that still commits an unchanged snapshot.
    /// Coordinates are not re-checked for duplicates here.
    /// Returns whether a city was found.
    ///
    /// # Errors
    ///
    /// [`TravelError::InvalidCoordinates`] if the patch carries non-finite
    /// coordinates. Nothing changes and no snapshot is committed.
    pub fn update_city(&mut self, id: &CityId, patch: &CityPatch) -> Result<bool> {
        if let Some(coordinates) = &patch.coordinates {
            check_finite(coordinates)?;
        }
        let found = match self.cities.iter_mut().find(|c| &c.id == id) {
            Some(city) => {
                patch.apply_to(city);
                true
            }
            None => false,
        };
        tracing::debug!(%id, found, "update city");
        self.commit();
        Ok(found)
    }

    /// Remove a city and strip it from every trip, as one snapshot.
    ///
    /// Returns the removed city, or `None` if the id was unknown (the
    /// snapshot is committed either way).
    pub fn delete_city(&mut self, id: &CityId) -> Option<City> {
        let removed = self
            .cities
            .iter()
            .position(|c| &c.id == id)
            .map(|idx| self.cities.remove(idx));
        self.trips = integrity::cascade_delete(&self.trips, id);
        tracing::debug!(%id, found = removed.is_some(), "delete city");
        self.commit();
        removed
    }

    // -----------------------------------------------------------------------
    // Trip commands
    // -----------------------------------------------------------------------

    /// Append a trip.
    ///
    /// # Errors
    ///
    /// [`TravelError::IdConflict`] if `trip.id` is already taken.
    pub fn add_trip(&mut self, trip: Trip) -> Result<&Trip> {
        if self.trip(&trip.id).is_some() {
            return Err(TravelError::IdConflict(trip.id.to_string()));
        }
        tracing::debug!(id = %trip.id, name = %trip.name, "add trip");
        self.trips.push(trip);
        self.commit();
        let idx = self.trips.len() - 1;
        Ok(&self.trips[idx])
    }

    /// Shallow-merge `patch` onto the trip with `id`. Same no-op rules as
    /// [`update_city`](Self::update_city).
    pub fn update_trip(&mut self, id: &TripId, patch: &TripPatch) -> bool {
        let found = match self.trips.iter_mut().find(|t| &t.id == id) {
            Some(trip) => {
                patch.apply_to(trip);
                true
            }
            None => false,
        };
        tracing::debug!(%id, found, "update trip");
        self.commit();
        found
    }

    /// Remove a trip. Cities are never affected.
    pub fn delete_trip(&mut self, id: &TripId) -> Option<Trip> {
        let removed = self
            .trips
            .iter()
            .position(|t| &t.id == id)
            .map(|idx| self.trips.remove(idx));
        tracing::debug!(%id, found = removed.is_some(), "delete trip");
        self.commit();
        removed
    }

    // -----------------------------------------------------------------------
    // Preferences
    // -----------------------------------------------------------------------

    /// Shallow-merge into the preferences. Not recorded in history.
    pub fn update_preferences(&mut self, patch: &PreferencesPatch) {
        patch.apply_to(&mut self.preferences);
    }

    // -----------------------------------------------------------------------
    // History
    // -----------------------------------------------------------------------

    /// Restore the previous snapshot. Returns false if there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.cities = snapshot.cities.clone();
                self.trips = snapshot.trips.clone();
                true
            }
            None => false,
        }
    }

    /// Re-apply the next snapshot. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.cities = snapshot.cities.clone();
                self.trips = snapshot.trips.clone();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn commit(&mut self) {
        self.history.commit(&self.cities, &self.trips);
    }

    /// Swap in a whole new state and restart history from it.
    pub(crate) fn replace_all(
        &mut self,
        cities: Vec<City>,
        trips: Vec<Trip>,
        preferences: Preferences,
    ) {
        self.cities = cities;
        self.trips = trips;
        self.preferences = preferences;
        self.history.reset(Snapshot::capture(&self.cities, &self.trips));
    }
}

fn check_finite(coordinates: &Coordinates) -> Result<()> {
    if coordinates.is_finite() {
        Ok(())
    } else {
        Err(TravelError::InvalidCoordinates {
            lat: coordinates.lat,
            lng: coordinates.lng,
        })
    }
}
