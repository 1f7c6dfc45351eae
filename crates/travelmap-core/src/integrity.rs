// crates/travelmap-core/src/integrity.rs

//! # Duplicate & Integrity Checks
//!
//! Pure functions over the stored collections. Nothing here mutates the
//! store; the command layer decides what to do with the answers.

use crate::model::{City, CityId, Coordinates, Trip};

/// Two cities closer than this (in degrees, on both axes) are the same place.
pub const COORDINATE_TOLERANCE: f64 = 0.01;

/// First stored city within `tolerance` of `candidate`, in stored order.
///
/// The first match wins, not the closest one.
pub fn find_duplicate<'a>(
    cities: &'a [City],
    candidate: &Coordinates,
    tolerance: f64,
) -> Option<&'a City> {
    cities
        .iter()
        .find(|c| c.coordinates.is_near(candidate, tolerance))
}

/// Copy of `trips` with `removed` stripped from every itinerary.
///
/// A trip's `visit_dates` entries are dropped alongside when they were
/// aligned with `city_ids` before removal; misaligned dates are left alone.
/// Trips that end up empty are kept.
pub fn cascade_delete(trips: &[Trip], removed: &CityId) -> Vec<Trip> {
    trips.iter().map(|t| without_city(t, removed)).collect()
}

fn without_city(trip: &Trip, removed: &CityId) -> Trip {
    if !trip.contains(removed) {
        return trip.clone();
    }

    let aligned = trip.has_aligned_dates();
    let mut out = trip.clone();
    out.city_ids = Vec::with_capacity(trip.city_ids.len());
    let mut dates = aligned.then(Vec::new);

    for (i, id) in trip.city_ids.iter().enumerate() {
        if id == removed {
            continue;
        }
        out.city_ids.push(id.clone());
        if let (Some(kept), Some(src)) = (dates.as_mut(), trip.visit_dates.as_ref()) {
            kept.push(src[i]);
        }
    }

    if aligned {
        out.visit_dates = dates;
    }
    out
}
