// crates/travelmap-core/src/model/trip.rs
use super::{CityId, TripId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An ordered multi-city itinerary.
///
/// `city_ids` are weak references: a trip may point at any number of
/// cities, and a city may belong to any number of trips. When present,
/// `visit_dates` lines up positionally with `city_ids`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    #[serde(default)]
    pub city_ids: Vec<CityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_dates: Option<Vec<NaiveDate>>,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Create an empty itinerary with a generated id.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: TripId::generate(),
            name: name.into(),
            city_ids: Vec::new(),
            visit_dates: None,
            color: color.into(),
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<TripId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_cities<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CityId>,
    {
        self.city_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_visit_dates(mut self, dates: Vec<NaiveDate>) -> Self {
        self.visit_dates = Some(dates);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, city_id: &CityId) -> bool {
        self.city_ids.contains(city_id)
    }

    /// Whether `visit_dates` is present and aligned with `city_ids`.
    pub fn has_aligned_dates(&self) -> bool {
        self.visit_dates
            .as_ref()
            .is_some_and(|dates| dates.len() == self.city_ids.len())
    }
}

/// Partial update for a [`Trip`]; `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripPatch {
    pub name: Option<String>,
    pub city_ids: Option<Vec<CityId>>,
    pub visit_dates: Option<Option<Vec<NaiveDate>>>,
    pub color: Option<String>,
}

impl TripPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, trip: &mut Trip) {
        if let Some(name) = &self.name {
            trip.name.clone_from(name);
        }
        if let Some(ids) = &self.city_ids {
            trip.city_ids.clone_from(ids);
        }
        if let Some(dates) = &self.visit_dates {
            trip.visit_dates.clone_from(dates);
        }
        if let Some(color) = &self.color {
            trip.color.clone_from(color);
        }
    }
}
