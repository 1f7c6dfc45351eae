// crates/travelmap-core/src/transfer.rs

//! # Import / Export
//!
//! The versioned JSON document exchanged with storage and other devices:
//!
//! ```json
//! { "cities": [...], "trips": [...], "preferences": {...},
//!   "exportedAt": "2024-05-01T12:00:00Z", "version": "1.0" }
//! ```
//!
//! Import is lenient about everything except the outer shape: the payload
//! must be an object, but missing or broken collections, undecodable
//! records and mistyped preferences are dropped with a warning. Records
//! that decode are kept as written, so anything the commands can produce
//! survives an export/import cycle. History restarts from the imported state.

use crate::error::{Result, TravelError};
use crate::model::{City, Preferences, Trip};
use crate::store::TravelStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Document format version written by [`TravelStore::export_snapshot`].
pub const EXPORT_VERSION: &str = "1.0";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub cities: Vec<City>,
    pub trips: Vec<Trip>,
    pub preferences: Preferences,
    pub exported_at: DateTime<Utc>,
    pub version: String,
}

/// What an import kept and what it dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub cities: usize,
    pub trips: usize,
    pub skipped_cities: usize,
    pub skipped_trips: usize,
}

impl TravelStore {
    pub fn export_snapshot(&self) -> ExportPayload {
        ExportPayload {
            cities: self.cities().to_vec(),
            trips: self.trips().to_vec(),
            preferences: self.preferences().clone(),
            exported_at: Utc::now(),
            version: EXPORT_VERSION.to_owned(),
        }
    }

    /// Export as a JSON value, ready for a [`StateStorage`](crate::traits::StateStorage).
    pub fn export_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.export_snapshot())?)
    }

    pub fn export_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export_snapshot())?)
    }

    /// Replace the whole store with `payload` and reset history to it.
    ///
    /// # Errors
    ///
    /// [`TravelError::MalformedImport`] if `payload` is not a JSON object.
    /// The store is untouched in that case.
    pub fn import_snapshot(&mut self, payload: &Value) -> Result<ImportSummary> {
        let obj = payload.as_object().ok_or_else(|| {
            TravelError::MalformedImport(format!(
                "expected a JSON object, found {}",
                value_kind(payload)
            ))
        })?;

        let mut summary = ImportSummary::default();

        let mut cities: Vec<City> = Vec::new();
        for (index, raw) in array_field(obj, "cities").iter().enumerate() {
            let city = match City::deserialize(raw) {
                Ok(city) => city,
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping undecodable city");
                    summary.skipped_cities += 1;
                    continue;
                }
            };
            if cities.iter().any(|c| c.id == city.id) {
                tracing::warn!(id = %city.id, "skipping city with repeated id");
                summary.skipped_cities += 1;
                continue;
            }
            cities.push(city);
        }

        let mut trips: Vec<Trip> = Vec::new();
        for (index, raw) in array_field(obj, "trips").iter().enumerate() {
            match Trip::deserialize(raw) {
                Ok(trip) if trips.iter().any(|t| t.id == trip.id) => {
                    tracing::warn!(id = %trip.id, "skipping trip with repeated id");
                    summary.skipped_trips += 1;
                }
                Ok(trip) => trips.push(trip),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping undecodable trip");
                    summary.skipped_trips += 1;
                }
            }
        }

        summary.cities = cities.len();
        summary.trips = trips.len();

        let preferences = merge_preferences(obj.get("preferences"))?;
        self.replace_all(cities, trips, preferences);

        tracing::debug!(?summary, "import complete");
        Ok(summary)
    }

    /// Parse `text` and [`import_snapshot`](Self::import_snapshot) it.
    pub fn import_json(&mut self, text: &str) -> Result<ImportSummary> {
        let payload: Value = serde_json::from_str(text)
            .map_err(|e| TravelError::MalformedImport(format!("invalid JSON: {e}")))?;
        self.import_snapshot(&payload)
    }
}

fn array_field<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    match obj.get(key) {
        Some(Value::Array(items)) => items.as_slice(),
        Some(other) => {
            tracing::warn!(key, found = value_kind(other), "expected an array; using empty");
            &[]
        }
        None => &[],
    }
}

/// Shallow merge of the incoming preference keys over the defaults.
/// Keys whose values do not fit are ignored one at a time.
fn merge_preferences(incoming: Option<&Value>) -> Result<Preferences> {
    let mut merged = serde_json::to_value(Preferences::default())?;
    let fields = match incoming {
        Some(Value::Object(fields)) => fields,
        Some(Value::Null) | None => return Ok(Preferences::default()),
        Some(other) => {
            tracing::warn!(
                found = value_kind(other),
                "preferences is not an object; using defaults"
            );
            return Ok(Preferences::default());
        }
    };

    for (key, value) in fields {
        let mut candidate = merged.clone();
        candidate[key.as_str()] = value.clone();
        if Preferences::deserialize(&candidate).is_ok() {
            merged = candidate;
        } else {
            tracing::warn!(key = %key, "ignoring preference with unexpected value");
        }
    }
    Ok(serde_json::from_value(merged)?)
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
