// crates/travelmap-core/src/model/city.rs
use super::CityId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both axes are real numbers (not NaN or infinite).
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// True when both axes differ by strictly less than `tolerance` degrees.
    #[inline]
    pub fn is_near(&self, other: &Coordinates, tolerance: f64) -> bool {
        (self.lat - other.lat).abs() < tolerance && (self.lng - other.lng).abs() < tolerance
    }
}

/// Whether a city was visited or lived in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityKind {
    #[default]
    Visited,
    Lived,
}

impl fmt::Display for CityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityKind::Visited => f.write_str("visited"),
            CityKind::Lived => f.write_str("lived"),
        }
    }
}

impl FromStr for CityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visited" => Ok(CityKind::Visited),
            "lived" => Ok(CityKind::Lived),
            other => Err(format!("unknown city kind '{other}' (expected visited or lived)")),
        }
    }
}

/// One visited or lived-in place.
///
/// `id` and `date_added` are fixed at creation; everything else can be
/// changed through a [`CityPatch`]. The descriptive metadata (`admin_name`,
/// `population`, `capital`, `iso2`, `iso3`) is carried through from the
/// search lookup and never validated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
    #[serde(rename = "type")]
    pub kind: CityKind,
    pub last_visited_date: NaiveDate,
    pub date_added: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso3: Option<String>,
}

impl City {
    /// Create a city with a generated id, stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        coordinates: Coordinates,
        kind: CityKind,
        last_visited_date: NaiveDate,
    ) -> Self {
        Self {
            id: CityId::generate(),
            name: name.into(),
            country: country.into(),
            coordinates,
            kind,
            last_visited_date,
            date_added: Utc::now(),
            admin_name: None,
            population: None,
            capital: None,
            iso2: None,
            iso3: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<CityId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_admin_name(mut self, admin_name: impl Into<String>) -> Self {
        self.admin_name = Some(admin_name.into());
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_capital(mut self, capital: bool) -> Self {
        self.capital = Some(capital);
        self
    }

    pub fn with_country_codes(mut self, iso2: impl Into<String>, iso3: impl Into<String>) -> Self {
        self.iso2 = Some(iso2.into());
        self.iso3 = Some(iso3.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn is_lived(&self) -> bool {
        self.kind == CityKind::Lived
    }
}

/// Partial update for a [`City`]; `None` leaves a field untouched.
///
/// Metadata fields use `Option<Option<_>>` so they can also be cleared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CityPatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub kind: Option<CityKind>,
    pub last_visited_date: Option<NaiveDate>,
    pub admin_name: Option<Option<String>>,
    pub population: Option<Option<u64>>,
    pub capital: Option<Option<bool>>,
    pub iso2: Option<Option<String>>,
    pub iso3: Option<Option<String>>,
}

impl CityPatch {
    pub fn kind(kind: CityKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn last_visited(date: NaiveDate) -> Self {
        Self {
            last_visited_date: Some(date),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow merge onto `city`.
    pub fn apply_to(&self, city: &mut City) {
        if let Some(name) = &self.name {
            city.name.clone_from(name);
        }
        if let Some(country) = &self.country {
            city.country.clone_from(country);
        }
        if let Some(coordinates) = self.coordinates {
            city.coordinates = coordinates;
        }
        if let Some(kind) = self.kind {
            city.kind = kind;
        }
        if let Some(date) = self.last_visited_date {
            city.last_visited_date = date;
        }
        if let Some(admin_name) = &self.admin_name {
            city.admin_name.clone_from(admin_name);
        }
        if let Some(population) = self.population {
            city.population = population;
        }
        if let Some(capital) = self.capital {
            city.capital = capital;
        }
        if let Some(iso2) = &self.iso2 {
            city.iso2.clone_from(iso2);
        }
        if let Some(iso3) = &self.iso3 {
            city.iso3.clone_from(iso3);
        }
    }
}
