// crates/travelmap-core/src/error.rs
use crate::model::CityId;
use thiserror::Error;

/// Errors surfaced by the travel store and its storage collaborators.
#[derive(Debug, Error)]
pub enum TravelError {
    /// `add_city` found an existing city at (nearly) the same coordinates.
    ///
    /// The store is unchanged and no history entry was committed.
    #[error("city already exists as '{existing_name}' ({existing_id})")]
    DuplicateCity {
        existing_id: CityId,
        existing_name: String,
    },

    /// Latitude or longitude is NaN or infinite.
    #[error("coordinates must be finite numbers, got ({lat}, {lng})")]
    InvalidCoordinates { lat: f64, lng: f64 },

    /// A record was added with an id that is already in use.
    #[error("id already in use: {0}")]
    IdConflict(String),

    /// Import payload could not be interpreted as a store document.
    #[error("malformed import: {0}")]
    MalformedImport(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TravelError {
    /// Id of the conflicting city when this is a duplicate conflict.
    pub fn conflicting_city(&self) -> Option<&CityId> {
        match self {
            TravelError::DuplicateCity { existing_id, .. } => Some(existing_id),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TravelError>;
