// crates/travelmap-core/src/lib.rs

//! # travelmap-core
//!
//! The record store behind a personal travel map: the cities someone has
//! visited or lived in, the multi-stop trips linking them, and the view
//! preferences. Every change to cities or trips can be undone and redone.
//!
//! ```rust
//! use travelmap_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let mut store = TravelStore::new();
//! let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
//!
//! let tokyo_at = Coordinates::new(35.6762, 139.6503);
//! let tokyo = City::new("Tokyo", "Japan", tokyo_at, CityKind::Visited, day);
//! let tokyo_id = store.add_city(tokyo)?.id.clone();
//!
//! // Too close to Tokyo: rejected, naming the existing city.
//! let near_at = Coordinates::new(35.68, 139.655);
//! let near = City::new("Shinjuku", "Japan", near_at, CityKind::Visited, day);
//! match store.add_city(near) {
//!     Err(TravelError::DuplicateCity { existing_id, .. }) => assert_eq!(existing_id, tokyo_id),
//!     other => panic!("expected a duplicate, got {other:?}"),
//! }
//!
//! store.undo();
//! assert!(store.cities().is_empty());
//! # Ok::<(), TravelError>(())
//! ```

pub mod common;
pub mod error;
pub mod history;
pub mod integrity;
pub mod loader;
pub mod model;
pub mod search;
pub mod store;
pub mod text;
pub mod traits;
pub mod transfer;
mod views;

// Re-exports
pub use crate::common::TravelStats;
pub use crate::error::{Result, TravelError};
pub use crate::store::{StoreConfig, TravelStore};
pub use model::{
    City, CityId, CityKind, CityPatch, Coordinates, Preferences, PreferencesPatch, Trip, TripId,
    TripPatch,
};

pub mod prelude {
    pub use crate::history::{HistoryConfig, Snapshot, SnapshotHistory};
    pub use crate::loader::MemoryStorage;
    #[cfg(feature = "json")]
    pub use crate::loader::JsonFileStorage;
    pub use crate::model::{
        City, CityId, CityKind, CityPatch, Coordinates, Preferences, PreferencesPatch, Theme,
        Trip, TripId, TripPatch, ViewMode,
    };
    pub use crate::search::{CityCandidate, LocalCityIndex};
    pub use crate::store::{StoreConfig, TravelStore};
    pub use crate::traits::{CitySearch, NameMatch, StateStorage};
    pub use crate::transfer::{ExportPayload, ImportSummary};
    pub use crate::{Result, TravelError, TravelStats};
}
