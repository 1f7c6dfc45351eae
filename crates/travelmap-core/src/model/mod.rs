// crates/travelmap-core/src/model/mod.rs

//! # Entity Model
//!
//! Cities, trips and preferences as stored by [`TravelStore`](crate::TravelStore).
//! Trips refer to cities by [`CityId`] only; they never own city data.

pub mod city;
pub mod preferences;
pub mod trip;

pub use city::{City, CityKind, CityPatch, Coordinates};
pub use preferences::{Preferences, PreferencesPatch, Theme, ViewMode};
pub use trip::{Trip, TripPatch};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a [`City`]. Assigned at creation and never changed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(String);

/// Opaque identifier of a [`Trip`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(String);

macro_rules! impl_id {
    ($ty:ident) => {
        impl $ty {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// A fresh random (UUID v4) identifier.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_id!(CityId);
impl_id!(TripId);
