//! Umbrella crate for the travelmap workspace; re-exports `travelmap-core`
//! so the demos can `use travelmap_rs::prelude::*`.
pub use travelmap_core::*;
