// crates/travelmap-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the store.
///
/// Returned by [`TravelStore::stats`](crate::TravelStore::stats). Countries
/// are counted after Unicode folding, so "México" and "Mexico" count once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelStats {
    pub cities: usize,
    pub visited: usize,
    pub lived: usize,
    pub countries: usize,
    pub trips: usize,
}
