// crates/travelmap-core/src/traits.rs
use crate::error::Result;
use crate::model::{City, Trip};
use crate::search::CityCandidate;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a display name.
///
/// Comparisons go through [`fold_key`], so they ignore case and accents.
///
/// # Examples
/// ```rust
/// use travelmap_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Łódź").is_named("lodz"));
/// assert!(Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Trip {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for CityCandidate {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Source of candidate places for the "add a city" search box.
///
/// Implementations may be backed by an in-memory index, a worker, or a
/// remote service. The store never calls this itself: callers pass the
/// chosen candidate to [`TravelStore::add_city`](crate::TravelStore::add_city).
pub trait CitySearch {
    /// Up to `limit` candidates for `query`, best match first.
    fn search(&self, query: &str, limit: usize) -> Vec<CityCandidate>;
}

/// Durable home for the store's serialized state.
///
/// A failed `save` leaves the in-memory store untouched; callers choose
/// whether to retry, warn or ignore.
pub trait StateStorage {
    /// The last saved document, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<serde_json::Value>>;

    fn save(&self, payload: &serde_json::Value) -> Result<()>;
}
