// crates/travelmap-core/src/search.rs

//! # City Search
//!
//! A small in-memory [`CitySearch`] implementation. Real deployments may
//! put a fuzzy index behind a worker instead; the store only cares about
//! the [`CityCandidate`] records that come back.

use crate::model::{City, CityKind, Coordinates};
use crate::text::fold_key;
use crate::traits::CitySearch;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A place returned by a search, before it becomes a [`City`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityCandidate {
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
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

impl CityCandidate {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            coordinates,
            admin_name: None,
            population: None,
            capital: None,
            iso2: None,
            iso3: None,
        }
    }

    /// Turn the candidate into a new [`City`] with a generated id,
    /// carrying the lookup metadata along.
    pub fn into_city(self, kind: CityKind, last_visited_date: NaiveDate) -> City {
        let mut city = City::new(
            self.name,
            self.country,
            self.coordinates,
            kind,
            last_visited_date,
        );
        city.admin_name = self.admin_name;
        city.population = self.population;
        city.capital = self.capital;
        city.iso2 = self.iso2;
        city.iso3 = self.iso3;
        city
    }
}

/// A scored search result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub score: u8,
    pub candidate: &'a CityCandidate,
}

struct Entry {
    name_key: String,
    country_key: String,
    candidate: CityCandidate,
}

/// Linear-scan search over a fixed list of candidates.
///
/// Ranking on folded keys: exact name 100, name prefix 80, name substring
/// 60, country prefix 40. Ties keep dataset order.
pub struct LocalCityIndex {
    entries: Vec<Entry>,
}

impl LocalCityIndex {
    pub fn new(candidates: Vec<CityCandidate>) -> Self {
        let entries = candidates
            .into_iter()
            .map(|candidate| Entry {
                name_key: fold_key(&candidate.name),
                country_key: fold_key(&candidate.country),
                candidate,
            })
            .collect();
        Self { entries }
    }

    /// Parse a JSON array of candidates.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        let candidates: Vec<CityCandidate> = serde_json::from_str(text)?;
        Ok(Self::new(candidates))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every matching candidate, best first.
    pub fn ranked(&self, query: &str) -> Vec<SearchHit<'_>> {
        let q = fold_key(query);
        if q.is_empty() {
            return Vec::new();
        }

        let mut out: Vec<SearchHit<'_>> = self
            .entries
            .iter()
            .filter_map(|e| {
                let score = if e.name_key == q {
                    100
                } else if e.name_key.starts_with(&q) {
                    80
                } else if e.name_key.contains(&q) {
                    60
                } else if e.country_key.starts_with(&q) {
                    40
                } else {
                    return None;
                };
                Some(SearchHit {
                    score,
                    candidate: &e.candidate,
                })
            })
            .collect();

        out.sort_by(|a, b| b.score.cmp(&a.score));
        out
    }
}

impl CitySearch for LocalCityIndex {
    fn search(&self, query: &str, limit: usize) -> Vec<CityCandidate> {
        self.ranked(query)
            .into_iter()
            .take(limit)
            .map(|hit| hit.candidate.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> LocalCityIndex {
        LocalCityIndex::new(vec![
            CityCandidate::new("Saint-Denis", "France", Coordinates::new(48.93, 2.36)),
            CityCandidate::new("Paris", "France", Coordinates::new(48.8566, 2.3522)),
            CityCandidate::new("Parisot", "France", Coordinates::new(44.26, 1.86)),
            CityCandidate::new("Cormeilles-en-Parisis", "France", Coordinates::new(48.97, 2.2)),
            CityCandidate::new("Paraná", "Argentina", Coordinates::new(-31.73, -60.52)),
        ])
    }

    fn names(hits: Vec<CityCandidate>) -> Vec<String> {
        hits.into_iter().map(|c| c.name).collect()
    }

    #[test]
    fn exact_beats_prefix_beats_substring() {
        assert_eq!(
            names(index().search("paris", 10)),
            vec!["Paris", "Parisot", "Cormeilles-en-Parisis"]
        );
    }

    #[test]
    fn limit_truncates() {
        assert_eq!(names(index().search("par", 2)), vec!["Paris", "Parisot"]);
    }

    #[test]
    fn accents_are_folded() {
        assert_eq!(names(index().search("PARANA", 5)), vec!["Paraná"]);
    }

    #[test]
    fn country_prefix_matches_last() {
        let idx = index();
        let hits = idx.ranked("fra");
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|h| h.score == 40));
        assert_eq!(hits[0].candidate.name, "Saint-Denis");
    }

    #[test]
    fn blank_query_returns_nothing() {
        assert!(index().search("  ", 10).is_empty());
    }

    #[test]
    fn candidate_becomes_city_with_metadata() {
        let mut c = CityCandidate::new("Tokyo", "Japan", Coordinates::new(35.6762, 139.6503));
        c.capital = Some(true);
        c.iso2 = Some("JP".into());
        let city = c.into_city(CityKind::Lived, NaiveDate::from_ymd_opt(2020, 2, 2).unwrap());
        assert_eq!(city.name, "Tokyo");
        assert_eq!(city.capital, Some(true));
        assert_eq!(city.iso2.as_deref(), Some("JP"));
        assert!(city.is_lived());
    }

    #[test]
    fn parses_json_dataset() {
        let idx = LocalCityIndex::from_json(
            r#"[{"name":"Rome","country":"Italy","coordinates":{"lat":41.9,"lng":12.5}}]"#,
        )
        .unwrap();
        assert_eq!(idx.len(), 1);
    }
}
