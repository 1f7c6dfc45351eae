//! Basic usage example for travelmap-rs
//!
//! This example demonstrates how to:
//! - Record visited and lived cities
//! - Handle a duplicate-location conflict
//! - Plan a trip and filter the map to it
//! - Search a small candidate list and add a hit
//! - Export and re-import the whole state

use chrono::NaiveDate;
use travelmap_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== travelmap-rs Basic Usage Example ===\n");

    let mut store = TravelStore::new();
    let spring = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap_or_default();

    // Example 1: Add cities
    println!("--- Example 1: Recording cities ---");
    let visited = |name: &str, country: &str, lat: f64, lng: f64| {
        City::new(name, country, Coordinates::new(lat, lng), CityKind::Visited, spring)
    };

    let tokyo = visited("Tokyo", "Japan", 35.6762, 139.6503);
    let tokyo_id = store.add_city(tokyo)?.id.clone();
    let kyoto = visited("Kyoto", "Japan", 35.0116, 135.7681);
    let kyoto_id = store.add_city(kyoto)?.id.clone();
    let mut berlin = visited("Berlin", "Germany", 52.52, 13.405);
    berlin.kind = CityKind::Lived;
    store.add_city(berlin)?;
    for city in store.cities() {
        println!("- {} ({}) [{}]", city.name, city.country, city.kind);
    }
    println!();

    // Example 2: Duplicate detection
    println!("--- Example 2: Same place twice ---");
    let shinjuku = visited("Shinjuku", "Japan", 35.68, 139.655);
    match store.add_city(shinjuku) {
        Err(TravelError::DuplicateCity { existing_name, .. }) => {
            println!("Rejected: already recorded as {existing_name}");
        }
        Err(e) => return Err(e),
        Ok(city) => println!("Unexpectedly added {}", city.name),
    }
    println!();

    // Example 3: Trips and the map filter
    println!("--- Example 3: A trip through Japan ---");
    let trip = Trip::new("Japan 2024", "red").with_cities([tokyo_id.clone(), kyoto_id]);
    let trip_id = store.add_trip(trip)?.id.clone();
    store.update_preferences(&PreferencesPatch::select_trip(Some(trip_id.clone())));
    let stops: Vec<&str> = store.trip_itinerary(&trip_id).into_iter().map(City::name).collect();
    println!("Itinerary: {}", stops.join(" -> "));
    println!("Cities on the map: {}", store.filtered_cities().len());
    println!();

    // Example 4: Search a candidate list
    println!("--- Example 4: Searching ---");
    let index = LocalCityIndex::new(vec![
        CityCandidate::new("Osaka", "Japan", Coordinates::new(34.6937, 135.5023)),
        CityCandidate::new("Oslo", "Norway", Coordinates::new(59.9139, 10.7522)),
    ]);
    for hit in index.search("os", 5) {
        println!("- {}, {}", hit.name, hit.country);
    }
    if let Some(osaka) = index.search("osaka", 1).into_iter().next() {
        store.add_city(osaka.into_city(CityKind::Visited, spring))?;
    }
    println!();

    // Example 5: Export and import
    println!("--- Example 5: Backup ---");
    let json = store.export_json_pretty()?;
    let mut restored = TravelStore::new();
    let summary = restored.import_json(&json)?;
    println!("Imported {} cities and {} trips", summary.cities, summary.trips);

    let stats = restored.stats();
    println!(
        "{} cities in {} countries ({} lived), {} trips",
        stats.cities, stats.countries, stats.lived, stats.trips
    );

    Ok(())
}
