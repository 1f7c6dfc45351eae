use crate::args::{Commands, NewCityArgs};
use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use std::io::Write;
use travelmap_core::prelude::*;

/// Whether a command left the store in a state worth saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn describe(city: &City) -> String {
    format!(
        "{} ({}) [{}] {:.4},{:.4} last {} id={}",
        city.name,
        city.country,
        city.kind,
        city.coordinates.lat,
        city.coordinates.lng,
        city.last_visited_date,
        city.id
    )
}

fn add_city(
    store: &mut TravelStore,
    city: City,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    match store.add_city(city) {
        Ok(added) => {
            writeln!(out, "added {}", describe(added))?;
            Ok(Outcome::Changed)
        }
        Err(TravelError::DuplicateCity {
            existing_id,
            existing_name,
        }) => bail!(
            "a city already exists at these coordinates: {existing_name} (id={existing_id})"
        ),
        Err(e) => Err(e.into()),
    }
}

fn new_city(args: NewCityArgs) -> City {
    let city = City::new(
        args.name,
        args.country,
        Coordinates::new(args.lat, args.lng),
        args.kind,
        args.date.unwrap_or_else(today),
    );
    match args.id {
        Some(id) => city.with_id(id),
        None => city,
    }
}

/// Apply one command to `store`, writing human-readable output to `out`.
pub fn run(
    store: &mut TravelStore,
    command: Commands,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    match command {
        Commands::Stats => {
            let stats = store.stats();
            writeln!(out, "Travel statistics:")?;
            writeln!(
                out,
                "  Cities: {} ({} visited, {} lived)",
                stats.cities, stats.visited, stats.lived
            )?;
            writeln!(out, "  Countries: {}", stats.countries)?;
            writeln!(out, "  Trips: {}", stats.trips)?;
            Ok(Outcome::Unchanged)
        }

        Commands::Cities { all } => {
            let cities: Vec<&City> = if all {
                store.cities().iter().collect()
            } else {
                if let Some(trip) = store.selected_trip() {
                    writeln!(out, "Trip filter: {}", trip.name)?;
                }
                store.filtered_cities()
            };
            if cities.is_empty() {
                writeln!(out, "No cities.")?;
            }
            for city in cities {
                writeln!(out, "- {}", describe(city))?;
            }
            Ok(Outcome::Unchanged)
        }

        Commands::AddCity(args) => add_city(store, new_city(args), out),

        Commands::UpdateCity {
            id,
            name,
            country,
            lat,
            lng,
            kind,
            date,
        } => {
            let id = CityId::new(id);
            if store.city(&id).is_none() {
                bail!("no city with id {id}");
            }
            let patch = CityPatch {
                name,
                country,
                coordinates: lat.zip(lng).map(|(lat, lng)| Coordinates::new(lat, lng)),
                kind,
                last_visited_date: date,
                ..CityPatch::default()
            };
            if patch.is_empty() {
                writeln!(out, "Nothing to change.")?;
                return Ok(Outcome::Unchanged);
            }
            store.update_city(&id, &patch)?;
            if let Some(city) = store.city(&id) {
                writeln!(out, "updated {}", describe(city))?;
            }
            Ok(Outcome::Changed)
        }

        Commands::DeleteCity { id } => {
            let id = CityId::new(id);
            let Some(city) = store.delete_city(&id) else {
                bail!("no city with id {id}");
            };
            writeln!(out, "deleted {}", describe(&city))?;
            Ok(Outcome::Changed)
        }

        Commands::Trips => {
            if store.trips().is_empty() {
                writeln!(out, "No trips.")?;
            }
            let selected = store.preferences().selected_trip_id.clone();
            for trip in store.trips() {
                let marker = if selected.as_ref() == Some(&trip.id) { "*" } else { "-" };
                let stops: Vec<&str> = store
                    .trip_itinerary(&trip.id)
                    .into_iter()
                    .map(City::name)
                    .collect();
                writeln!(
                    out,
                    "{marker} {} [{}] id={}: {}",
                    trip.name,
                    trip.color,
                    trip.id,
                    stops.join(" -> ")
                )?;
            }
            Ok(Outcome::Unchanged)
        }

        Commands::AddTrip {
            name,
            color,
            cities,
            id,
        } => {
            let mut trip = Trip::new(name, color).with_cities(cities);
            if let Some(id) = id {
                trip = trip.with_id(id);
            }
            let trip = store.add_trip(trip)?;
            writeln!(out, "added trip {} id={}", trip.name, trip.id)?;
            Ok(Outcome::Changed)
        }

        Commands::UpdateTrip {
            id,
            name,
            color,
            cities,
        } => {
            let id = TripId::new(id);
            if store.trip(&id).is_none() {
                bail!("no trip with id {id}");
            }
            let mut patch = TripPatch {
                name,
                color,
                ..TripPatch::default()
            };
            if !cities.is_empty() {
                // A new itinerary invalidates per-stop dates.
                patch.city_ids = Some(cities.into_iter().map(CityId::from).collect());
                patch.visit_dates = Some(None);
            }
            if patch.is_empty() {
                writeln!(out, "Nothing to change.")?;
                return Ok(Outcome::Unchanged);
            }
            store.update_trip(&id, &patch);
            writeln!(out, "updated trip {id}")?;
            Ok(Outcome::Changed)
        }

        Commands::DeleteTrip { id } => {
            let id = TripId::new(id);
            let Some(trip) = store.delete_trip(&id) else {
                bail!("no trip with id {id}");
            };
            if store.preferences().selected_trip_id.as_ref() == Some(&trip.id) {
                store.update_preferences(&PreferencesPatch::select_trip(None));
            }
            writeln!(out, "deleted trip {}", trip.name)?;
            Ok(Outcome::Changed)
        }

        Commands::SelectTrip { id, clear } => {
            let selection = if clear { None } else { id.map(TripId::new) };
            if let Some(id) = &selection {
                if store.trip(id).is_none() {
                    bail!("no trip with id {id}");
                }
            }
            store.update_preferences(&PreferencesPatch::select_trip(selection));
            match store.selected_trip() {
                Some(trip) => writeln!(out, "showing trip {}", trip.name)?,
                None => writeln!(out, "showing all cities")?,
            }
            Ok(Outcome::Changed)
        }

        Commands::Prefs {
            theme,
            view,
            debounce_ms,
            animation_speed,
        } => {
            let patch = PreferencesPatch {
                view_mode: view,
                theme,
                animation_speed,
                search_debounce_ms: debounce_ms,
                selected_trip_id: None,
            };
            let changed = patch != PreferencesPatch::default();
            if changed {
                store.update_preferences(&patch);
            }
            let prefs = store.preferences();
            writeln!(out, "view: {:?}", prefs.view_mode)?;
            writeln!(out, "theme: {:?}", prefs.theme)?;
            writeln!(out, "animation speed: {}", prefs.animation_speed)?;
            writeln!(out, "search debounce: {}ms", prefs.search_debounce_ms)?;
            Ok(if changed { Outcome::Changed } else { Outcome::Unchanged })
        }

        Commands::Search {
            query,
            dataset,
            limit,
            add,
            kind,
            date,
        } => {
            let text = std::fs::read_to_string(&dataset)
                .with_context(|| format!("reading dataset {}", dataset.display()))?;
            let index = LocalCityIndex::from_json(&text)?;
            let hits = index.search(&query, limit);
            if hits.is_empty() {
                writeln!(out, "No cities found matching: {query}")?;
                return Ok(Outcome::Unchanged);
            }
            for hit in &hits {
                writeln!(
                    out,
                    "- {}, {} ({:.4},{:.4})",
                    hit.name, hit.country, hit.coordinates.lat, hit.coordinates.lng
                )?;
            }
            if !add {
                return Ok(Outcome::Unchanged);
            }
            let best = hits.into_iter().next();
            match best {
                Some(candidate) => {
                    let city = candidate.into_city(kind, date.unwrap_or_else(today));
                    add_city(store, city, out)
                }
                None => Ok(Outcome::Unchanged),
            }
        }

        Commands::Import { path } => {
            let Some(payload) = JsonFileStorage::new(&path).load()? else {
                bail!("{} is empty or missing", path.display());
            };
            let summary = store.import_snapshot(&payload)?;
            writeln!(
                out,
                "imported {} cities and {} trips",
                summary.cities, summary.trips
            )?;
            if summary.skipped_cities + summary.skipped_trips > 0 {
                writeln!(
                    out,
                    "skipped {} cities and {} trips that could not be read",
                    summary.skipped_cities, summary.skipped_trips
                )?;
            }
            Ok(Outcome::Changed)
        }

        Commands::Export { path } => {
            JsonFileStorage::new(&path)
                .save(&store.export_value()?)
                .with_context(|| format!("writing {}", path.display()))?;
            let stats = store.stats();
            writeln!(
                out,
                "exported {} cities and {} trips to {}",
                stats.cities,
                stats.trips,
                path.display()
            )?;
            Ok(Outcome::Unchanged)
        }
    }
}
