use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use travelmap_core::model::{CityKind, Theme, ViewMode};

/// CLI arguments for travelmap
#[derive(Debug, Parser)]
#[command(
    name = "travelmap",
    version,
    about = "Keep track of the cities you visited, lived in, and the trips between them"
)]
pub struct CliArgs {
    /// State file (JSON; `.gz` is compressed)
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        env = "TRAVELMAP_FILE",
        default_value = "travelmap.json"
    )]
    pub file: PathBuf,

    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the stored cities and trips
    Stats,

    /// List cities (only the selected trip's cities unless --all)
    Cities {
        /// Ignore the selected trip
        #[arg(long)]
        all: bool,
    },

    /// Add a city
    AddCity(NewCityArgs),

    /// Change fields of a city
    UpdateCity {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long, requires = "lng", allow_negative_numbers = true, value_parser = parse_degrees)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true, value_parser = parse_degrees)]
        lng: Option<f64>,
        /// visited or lived
        #[arg(long)]
        kind: Option<CityKind>,
        /// Last visit (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a city and remove it from every trip
    DeleteCity { id: String },

    /// List trips with their itineraries
    Trips,

    /// Add a trip
    AddTrip {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "blue")]
        color: String,
        /// City ids in itinerary order (repeatable)
        #[arg(long = "city")]
        cities: Vec<String>,
        /// Use this id instead of a generated one
        #[arg(long)]
        id: Option<String>,
    },

    /// Change fields of a trip
    UpdateTrip {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
        /// Replace the itinerary (repeatable)
        #[arg(long = "city")]
        cities: Vec<String>,
    },

    /// Delete a trip (its cities stay)
    DeleteTrip { id: String },

    /// Filter the map to one trip, or --clear to show everything
    SelectTrip {
        #[arg(required_unless_present = "clear")]
        id: Option<String>,
        #[arg(long, conflicts_with = "id")]
        clear: bool,
    },

    /// Show or change preferences
    Prefs {
        #[arg(long)]
        theme: Option<Theme>,
        /// map or globe
        #[arg(long)]
        view: Option<ViewMode>,
        #[arg(long)]
        debounce_ms: Option<u64>,
        #[arg(long)]
        animation_speed: Option<f64>,
    },

    /// Search a candidate dataset (JSON array) for cities to add
    Search {
        query: String,
        /// JSON file with `[{"name", "country", "coordinates": {"lat", "lng"}}, ...]`
        #[arg(long)]
        dataset: PathBuf,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Add the best hit as a city
        #[arg(long)]
        add: bool,
        #[arg(long, default_value = "visited")]
        kind: CityKind,
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Replace the stored state with an exported document
    Import { path: PathBuf },

    /// Write the stored state as an export document
    Export { path: PathBuf },
}

#[derive(Debug, Args)]
pub struct NewCityArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub country: String,
    #[arg(long, allow_negative_numbers = true, value_parser = parse_degrees)]
    pub lat: f64,
    #[arg(long, allow_negative_numbers = true, value_parser = parse_degrees)]
    pub lng: f64,
    /// visited or lived
    #[arg(long, default_value = "visited")]
    pub kind: CityKind,
    /// Last visit (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Use this id instead of a generated one
    #[arg(long)]
    pub id: Option<String>,
}

/// A coordinate in decimal degrees; NaN and infinities are refused.
fn parse_degrees(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.trim().parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{raw} is not a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("travelmap").chain(args.iter().copied()))
    }

    #[test]
    fn add_city_accepts_negative_degrees() {
        let args = parse(&[
            "add-city", "--name", "Lima", "--country", "Peru", "--lat", "-12.0464", "--lng",
            "-77.0428",
        ])
        .unwrap();
        match args.command {
            Commands::AddCity(city) => {
                assert_eq!(city.lat, -12.0464);
                assert_eq!(city.lng, -77.0428);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn non_finite_degrees_are_refused() {
        for bad in ["NaN", "inf", "-infinity"] {
            let result = parse(&[
                "add-city", "--name", "X", "--country", "Y", "--lat", bad, "--lng", "1",
            ]);
            assert!(result.is_err(), "{bad} should be rejected");
        }
        assert!(parse(&["update-city", "x", "--lat", "1", "--lng", "NaN"]).is_err());
    }

    #[test]
    fn state_file_defaults_and_can_be_overridden() {
        let args = parse(&["-f", "trips.json.gz", "stats"]).unwrap();
        assert_eq!(args.file, PathBuf::from("trips.json.gz"));
        assert!(matches!(args.command, Commands::Stats));
    }
}
