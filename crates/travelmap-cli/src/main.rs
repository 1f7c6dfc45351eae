//! travelmap — command-line front end for travelmap-core
//!
//! Every invocation loads the state file, applies one command and, when the
//! command changed something, writes the file back.
//!
//! Usage examples
//! --------------
//!
//! - Record a city (date defaults to today)
//!   $ travelmap add-city --name Tokyo --country Japan --lat 35.6762 --lng 139.6503
//!
//! - Plan a trip through stored cities and show only its stops
//!   $ travelmap add-trip --name "Japan 2024" --city <ID> --city <ID>
//!   $ travelmap select-trip <TRIP_ID>
//!   $ travelmap cities
//!
//! - Find a city in a local dataset and add the best hit
//!   $ travelmap search osaka --dataset cities.json --add
//!
//! - Back up and restore
//!   $ travelmap export backup.json
//!   $ travelmap import backup.json
//!
//! State file
//! ----------
//!
//! `--file` (or `TRAVELMAP_FILE`) selects the state file, `travelmap.json`
//! by default. A `.gz` extension stores it gzip-compressed.
mod args;
mod commands;

use crate::args::CliArgs;
use crate::commands::Outcome;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use travelmap_core::prelude::*;

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let storage = JsonFileStorage::new(&args.file);
    let (mut store, summary) = TravelStore::restore(&storage)
        .with_context(|| format!("loading {}", args.file.display()))?;
    if let Some(summary) = summary {
        tracing::debug!(
            cities = summary.cities,
            trips = summary.trips,
            skipped = summary.skipped_cities + summary.skipped_trips,
            "state loaded"
        );
    }

    let mut stdout = std::io::stdout().lock();
    let outcome = commands::run(&mut store, args.command, &mut stdout)?;

    if outcome == Outcome::Changed {
        store
            .persist(&storage)
            .with_context(|| format!("saving {}", args.file.display()))?;
        tracing::debug!(path = %args.file.display(), "state saved");
    }

    Ok(())
}
