//! This file defines the rentalist binary entry point.

use std::path::Path;
use std::process::exit;
use std::sync::Arc;

use rentalist::app;
use rentalist::app_state::AppState;
use rentalist::cli;
use rentalist::metrics;
use rentalist::rentals;
use rentalist::server;
use rentalist::stations;
use rentalist::tracing::init_tracing;

use tracing::{event, Level};

/// Application entry point
///
/// Loads both datasets before serving and fails fast if either load fails.
#[tokio::main]
async fn main() {
    let args = cli::parse();
    init_tracing();
    metrics::register_metrics();

    let rentals = match rentals::load_rentals(Path::new(&args.trips_file)) {
        Ok(rentals) => rentals,
        Err(error) => {
            event!(Level::ERROR, "failed to load trip data: {}", error);
            exit(1)
        }
    };
    let stations = match stations::fetch_stations(&args.station_info_url).await {
        Ok(stations) => stations,
        Err(error) => {
            event!(Level::ERROR, "failed to load station data: {}", error);
            exit(1)
        }
    };

    let state = Arc::new(AppState::new(&args, rentals, stations));
    let service = app::service(state);
    server::serve(&args, service).await;
}
