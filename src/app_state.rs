use crate::cli::CommandLineArgs;
use crate::models::{Rental, StationsData};

use std::sync::Arc;

/// Shared application state passed to each request handler.
///
/// Both datasets are loaded once before the server starts accepting
/// requests and are never mutated afterwards, so concurrent handlers may
/// read them without coordination. A runtime reload feature would need to
/// replace this with a swappable snapshot.
pub struct AppState {
    /// Command line arguments.
    pub args: CommandLineArgs,

    /// All historical trip records.
    pub rentals: Vec<Rental>,

    /// Station metadata from the GBFS feed.
    pub stations: StationsData,
}

impl AppState {
    /// Create and return an [AppState].
    pub fn new(args: &CommandLineArgs, rentals: Vec<Rental>, stations: StationsData) -> Self {
        Self {
            args: args.clone(),
            rentals,
            stations,
        }
    }
}

/// AppState wrapped in an Atomic Reference Count (Arc) to allow multiple references.
pub type SharedAppState = Arc<AppState>;
