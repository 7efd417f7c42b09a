//! Data types and associated functions and methods

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// One historical bike trip record.
///
/// A `Rental` is parsed from one row of the trips CSV file at startup and is
/// immutable for the lifetime of the server. Responses serialise the full
/// attribute set.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Rental {
    /// Trip identifier
    pub id: i64,
    /// Time at which the bike was rented
    pub start_time: NaiveDateTime,
    /// Time at which the bike was returned
    pub end_time: NaiveDateTime,
    /// Bike identifier
    pub bike_id: i64,
    /// Trip duration in minutes
    pub duration: f64,
    /// Identifier of the station the trip started at
    pub start_station_id: i64,
    /// Name of the station the trip started at
    pub start_station_name: String,
    /// Identifier of the station the trip ended at
    pub end_station_id: i64,
    /// Name of the station the trip ended at
    pub end_station_name: String,
    /// Rider account type, e.g. "Subscriber" or "Customer"
    pub user_type: String,
    /// Rider gender, may be blank
    pub gender: String,
    /// Rider birth year, 0 if absent or unparseable
    pub member_birth_year: i32,
}

/// GBFS station information document.
///
/// This is the envelope returned by a `station_information.json` endpoint.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct StationsData {
    /// Timestamp at which the feed was generated
    #[serde(default)]
    pub last_updated: i64,
    /// Number of seconds the feed may be cached for
    #[serde(default)]
    pub ttl: i64,
    /// Feed payload
    #[serde(default)]
    pub data: StationList,
}

/// Payload of a GBFS station information document.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct StationList {
    /// All stations known to the system
    #[serde(default)]
    pub stations: Vec<Station>,
}

/// Per-platform deep link URIs for renting from a station.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RentalUris {
    #[serde(default)]
    pub android: String,
    #[serde(default)]
    pub ios: String,
}

/// Static metadata for one docking station.
///
/// Station identifiers are strings and live in a different identifier space
/// from the integer station ids in [Rental] records; the two are never
/// joined. Every field defaults when absent from the feed since GBFS
/// producers vary in which optional fields they populate.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Station {
    /// Station identifier, expected (but not enforced) to be unique
    #[serde(default)]
    pub station_id: String,
    /// Human readable station name
    #[serde(default)]
    pub name: String,
    /// Abbreviated station name
    #[serde(default)]
    pub short_name: String,
    /// Latitude in decimal degrees
    #[serde(default)]
    pub lat: f64,
    /// Longitude in decimal degrees
    #[serde(default)]
    pub lon: f64,
    /// Number of docks at the station
    #[serde(default)]
    pub capacity: i64,
    /// Station type, e.g. "classic"
    #[serde(default)]
    pub station_type: String,
    /// Identifier from a previous feed version
    #[serde(default)]
    pub legacy_id: String,
    /// Identifier in an external system
    #[serde(default)]
    pub external_id: String,
    /// Whether the station has a payment kiosk
    #[serde(default)]
    pub has_kiosk: bool,
    /// Whether the station dispenses physical keys
    #[serde(default)]
    pub eightd_has_key_dispenser: bool,
    /// Additional services offered at the station
    #[serde(default)]
    pub eightd_station_services: Vec<String>,
    /// Accepted rental methods, e.g. "KEY", "CREDITCARD"
    #[serde(default)]
    pub rental_methods: Vec<String>,
    /// Deep links for renting from this station
    #[serde(default)]
    pub rental_uris: Option<RentalUris>,
    /// Whether electric bike surcharges are waived here
    #[serde(default)]
    pub electric_bike_surcharge_waiver: bool,
}

/// Request body for the summary endpoints.
#[derive(Debug, Deserialize, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct SummaryRequest {
    /// Filters restricting which rentals are summarised
    #[validate]
    pub filters: SummaryFilters,
}

/// Filters for a summary request.
#[derive(Debug, Deserialize, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct SummaryFilters {
    /// End station identifiers to summarise. Duplicates are permitted and
    /// idempotent.
    #[validate(length(min = 1, message = "station_ids must not be empty"))]
    pub station_ids: Vec<i64>,
}

/// Trip summary result.
///
/// Maps end station id (stringified) to calendar date (`YYYY-MM-DD`) to at
/// most 20 rentals ordered by descending end time. `BTreeMap` keeps the JSON
/// rendering of identical requests byte-identical.
pub type TripSummary = BTreeMap<String, BTreeMap<String, Vec<Rental>>>;

/// Rider summary result.
///
/// Maps end station id (stringified) to calendar date to age group label to
/// the number of matching rentals.
pub type RiderSummary = BTreeMap<String, BTreeMap<String, BTreeMap<String, u64>>>;
