//! Loading of historical trip records from a CSV file.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;
use tracing::{event, Level};

use crate::error::RentalApiError;
use crate::models::Rental;

/// Timestamp format used in the trips file, e.g. `2019-05-01 10:00:00`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Positional column indices in the trips file.
const COL_ID: usize = 0;
const COL_START_TIME: usize = 1;
const COL_END_TIME: usize = 2;
const COL_BIKE_ID: usize = 3;
const COL_DURATION: usize = 4;
const COL_START_STATION_ID: usize = 5;
const COL_START_STATION_NAME: usize = 6;
const COL_END_STATION_ID: usize = 7;
const COL_END_STATION_NAME: usize = 8;
const COL_USER_TYPE: usize = 9;
const COL_GENDER: usize = 10;
const COL_BIRTH_YEAR: usize = 11;

/// Load all rental records from the trips file at `path`.
///
/// The first row is a header and is skipped. Fields that fail to parse as
/// their target type coerce to zero values rather than failing the row; the
/// source data contains blank genders and birth years and the service treats
/// those as unknowns. Structural problems (an unreadable file, rows with
/// inconsistent column counts) are returned as errors.
pub fn load_rentals(path: &Path) -> Result<Vec<Rental>, RentalApiError> {
    let file = File::open(path).map_err(|source| RentalApiError::TripsFileOpen {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let mut rentals = Vec::new();
    for record in reader.records() {
        let record = record?;
        rentals.push(rental_from_record(&record));
    }
    event!(
        Level::INFO,
        "loaded {} rentals from {}",
        rentals.len(),
        path.display()
    );
    Ok(rentals)
}

/// Build a [Rental] from one CSV record, coercing unparseable fields to zero
/// values.
fn rental_from_record(record: &StringRecord) -> Rental {
    Rental {
        id: parse_or_zero(record, COL_ID),
        start_time: parse_timestamp(field(record, COL_START_TIME)),
        end_time: parse_timestamp(field(record, COL_END_TIME)),
        bike_id: parse_or_zero(record, COL_BIKE_ID),
        duration: parse_or_zero(record, COL_DURATION),
        start_station_id: parse_or_zero(record, COL_START_STATION_ID),
        start_station_name: field(record, COL_START_STATION_NAME).to_string(),
        end_station_id: parse_or_zero(record, COL_END_STATION_ID),
        end_station_name: field(record, COL_END_STATION_NAME).to_string(),
        user_type: field(record, COL_USER_TYPE).to_string(),
        gender: field(record, COL_GENDER).to_string(),
        member_birth_year: parse_or_zero(record, COL_BIRTH_YEAR),
    }
}

fn field<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or("")
}

fn parse_or_zero<T>(record: &StringRecord, index: usize) -> T
where
    T: std::str::FromStr + Default,
{
    field(record, index).trim().parse().unwrap_or_default()
}

/// Parse a timestamp in the trips file format, falling back to the epoch.
fn parse_timestamp(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).unwrap_or_default()
}
