//! Aggregation of rental records into trip and rider summaries.
//!
//! Both summaries are pure synchronous functions over the immutable rental
//! set; handlers call them with the station ids from a request.

use std::collections::{BTreeMap, HashSet};

use crate::models::{Rental, RiderSummary, TripSummary};

/// Maximum number of rentals retained per (station, date) bucket.
const TRIP_BUCKET_CAP: usize = 20;

/// Date key format for summary buckets.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Summarise trips ending at the requested stations.
///
/// Returns a map from end station id (stringified) to calendar date to at
/// most 20 rentals. Rentals within a date bucket are ordered
/// by descending end time, and when more than the cap match, the retained
/// ones are the most recent. Every requested station id appears as a key,
/// with an empty map if no trips ended there.
pub fn trip_summary(rentals: &[Rental], station_ids: &[i64]) -> TripSummary {
    let requested: HashSet<i64> = station_ids.iter().copied().collect();

    let mut summary = TripSummary::new();
    for station_id in &requested {
        summary.insert(station_id.to_string(), BTreeMap::new());
    }

    let mut matched: Vec<&Rental> = rentals
        .iter()
        .filter(|rental| requested.contains(&rental.end_station_id))
        .collect();
    // Stable sort, so rentals sharing an end time keep their load order and
    // repeated requests serialise identically.
    matched.sort_by(|a, b| b.end_time.cmp(&a.end_time));

    for rental in matched {
        let dates = summary
            .entry(rental.end_station_id.to_string())
            .or_default();
        let bucket = dates
            .entry(rental.end_time.format(DATE_FORMAT).to_string())
            .or_default();
        if bucket.len() < TRIP_BUCKET_CAP {
            bucket.push(rental.clone());
        }
    }

    summary
}

/// Summarise riders by age group for trips ending at the requested stations.
///
/// Returns a map from end station id (stringified) to calendar date to age
/// group label to the number of matching rentals. As with [trip_summary],
/// every requested station id appears as a key even when no trips match.
///
/// `current_year` is the wall clock year at request time; ages are computed
/// against it, so records near a bucket boundary shift group on January 1st.
pub fn rider_summary(rentals: &[Rental], station_ids: &[i64], current_year: i32) -> RiderSummary {
    let requested: HashSet<i64> = station_ids.iter().copied().collect();

    let mut summary = RiderSummary::new();
    for station_id in &requested {
        summary.insert(station_id.to_string(), BTreeMap::new());
    }

    for rental in rentals {
        if !requested.contains(&rental.end_station_id) {
            continue;
        }
        let date = rental.end_time.format(DATE_FORMAT).to_string();
        let group = age_group(rental.member_birth_year, current_year);
        let count = summary
            .entry(rental.end_station_id.to_string())
            .or_default()
            .entry(date)
            .or_default()
            .entry(group.to_string())
            .or_default();
        *count += 1;
    }

    summary
}

/// Return the age group label for a rider born in `birth_year`.
///
/// A birth year of 0 marks an absent or unparseable value and is always
/// "unknown", as is any birth year in the future.
pub fn age_group(birth_year: i32, current_year: i32) -> &'static str {
    if birth_year == 0 {
        return "unknown";
    }
    match current_year - birth_year {
        0..=20 => "0-20",
        21..=30 => "21-30",
        31..=40 => "31-40",
        41..=50 => "41-50",
        age if age >= 51 => "51+",
        _ => "unknown",
    }
}
