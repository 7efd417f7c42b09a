//! Fetching of GBFS station information and station lookup.

use std::time::Duration;

use tracing::{event, Level};

use crate::error::RentalApiError;
use crate::models::{Station, StationsData};

/// Timeout for the complete station information request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for establishing a connection to the feed.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch and decode the station information document from `url`.
///
/// This makes one outbound request; it is called once at startup. Network
/// failures, non-success statuses and undecodable bodies are all returned as
/// a typed error so the caller can decide whether to fail fast.
pub async fn fetch_stations(url: &str) -> Result<StationsData, RentalApiError> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    let stations: StationsData = response.json().await?;
    event!(
        Level::INFO,
        "loaded {} stations from {}",
        stations.data.stations.len(),
        url
    );
    Ok(stations)
}

/// Find a station by its identifier.
///
/// Linear scan over the loaded station set; the first match wins. Returns
/// `None` if no station has the requested identifier.
pub fn find_station<'a>(stations: &'a StationsData, id: &str) -> Option<&'a Station> {
    stations
        .data
        .stations
        .iter()
        .find(|station| station.station_id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_find_station() {
        let stations = test_utils::get_test_stations();
        let station = find_station(&stations, "176").unwrap();
        assert_eq!(station.station_id, "176");
        assert_eq!(station.name, "Clark St & Elm St");
    }

    #[test]
    fn test_find_station_not_found() {
        let stations = test_utils::get_test_stations();
        assert!(find_station(&stations, "no-such-station").is_none());
    }

    #[test]
    fn test_find_station_first_match_wins() {
        let mut stations = test_utils::get_test_stations();
        let mut duplicate = stations.data.stations[0].clone();
        duplicate.name = "Duplicate".to_string();
        stations.data.stations.push(duplicate);

        let station = find_station(&stations, "176").unwrap();
        assert_eq!(station.name, "Clark St & Elm St");
    }

    #[test]
    fn test_find_station_empty_set() {
        let stations = StationsData::default();
        assert!(find_station(&stations, "176").is_none());
    }
}
