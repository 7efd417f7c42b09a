use crate::models::{Rental, RentalUris, Station, StationList, StationsData};

use chrono::NaiveDateTime;

/// Create a Rental with plausible values for use as a test fixture.
pub(crate) fn get_test_rental() -> Rental {
    Rental {
        id: 22178529,
        start_time: NaiveDateTime::parse_from_str("2019-05-01 09:45:00", "%Y-%m-%d %H:%M:%S")
            .unwrap(),
        end_time: NaiveDateTime::parse_from_str("2019-05-01 10:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap(),
        bike_id: 6251,
        duration: 15.0,
        start_station_id: 81,
        start_station_name: "Daley Center Plaza".to_string(),
        end_station_id: 176,
        end_station_name: "Clark St & Elm St".to_string(),
        user_type: "Subscriber".to_string(),
        gender: "Male".to_string(),
        member_birth_year: 1992,
    }
}

/// Create a StationsData fixture containing two stations.
pub(crate) fn get_test_stations() -> StationsData {
    StationsData {
        last_updated: 1640995200,
        ttl: 60,
        data: StationList {
            stations: vec![
                Station {
                    station_id: "176".to_string(),
                    name: "Clark St & Elm St".to_string(),
                    short_name: "TA1307000039".to_string(),
                    lat: 41.902893,
                    lon: -87.63128,
                    capacity: 47,
                    station_type: "classic".to_string(),
                    legacy_id: "176".to_string(),
                    external_id: "a3a36d9e-a135-11e9-9cda-0a87ae2ba916".to_string(),
                    has_kiosk: true,
                    eightd_has_key_dispenser: false,
                    eightd_station_services: vec![],
                    rental_methods: vec!["KEY".to_string(), "CREDITCARD".to_string()],
                    rental_uris: Some(RentalUris {
                        android: "https://chi.lft.to/lastmile_qr_scan".to_string(),
                        ios: "https://chi.lft.to/lastmile_qr_scan".to_string(),
                    }),
                    electric_bike_surcharge_waiver: false,
                },
                Station {
                    station_id: "240".to_string(),
                    name: "Sheridan Rd & Irving Park Rd".to_string(),
                    short_name: "TA1305000022".to_string(),
                    lat: 41.954245,
                    lon: -87.654406,
                    capacity: 23,
                    ..Station::default()
                },
            ],
        },
    }
}
