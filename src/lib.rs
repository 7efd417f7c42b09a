//! This crate provides an HTTP API server for bike share data. It exposes
//! station metadata and two summaries over historical trip records: trips by
//! end station and date, and rider age groups by end station and date.
//!
//! Station metadata is fetched once at startup from a GBFS
//! `station_information.json` feed, and trip records are loaded once from a
//! local CSV file. Both datasets are immutable for the lifetime of the
//! server; every request computes its result from them with a linear scan.
//!
//! The server is built on top of a number of open source components.
//!
//! * [Tokio](tokio), the most popular asynchronous Rust runtime.
//! * [Axum](axum) web framework, built by the Tokio team on top of various
//!   popular components, including the [hyper] HTTP library.
//! * [Serde](serde) performs (de)serialisation of JSON request and response data.
//! * [csv] parses the historical trip records.
//! * [reqwest] fetches the GBFS station information feed.
//! * [chrono] provides the timestamp handling behind the date bucketing.

pub mod app;
pub mod app_state;
pub mod cli;
pub mod error;
pub mod metrics;
pub mod models;
pub mod rentals;
pub mod server;
pub mod stations;
pub mod summary;
#[cfg(test)]
pub mod test_utils;
pub mod tracing;
pub mod validated_json;
