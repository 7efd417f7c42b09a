//! HTTP router and request handlers.

use crate::app_state::SharedAppState;
use crate::error::RentalApiError;
use crate::metrics;
use crate::models::{RiderSummary, Station, SummaryRequest, TripSummary};
use crate::stations;
use crate::summary;
use crate::validated_json::ValidatedJson;

use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    http::Request,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, Utc};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_http::validate_request::ValidateRequestHeaderLayer;

/// The axum service type served by [crate::server::serve].
pub type Service = Router;

/// Returns the router for the service.
///
/// The three data routes require an `Authorization: Bearer <token>` header
/// matching the configured shared secret; `/healthz` and `/metrics` do not.
pub fn service(state: SharedAppState) -> Service {
    let expected = format!("Bearer {}", state.args.api_token);
    Router::new()
        .route("/stations/:id", get(get_station))
        .route("/trips/summary", post(trips_summary))
        .route("/trips/riders/summary", post(riders_summary))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .on_request(metrics::request_counter)
                        .on_response(metrics::record_response_metrics),
                )
                .layer(ValidateRequestHeaderLayer::custom(
                    // Validate the shared secret before any handler runs.
                    move |request: &mut Request<Body>| {
                        let authorised = request
                            .headers()
                            .get(header::AUTHORIZATION)
                            .and_then(|value| value.to_str().ok())
                            .map(|value| value == expected)
                            .unwrap_or(false);
                        if authorised {
                            Ok(())
                        } else {
                            Err(StatusCode::UNAUTHORIZED.into_response())
                        }
                    },
                )),
        )
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics::metrics_handler))
        .with_state(state)
}

/// Readiness signal reporting how much data was loaded at startup.
async fn healthz(State(state): State<SharedAppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "rentals": state.rentals.len(),
        "stations": state.stations.data.stations.len(),
    }))
}

/// `GET /stations/:id`
///
/// Returns the matching station, or a 404 with body
/// `{"message": "station not found"}`.
async fn get_station(
    State(state): State<SharedAppState>,
    Path(id): Path<String>,
) -> Result<Json<Station>, RentalApiError> {
    match stations::find_station(&state.stations, &id) {
        Some(station) => Ok(Json(station.clone())),
        None => {
            tracing::debug!(station_id = %id, "station not found");
            Err(RentalApiError::StationNotFound)
        }
    }
}

/// `POST /trips/summary`
async fn trips_summary(
    State(state): State<SharedAppState>,
    ValidatedJson(request): ValidatedJson<SummaryRequest>,
) -> Json<TripSummary> {
    Json(summary::trip_summary(
        &state.rentals,
        &request.filters.station_ids,
    ))
}

/// `POST /trips/riders/summary`
async fn riders_summary(
    State(state): State<SharedAppState>,
    ValidatedJson(request): ValidatedJson<SummaryRequest>,
) -> Json<RiderSummary> {
    Json(summary::rider_summary(
        &state.rentals,
        &request.filters.station_ids,
        Utc::now().year(),
    ))
}
