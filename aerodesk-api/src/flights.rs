use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use aerodesk_core::{Flight, FlightSearchQuery};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FlightResponse {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub total_seats: i32,
    pub available_seats: i32,
    pub price_amount: i32,
    pub price_currency: String,
}

impl From<Flight> for FlightResponse {
    fn from(flight: Flight) -> Self {
        Self {
            departure: flight.departure_display(),
            flight_number: flight.flight_number,
            origin: flight.origin,
            destination: flight.destination,
            total_seats: flight.total_seats,
            available_seats: flight.available_seats,
            price_amount: flight.price_amount,
            price_currency: flight.price_currency,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights", get(search_flights))
        .route("/v1/flights/numbers", get(list_flight_numbers))
        .route("/v1/flights/{flight_number}", get(get_flight))
}

/// GET /v1/flights?origin=&destination=&date=
async fn search_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightSearchQuery>,
) -> Result<Json<Vec<FlightResponse>>, AppError> {
    let flights = state.catalog.search_flights(query).await?;
    Ok(Json(flights.into_iter().map(FlightResponse::from).collect()))
}

/// GET /v1/flights/numbers
async fn list_flight_numbers(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.catalog.list_flight_numbers().await?))
}

/// GET /v1/flights/{flight_number}
async fn get_flight(
    State(state): State<AppState>,
    Path(flight_number): Path<String>,
) -> Result<Json<FlightResponse>, AppError> {
    let flight = state.catalog.get_flight(&flight_number).await?;
    Ok(Json(flight.into()))
}
