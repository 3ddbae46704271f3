use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;
use aerodesk_core::{BoardingPass, Booking, NewBooking};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: Uuid,
    pub flight_number: String,
    pub passport_number: String,
    pub booking_date: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            booking_date: booking.created_display(),
            booking_id: booking.id,
            flight_number: booking.flight_number,
            passport_number: booking.passport_number,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BoardingPassResponse {
    #[serde(flatten)]
    pub pass: BoardingPass,
    pub text: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", post(create_booking))
        .route("/v1/bookings/{booking_id}", delete(cancel_booking))
        .route("/v1/bookings/{booking_id}/boarding-pass", get(get_boarding_pass))
        .route("/v1/passengers/{passport_number}/bookings", get(passenger_bookings))
}

/// POST /v1/bookings
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<NewBooking>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let booking = state.bookings.create_booking(&req).await?;
    Ok((StatusCode::CREATED, Json(booking.into())))
}

/// DELETE /v1/bookings/{booking_id}
async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state.bookings.cancel_booking(booking_id).await?;
    Ok(Json(booking.into()))
}

/// GET /v1/bookings/{booking_id}/boarding-pass
async fn get_boarding_pass(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BoardingPassResponse>, AppError> {
    let pass = state.lookup.get_boarding_pass(booking_id).await?;
    let text = pass.render();
    Ok(Json(BoardingPassResponse { pass, text }))
}

/// GET /v1/passengers/{passport_number}/bookings
async fn passenger_bookings(
    State(state): State<AppState>,
    Path(passport_number): Path<String>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings = state.lookup.find_bookings_by_passport(&passport_number).await?;
    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}
