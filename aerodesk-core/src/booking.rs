use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;
use aerodesk_shared::Masked;
use crate::models::{Booking, Passenger};
use crate::repository::{RepoResult, Repositories};
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub flight_number: String,
    pub passenger_name: String,
    pub passport_number: String,
    pub contact_number: String,
}

impl NewBooking {
    /// Trimmed copy, or a validation error naming the first blank field.
    pub fn validated(&self) -> CoreResult<NewBooking> {
        let fields = [
            ("flight_number", &self.flight_number),
            ("passenger_name", &self.passenger_name),
            ("passport_number", &self.passport_number),
            ("contact_number", &self.contact_number),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CoreError::ValidationError(format!("{} is required", name)));
        }

        Ok(NewBooking {
            flight_number: self.flight_number.trim().to_string(),
            passenger_name: self.passenger_name.trim().to_string(),
            passport_number: self.passport_number.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
        })
    }
}

/// Seat reservation and cancellation.
///
/// A booking takes its seat with a conditional decrement before any record is
/// written, so two callers racing for the last seat cannot both succeed. If a
/// later write fails the seat is handed back.
#[derive(Clone)]
pub struct BookingService {
    repos: Repositories,
}

impl BookingService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    pub async fn create_booking(&self, request: &NewBooking) -> CoreResult<Booking> {
        let request = request.validated()?;
        let flight_number = request.flight_number.as_str();

        let flight = self
            .repos
            .flights
            .find_flight(flight_number)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Flight {}", flight_number)))?;

        if !flight.has_availability() {
            warn!(flight = flight_number, "Booking refused, flight is sold out");
            return Err(CoreError::NoAvailability(flight_number.to_string()));
        }

        let Some(reserved) = self.repos.flights.reserve_seat(flight_number).await? else {
            warn!(flight = flight_number, "Booking refused, last seat taken concurrently");
            return Err(CoreError::NoAvailability(flight_number.to_string()));
        };

        let booking = Booking::new(flight_number, &request.passport_number);
        let passenger = Passenger::new(
            booking.id,
            &request.passport_number,
            &request.passenger_name,
            &request.contact_number,
        );

        if let Err(e) = self.write_records(&passenger, &booking).await {
            error!(flight = flight_number, "Failed to persist booking: {}", e);
            self.undo_reservation(flight_number, booking.id).await;
            return Err(e.into());
        }

        info!(
            booking_id = %booking.id,
            flight = flight_number,
            passport = %Masked(request.passport_number.as_str()),
            seats_left = reserved.available_seats,
            "Booking created"
        );
        Ok(booking)
    }

    /// Removes a booking and returns its seat to the flight. Passenger records
    /// stay in place. If the seat cannot be returned the booking is put back.
    pub async fn cancel_booking(&self, booking_id: Uuid) -> CoreResult<Booking> {
        let booking = self
            .repos
            .bookings
            .delete_booking(booking_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Booking {}", booking_id)))?;

        let released = match self.repos.flights.release_seat(&booking.flight_number).await {
            Ok(released) => released,
            Err(e) => {
                error!(booking_id = %booking.id, "Failed to release seat, restoring booking: {}", e);
                if let Err(restore_err) = self.repos.bookings.insert_booking(&booking).await {
                    error!(booking_id = %booking.id, "Failed to restore booking: {}", restore_err);
                }
                return Err(e.into());
            }
        };

        match released {
            Some(flight) => info!(
                booking_id = %booking.id,
                flight = %booking.flight_number,
                seats_left = flight.available_seats,
                "Booking cancelled"
            ),
            None => warn!(
                booking_id = %booking.id,
                flight = %booking.flight_number,
                "Booking cancelled without returning a seat"
            ),
        }

        Ok(booking)
    }

    async fn write_records(&self, passenger: &Passenger, booking: &Booking) -> RepoResult<()> {
        self.repos.passengers.insert_passenger(passenger).await?;
        self.repos.bookings.insert_booking(booking).await?;
        Ok(())
    }

    async fn undo_reservation(&self, flight_number: &str, booking_id: Uuid) {
        if let Err(e) = self.repos.passengers.delete_passengers_for_booking(booking_id).await {
            error!(%booking_id, "Failed to remove passenger record: {}", e);
        }
        if let Err(e) = self.repos.flights.release_seat(flight_number).await {
            error!(flight = flight_number, "Failed to release reserved seat: {}", e);
        }
    }
}
