use tracing::debug;
use uuid::Uuid;
use aerodesk_shared::Masked;
use crate::boarding_pass::BoardingPass;
use crate::models::Booking;
use crate::repository::Repositories;
use crate::{CoreError, CoreResult};

/// Booking queries keyed by passenger identity.
#[derive(Clone)]
pub struct BookingLookup {
    repos: Repositories,
}

impl BookingLookup {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    pub async fn find_bookings_by_passport(&self, passport_number: &str) -> CoreResult<Vec<Booking>> {
        let passport_number = passport_number.trim();
        if passport_number.is_empty() {
            return Err(CoreError::ValidationError("passport_number is required".to_string()));
        }

        let bookings = self.repos.bookings.find_bookings_by_passport(passport_number).await?;
        debug!(passport = %Masked(passport_number), count = bookings.len(), "Bookings lookup");
        Ok(bookings)
    }

    /// Fails with `NotFound` when the booking, or the passenger or flight it
    /// points at, no longer exists.
    pub async fn get_boarding_pass(&self, booking_id: Uuid) -> CoreResult<BoardingPass> {
        let booking = self
            .repos
            .bookings
            .find_booking(booking_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Booking {}", booking_id)))?;

        let passenger = self
            .repos
            .passengers
            .find_passenger(&booking.passport_number, booking.id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Passenger for booking {}", booking_id)))?;

        let flight = self
            .repos
            .flights
            .find_flight(&booking.flight_number)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Flight {}", booking.flight_number)))?;

        Ok(BoardingPass::new(&booking, &passenger, &flight))
    }
}
