use serde::Serialize;
use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;
use crate::models::{Booking, Flight, Passenger, DISPLAY_DATETIME_FORMAT};

/// Read-only join of a booking with its passenger and flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardingPass {
    pub booking_id: Uuid,
    pub passenger_name: String,
    pub passport_number: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_at: NaiveDateTime,
    pub booked_at: DateTime<Utc>,
}

impl BoardingPass {
    pub fn new(booking: &Booking, passenger: &Passenger, flight: &Flight) -> Self {
        Self {
            booking_id: booking.id,
            passenger_name: passenger.name.clone(),
            passport_number: booking.passport_number.clone(),
            flight_number: flight.flight_number.clone(),
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            departure_at: flight.departure_at,
            booked_at: booking.created_at,
        }
    }

    /// Printable pass, one field per line.
    pub fn render(&self) -> String {
        format!(
            "Boarding Pass\n\n\
             Passenger Name: {}\n\
             Passport Number: {}\n\
             Flight Number: {}\n\
             Origin: {}\n\
             Destination: {}\n\
             Departure Date: {}\n\n\
             Booking Date: {}",
            self.passenger_name,
            self.passport_number,
            self.flight_number,
            self.origin,
            self.destination,
            self.departure_at.format(DISPLAY_DATETIME_FORMAT),
            self.booked_at.format(DISPLAY_DATETIME_FORMAT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_render_layout() {
        let departure = NaiveDate::from_ymd_opt(2024, 12, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let flight = Flight::new("FL001", "New York", "London", departure, 100, 50000, "USD");
        let mut booking = Booking::new("FL001", "P123");
        booking.created_at = Utc.with_ymd_and_hms(2024, 11, 20, 8, 30, 5).unwrap();
        let passenger = Passenger::new(booking.id, "P123", "Ada Lovelace", "555-0100");

        let pass = BoardingPass::new(&booking, &passenger, &flight);

        assert_eq!(
            pass.render(),
            "Boarding Pass\n\n\
             Passenger Name: Ada Lovelace\n\
             Passport Number: P123\n\
             Flight Number: FL001\n\
             Origin: New York\n\
             Destination: London\n\
             Departure Date: 2024-12-01 10:00:00\n\n\
             Booking Date: 2024-11-20 08:30:05"
        );
    }
}
