use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Layout used when a timestamp is shown to a passenger or matched by the date filter.
pub const DISPLAY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_at: NaiveDateTime,
    pub total_seats: i32,
    pub available_seats: i32,
    pub price_amount: i32, // minor units
    pub price_currency: String,
}

impl Flight {
    /// A flight with every seat still available.
    pub fn new(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_at: NaiveDateTime,
        total_seats: i32,
        price_amount: i32,
        price_currency: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            departure_at,
            total_seats,
            available_seats: total_seats,
            price_amount,
            price_currency: price_currency.into(),
        }
    }

    pub fn departure_display(&self) -> String {
        self.departure_at.format(DISPLAY_DATETIME_FORMAT).to_string()
    }

    pub fn has_availability(&self) -> bool {
        self.available_seats > 0
    }
}

/// One passenger record per booking. Repeated bookings with the same
/// passport number produce several records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub passport_number: String,
    pub name: String,
    pub contact_number: String,
    pub created_at: DateTime<Utc>,
}

impl Passenger {
    pub fn new(booking_id: Uuid, passport_number: &str, name: &str, contact_number: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            booking_id,
            passport_number: passport_number.to_string(),
            name: name.to_string(),
            contact_number: contact_number.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub flight_number: String,
    pub passport_number: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(flight_number: &str, passport_number: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            flight_number: flight_number.to_string(),
            passport_number: passport_number.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Booking time in UTC.
    pub fn created_display(&self) -> String {
        self.created_at.format(DISPLAY_DATETIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_flight_starts_fully_available() {
        let departure = NaiveDate::from_ymd_opt(2024, 12, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let flight = Flight::new("FL001", "New York", "London", departure, 100, 50000, "USD");

        assert_eq!(flight.available_seats, 100);
        assert!(flight.has_availability());
        assert_eq!(flight.departure_display(), "2024-12-01 10:00:00");
    }

    #[test]
    fn test_booking_time_rendered_in_utc() {
        use chrono::{FixedOffset, TimeZone};

        let mut booking = Booking::new("FL001", "P123456");
        let local = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 11, 20, 10, 30, 0)
            .unwrap();
        booking.created_at = local.with_timezone(&Utc);

        assert_eq!(booking.created_display(), "2024-11-20 08:30:00");
    }

    #[test]
    fn test_passenger_links_to_booking() {
        let booking = Booking::new("FL001", "P123456");
        let passenger = Passenger::new(booking.id, "P123456", "Ada Lovelace", "555-0100");

        assert_eq!(passenger.booking_id, booking.id);
        assert_eq!(passenger.passport_number, booking.passport_number);
        assert_ne!(passenger.id, booking.id);
    }
}
