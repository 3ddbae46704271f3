use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::models::{Booking, Flight, Passenger};
use crate::repository::{
    BookingRepository, FlightRepository, PassengerRepository, RepoResult,
};
use crate::search::FlightSearchQuery;

#[derive(Debug, Default)]
struct Collections {
    flights: Vec<Flight>,
    passengers: Vec<Passenger>,
    bookings: Vec<Booking>,
}

/// In-process document store. Collections keep insertion order; every
/// mutation happens under one write lock, which makes the conditional seat
/// updates atomic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn remove_flight(&self, flight_number: &str) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.flights.len();
        inner.flights.retain(|f| f.flight_number != flight_number);
        inner.flights.len() != before
    }

    pub async fn remove_passengers(&self, passport_number: &str) -> usize {
        let mut inner = self.inner.write().await;
        let before = inner.passengers.len();
        inner.passengers.retain(|p| p.passport_number != passport_number);
        before - inner.passengers.len()
    }

    pub async fn passenger_count(&self) -> usize {
        self.inner.read().await.passengers.len()
    }

    pub async fn booking_count(&self) -> usize {
        self.inner.read().await.bookings.len()
    }
}

#[async_trait]
impl FlightRepository for InMemoryStore {
    async fn search_flights(&self, query: &FlightSearchQuery) -> RepoResult<Vec<Flight>> {
        let inner = self.inner.read().await;
        Ok(inner
            .flights
            .iter()
            .filter(|f| query.matches(f))
            .cloned()
            .collect())
    }

    async fn find_flight(&self, flight_number: &str) -> RepoResult<Option<Flight>> {
        let inner = self.inner.read().await;
        Ok(inner
            .flights
            .iter()
            .find(|f| f.flight_number == flight_number)
            .cloned())
    }

    async fn reserve_seat(&self, flight_number: &str) -> RepoResult<Option<Flight>> {
        let mut inner = self.inner.write().await;
        let flight = inner
            .flights
            .iter_mut()
            .find(|f| f.flight_number == flight_number && f.available_seats > 0);

        Ok(flight.map(|f| {
            f.available_seats -= 1;
            f.clone()
        }))
    }

    async fn release_seat(&self, flight_number: &str) -> RepoResult<Option<Flight>> {
        let mut inner = self.inner.write().await;
        let flight = inner
            .flights
            .iter_mut()
            .find(|f| f.flight_number == flight_number && f.available_seats < f.total_seats);

        Ok(flight.map(|f| {
            f.available_seats += 1;
            f.clone()
        }))
    }

    async fn insert_flights(&self, flights: &[Flight]) -> RepoResult<()> {
        let mut inner = self.inner.write().await;
        for flight in flights {
            if inner.flights.iter().any(|f| f.flight_number == flight.flight_number) {
                return Err(format!("duplicate flight number {}", flight.flight_number).into());
            }
            if flight.available_seats < 0 || flight.available_seats > flight.total_seats {
                return Err(format!(
                    "flight {} has {} of {} seats available",
                    flight.flight_number, flight.available_seats, flight.total_seats
                )
                .into());
            }
        }
        inner.flights.extend_from_slice(flights);
        Ok(())
    }

    async fn count_flights(&self) -> RepoResult<u64> {
        Ok(self.inner.read().await.flights.len() as u64)
    }
}

#[async_trait]
impl PassengerRepository for InMemoryStore {
    async fn insert_passenger(&self, passenger: &Passenger) -> RepoResult<()> {
        self.inner.write().await.passengers.push(passenger.clone());
        Ok(())
    }

    async fn find_passenger(
        &self,
        passport_number: &str,
        booking_id: Uuid,
    ) -> RepoResult<Option<Passenger>> {
        let inner = self.inner.read().await;
        let own = inner
            .passengers
            .iter()
            .find(|p| p.passport_number == passport_number && p.booking_id == booking_id);
        let oldest = inner
            .passengers
            .iter()
            .find(|p| p.passport_number == passport_number);

        Ok(own.or(oldest).cloned())
    }

    async fn delete_passengers_for_booking(&self, booking_id: Uuid) -> RepoResult<u64> {
        let mut inner = self.inner.write().await;
        let before = inner.passengers.len();
        inner.passengers.retain(|p| p.booking_id != booking_id);
        Ok((before - inner.passengers.len()) as u64)
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn insert_booking(&self, booking: &Booking) -> RepoResult<()> {
        self.inner.write().await.bookings.push(booking.clone());
        Ok(())
    }

    async fn find_booking(&self, id: Uuid) -> RepoResult<Option<Booking>> {
        let inner = self.inner.read().await;
        Ok(inner.bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn find_bookings_by_passport(&self, passport_number: &str) -> RepoResult<Vec<Booking>> {
        let inner = self.inner.read().await;
        Ok(inner
            .bookings
            .iter()
            .filter(|b| b.passport_number == passport_number)
            .cloned()
            .collect())
    }

    async fn delete_booking(&self, id: Uuid) -> RepoResult<Option<Booking>> {
        let mut inner = self.inner.write().await;
        let position = inner.bookings.iter().position(|b| b.id == id);
        Ok(position.map(|idx| inner.bookings.remove(idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn flight(number: &str, seats: i32) -> Flight {
        let departure = NaiveDate::from_ymd_opt(2024, 12, 1)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        Flight::new(number, "London", "Paris", departure, seats, 20000, "USD")
    }

    #[tokio::test]
    async fn test_reserve_stops_at_zero() {
        let store = InMemoryStore::new();
        store.insert_flights(&[flight("FL002", 1)]).await.unwrap();

        let taken = store.reserve_seat("FL002").await.unwrap();
        assert_eq!(taken.unwrap().available_seats, 0);
        assert!(store.reserve_seat("FL002").await.unwrap().is_none());
        assert!(store.reserve_seat("FL404").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_release_stops_at_total() {
        let store = InMemoryStore::new();
        store.insert_flights(&[flight("FL002", 2)]).await.unwrap();

        assert!(store.release_seat("FL002").await.unwrap().is_none());
        store.reserve_seat("FL002").await.unwrap();
        let released = store.release_seat("FL002").await.unwrap().unwrap();
        assert_eq!(released.available_seats, 2);
    }

    #[tokio::test]
    async fn test_duplicate_flight_number_rejected() {
        let store = InMemoryStore::new();
        store.insert_flights(&[flight("FL002", 2)]).await.unwrap();

        assert!(store.insert_flights(&[flight("FL002", 5)]).await.is_err());
        assert_eq!(store.count_flights().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_passenger_prefers_own_booking() {
        let store = InMemoryStore::new();
        let first = Passenger::new(Uuid::new_v4(), "P1", "First Name", "1");
        let second = Passenger::new(Uuid::new_v4(), "P1", "Second Name", "2");
        store.insert_passenger(&first).await.unwrap();
        store.insert_passenger(&second).await.unwrap();

        let own = store.find_passenger("P1", second.booking_id).await.unwrap();
        assert_eq!(own.unwrap().name, "Second Name");

        let fallback = store.find_passenger("P1", Uuid::new_v4()).await.unwrap();
        assert_eq!(fallback.unwrap().name, "First Name");
    }

    #[tokio::test]
    async fn test_delete_booking_returns_removed_record() {
        let store = InMemoryStore::new();
        let booking = Booking::new("FL002", "P1");
        store.insert_booking(&booking).await.unwrap();

        let removed = store.delete_booking(booking.id).await.unwrap();
        assert_eq!(removed, Some(booking.clone()));
        assert!(store.delete_booking(booking.id).await.unwrap().is_none());
    }
}
