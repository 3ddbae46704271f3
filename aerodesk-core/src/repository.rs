use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use crate::models::{Booking, Flight, Passenger};
use crate::search::FlightSearchQuery;

pub type RepoError = Box<dyn std::error::Error + Send + Sync>;
pub type RepoResult<T> = Result<T, RepoError>;

/// Repository trait for the flights collection
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Flights matching the query, in insertion order.
    async fn search_flights(&self, query: &FlightSearchQuery) -> RepoResult<Vec<Flight>>;

    async fn find_flight(&self, flight_number: &str) -> RepoResult<Option<Flight>>;

    /// Takes one seat only if `available_seats > 0`, as a single atomic step.
    /// Returns the updated flight, or `None` when nothing was taken
    /// (flight missing or sold out).
    async fn reserve_seat(&self, flight_number: &str) -> RepoResult<Option<Flight>>;

    /// Gives one seat back only if `available_seats < total_seats`.
    /// Returns the updated flight, or `None` when nothing changed.
    async fn release_seat(&self, flight_number: &str) -> RepoResult<Option<Flight>>;

    async fn insert_flights(&self, flights: &[Flight]) -> RepoResult<()>;

    async fn count_flights(&self) -> RepoResult<u64>;
}

/// Repository trait for the passengers collection
#[async_trait]
pub trait PassengerRepository: Send + Sync {
    async fn insert_passenger(&self, passenger: &Passenger) -> RepoResult<()>;

    /// Passenger for a booking's passport number. The record created by
    /// `booking_id` wins; otherwise the oldest record with that passport.
    async fn find_passenger(
        &self,
        passport_number: &str,
        booking_id: Uuid,
    ) -> RepoResult<Option<Passenger>>;

    async fn delete_passengers_for_booking(&self, booking_id: Uuid) -> RepoResult<u64>;
}

/// Repository trait for the bookings collection
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert_booking(&self, booking: &Booking) -> RepoResult<()>;

    async fn find_booking(&self, id: Uuid) -> RepoResult<Option<Booking>>;

    async fn find_bookings_by_passport(&self, passport_number: &str) -> RepoResult<Vec<Booking>>;

    async fn delete_booking(&self, id: Uuid) -> RepoResult<Option<Booking>>;
}

/// The three collections a store backend has to provide.
#[derive(Clone)]
pub struct Repositories {
    pub flights: Arc<dyn FlightRepository>,
    pub passengers: Arc<dyn PassengerRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}

impl Repositories {
    /// Uses one backend value for every collection.
    pub fn from_store<S>(store: S) -> Self
    where
        S: FlightRepository + PassengerRepository + BookingRepository + 'static,
    {
        let store = Arc::new(store);
        Self {
            flights: store.clone(),
            passengers: store.clone(),
            bookings: store,
        }
    }
}
