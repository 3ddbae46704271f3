pub mod models;
pub mod search;
pub mod repository;
pub mod catalog;
pub mod booking;
pub mod lookup;
pub mod boarding_pass;
pub mod memory;
pub mod seed;

pub use boarding_pass::BoardingPass;
pub use booking::{BookingService, NewBooking};
pub use catalog::FlightCatalog;
pub use lookup::BookingLookup;
pub use memory::InMemoryStore;
pub use models::{Booking, Flight, Passenger};
pub use repository::Repositories;
pub use search::FlightSearchQuery;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("No available seats for flight {0}")]
    NoAvailability(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<repository::RepoError> for CoreError {
    fn from(err: repository::RepoError) -> Self {
        CoreError::StorageUnavailable(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
