use aerodesk_core::{BookingLookup, BookingService, FlightCatalog, Repositories};

#[derive(Clone)]
pub struct AppState {
    pub catalog: FlightCatalog,
    pub bookings: BookingService,
    pub lookup: BookingLookup,
}

impl AppState {
    pub fn new(repos: Repositories) -> Self {
        Self {
            catalog: FlightCatalog::new(repos.flights.clone()),
            bookings: BookingService::new(repos.clone()),
            lookup: BookingLookup::new(repos),
        }
    }
}
