use std::sync::Arc;
use tracing::debug;
use crate::models::Flight;
use crate::repository::FlightRepository;
use crate::search::FlightSearchQuery;
use crate::{CoreError, CoreResult};

/// Read-only access to the flight schedule.
#[derive(Clone)]
pub struct FlightCatalog {
    flights: Arc<dyn FlightRepository>,
}

impl FlightCatalog {
    pub fn new(flights: Arc<dyn FlightRepository>) -> Self {
        Self { flights }
    }

    pub async fn search_flights(&self, query: FlightSearchQuery) -> CoreResult<Vec<Flight>> {
        let query = query.normalized();
        let flights = self.flights.search_flights(&query).await?;
        debug!(?query, matches = flights.len(), "Flight search");
        Ok(flights)
    }

    /// Every flight number, in schedule order.
    pub async fn list_flight_numbers(&self) -> CoreResult<Vec<String>> {
        let flights = self.flights.search_flights(&FlightSearchQuery::default()).await?;
        Ok(flights.into_iter().map(|f| f.flight_number).collect())
    }

    pub async fn get_flight(&self, flight_number: &str) -> CoreResult<Flight> {
        self.flights
            .find_flight(flight_number.trim())
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Flight {}", flight_number.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use crate::seed::seed_if_empty;

    async fn seeded_catalog() -> FlightCatalog {
        let store = InMemoryStore::new();
        seed_if_empty(&store).await.unwrap();
        FlightCatalog::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_search_new_york_to_london() {
        let catalog = seeded_catalog().await;

        let flights = catalog
            .search_flights(FlightSearchQuery::new("New York", "London", ""))
            .await
            .unwrap();

        assert_eq!(flights.len(), 1);
        let flight = &flights[0];
        assert_eq!(flight.flight_number, "FL001");
        assert_eq!(flight.available_seats, 100);
        assert_eq!(flight.total_seats, 100);
        assert_eq!(flight.price_amount, 50000);
    }

    #[tokio::test]
    async fn test_unfiltered_search_keeps_storage_order() {
        let catalog = seeded_catalog().await;

        let flights = catalog.search_flights(FlightSearchQuery::default()).await.unwrap();
        let numbers: Vec<_> = flights.iter().map(|f| f.flight_number.as_str()).collect();
        assert_eq!(numbers, vec!["FL001", "FL002"]);

        assert_eq!(catalog.list_flight_numbers().await.unwrap(), vec!["FL001", "FL002"]);
    }

    #[tokio::test]
    async fn test_search_is_restartable() {
        let catalog = seeded_catalog().await;
        let query = FlightSearchQuery::new("", "", "2024-12-01");

        let first = catalog.search_flights(query.clone()).await.unwrap();
        let second = catalog.search_flights(query).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn test_get_flight_not_found() {
        let catalog = seeded_catalog().await;

        assert_eq!(catalog.get_flight(" FL002 ").await.unwrap().destination, "Paris");
        assert!(matches!(
            catalog.get_flight("FL999").await,
            Err(CoreError::NotFound(_))
        ));
    }
}
