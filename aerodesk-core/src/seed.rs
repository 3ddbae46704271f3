use chrono::NaiveDate;
use tracing::info;
use crate::models::Flight;
use crate::repository::{FlightRepository, RepoResult};

/// Demo schedule installed into an empty flights collection.
pub fn sample_flights() -> Vec<Flight> {
    let departure = |day: u32, hour: u32| {
        NaiveDate::from_ymd_opt(2024, 12, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap_or_default()
    };

    vec![
        Flight::new("FL001", "New York", "London", departure(1, 10), 100, 50000, "USD"),
        Flight::new("FL002", "London", "Paris", departure(1, 14), 150, 20000, "USD"),
    ]
}

/// Inserts the sample schedule when no flight exists yet. Returns how many
/// flights were added.
pub async fn seed_if_empty(flights: &dyn FlightRepository) -> RepoResult<usize> {
    if flights.count_flights().await? > 0 {
        return Ok(0);
    }

    let sample = sample_flights();
    flights.insert_flights(&sample).await?;
    info!("Seeded {} sample flights", sample.len());
    Ok(sample.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;

    #[tokio::test]
    async fn test_seed_runs_once() {
        let store = InMemoryStore::new();

        assert_eq!(seed_if_empty(&store).await.unwrap(), 2);
        assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
        assert_eq!(store.count_flights().await.unwrap(), 2);
    }

    #[test]
    fn test_sample_schedule() {
        let flights = sample_flights();
        assert_eq!(flights[0].flight_number, "FL001");
        assert_eq!(flights[0].departure_display(), "2024-12-01 10:00:00");
        assert_eq!(flights[1].total_seats, 150);
    }
}
