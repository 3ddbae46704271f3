use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use aerodesk_core::Repositories;
use crate::app_config::DatabaseConfig;
use crate::booking_repo::PostgresBookingRepository;
use crate::flight_repo::PostgresFlightRepository;
use crate::passenger_repo::PostgresPassengerRepository;

#[derive(Clone)]
pub struct DbClient {
    pub pool: Pool<Postgres>,
}

impl DbClient {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        info!("Connected to database (max {} connections)", config.max_connections);
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("../migrations")
            .run(&self.pool)
            .await?;
        info!("Migrations completed successfully.");
        Ok(())
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            flights: Arc::new(PostgresFlightRepository::new(self.pool.clone())),
            passengers: Arc::new(PostgresPassengerRepository::new(self.pool.clone())),
            bookings: Arc::new(PostgresBookingRepository::new(self.pool.clone())),
        }
    }
}
