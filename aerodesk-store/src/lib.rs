pub mod app_config;
pub mod database;
pub mod flight_repo;
pub mod passenger_repo;
pub mod booking_repo;

pub use database::DbClient;

use aerodesk_core::{InMemoryStore, Repositories};
use app_config::{Config, StoreBackend};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database connection failed: {0}")]
    Connection(#[from] sqlx::Error),
    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Seeding sample data failed: {0}")]
    Seed(String),
}

/// Opens the configured backend, applies migrations and seeds the sample
/// schedule when enabled.
pub async fn open_repositories(config: &Config) -> Result<Repositories, StoreError> {
    let repos = match config.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory store");
            Repositories::from_store(InMemoryStore::new())
        }
        StoreBackend::Postgres => {
            let db = DbClient::new(&config.database).await?;
            db.migrate().await?;
            db.repositories()
        }
    };

    if config.store.seed_sample_data {
        aerodesk_core::seed::seed_if_empty(repos.flights.as_ref())
            .await
            .map_err(|e| StoreError::Seed(e.to_string()))?;
    }

    Ok(repos)
}
