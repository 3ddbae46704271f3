use aerodesk_core::models::Passenger;
use aerodesk_core::repository::{PassengerRepository, RepoResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresPassengerRepository {
    pool: PgPool,
}

impl PostgresPassengerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PassengerRow {
    id: Uuid,
    booking_id: Uuid,
    passport_number: String,
    name: String,
    contact_number: String,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl PassengerRepository for PostgresPassengerRepository {
    async fn insert_passenger(&self, passenger: &Passenger) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO passengers (id, booking_id, passport_number, name, contact_number, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(passenger.id)
        .bind(passenger.booking_id)
        .bind(&passenger.passport_number)
        .bind(&passenger.name)
        .bind(&passenger.contact_number)
        .bind(passenger.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_passenger(
        &self,
        passport_number: &str,
        booking_id: Uuid,
    ) -> RepoResult<Option<Passenger>> {
        let row = sqlx::query_as::<_, PassengerRow>(
            r#"
            SELECT id, booking_id, passport_number, name, contact_number, created_at
            FROM passengers
            WHERE passport_number = $1
            ORDER BY (booking_id = $2) DESC, seq
            LIMIT 1
            "#,
        )
        .bind(passport_number)
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| Passenger {
            id: r.id,
            booking_id: r.booking_id,
            passport_number: r.passport_number,
            name: r.name,
            contact_number: r.contact_number,
            created_at: r.created_at,
        }))
    }

    async fn delete_passengers_for_booking(&self, booking_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM passengers WHERE booking_id = $1")
            .bind(booking_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
