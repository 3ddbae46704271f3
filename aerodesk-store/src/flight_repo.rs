use aerodesk_core::models::Flight;
use aerodesk_core::repository::{FlightRepository, RepoResult};
use aerodesk_core::search::FlightSearchQuery;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

const FLIGHT_COLUMNS: &str = "flight_number, origin, destination, departure_at, total_seats, \
                              available_seats, price_amount, price_currency";

pub struct PostgresFlightRepository {
    pool: PgPool,
}

impl PostgresFlightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FlightRow {
    flight_number: String,
    origin: String,
    destination: String,
    departure_at: NaiveDateTime,
    total_seats: i32,
    available_seats: i32,
    price_amount: i32,
    price_currency: String,
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Flight {
            flight_number: row.flight_number,
            origin: row.origin,
            destination: row.destination,
            departure_at: row.departure_at,
            total_seats: row.total_seats,
            available_seats: row.available_seats,
            price_amount: row.price_amount,
            price_currency: row.price_currency,
        }
    }
}

/// `%needle%` for ILIKE, with the LIKE wildcards in the needle escaped so the
/// filter stays a literal substring match.
pub(crate) fn contains_pattern(needle: Option<&str>) -> Option<String> {
    needle.map(|n| {
        let mut escaped = String::with_capacity(n.len() + 2);
        escaped.push('%');
        for c in n.chars() {
            if matches!(c, '\\' | '%' | '_') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped.push('%');
        escaped
    })
}

#[async_trait]
impl FlightRepository for PostgresFlightRepository {
    async fn search_flights(&self, query: &FlightSearchQuery) -> RepoResult<Vec<Flight>> {
        let query = query.clone().normalized();
        let sql = format!(
            r#"
            SELECT {FLIGHT_COLUMNS}
            FROM flights
            WHERE ($1::text IS NULL OR origin ILIKE $1)
              AND ($2::text IS NULL OR destination ILIKE $2)
              AND ($3::text IS NULL OR to_char(departure_at, 'YYYY-MM-DD HH24:MI:SS') ILIKE $3)
            ORDER BY seq
            "#
        );

        let rows = sqlx::query_as::<_, FlightRow>(&sql)
            .bind(contains_pattern(query.origin.as_deref()))
            .bind(contains_pattern(query.destination.as_deref()))
            .bind(contains_pattern(query.date.as_deref()))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }

    async fn find_flight(&self, flight_number: &str) -> RepoResult<Option<Flight>> {
        let sql = format!("SELECT {FLIGHT_COLUMNS} FROM flights WHERE flight_number = $1");
        let row = sqlx::query_as::<_, FlightRow>(&sql)
            .bind(flight_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Flight::from))
    }

    async fn reserve_seat(&self, flight_number: &str) -> RepoResult<Option<Flight>> {
        let sql = format!(
            r#"
            UPDATE flights SET available_seats = available_seats - 1
            WHERE flight_number = $1 AND available_seats > 0
            RETURNING {FLIGHT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, FlightRow>(&sql)
            .bind(flight_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Flight::from))
    }

    async fn release_seat(&self, flight_number: &str) -> RepoResult<Option<Flight>> {
        let sql = format!(
            r#"
            UPDATE flights SET available_seats = available_seats + 1
            WHERE flight_number = $1 AND available_seats < total_seats
            RETURNING {FLIGHT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, FlightRow>(&sql)
            .bind(flight_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Flight::from))
    }

    async fn insert_flights(&self, flights: &[Flight]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await?;

        for flight in flights {
            sqlx::query(
                r#"
                INSERT INTO flights (flight_number, origin, destination, departure_at, total_seats, available_seats, price_amount, price_currency)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(&flight.flight_number)
            .bind(&flight.origin)
            .bind(&flight.destination)
            .bind(flight.departure_at)
            .bind(flight.total_seats)
            .bind(flight.available_seats)
            .bind(flight.price_amount)
            .bind(&flight.price_currency)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn count_flights(&self) -> RepoResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM flights")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern(Some("London")).as_deref(), Some("%London%"));
        assert_eq!(contains_pattern(Some("50%_off")).as_deref(), Some("%50\\%\\_off%"));
        assert_eq!(contains_pattern(Some("a\\b")).as_deref(), Some("%a\\\\b%"));
        assert_eq!(contains_pattern(None), None);
    }
}
