//! ZIP3 reference data and mileage table

use async_trait::async_trait;
use movecost_core::{models::Zip3Reference, traits::ZipRepository, AppError, AppResult};
use sqlx::PgPool;
use tracing::{error, instrument};

use super::exactly_one;

/// PostgreSQL implementation of ZipRepository
pub struct PgZipRepository {
    pool: PgPool,
}

impl PgZipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ZipRepository for PgZipRepository {
    #[instrument(skip(self))]
    async fn zip3_reference(&self, zip3: &str) -> AppResult<Zip3Reference> {
        let rows = sqlx::query_as::<sqlx::Postgres, Zip3Row>(
            r#"
            SELECT zip3, basepoint_city, state, service_area, rate_area, region
            FROM tariff400ng_zip3s
            WHERE zip3 = $1
            LIMIT 2
            "#,
        )
        .bind(zip3)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error fetching zip3 {}: {}", zip3, e);
            AppError::Database(format!("Failed to fetch zip3 reference: {}", e))
        })?;

        let row = exactly_one(rows, || format!("zip3 reference {}", zip3))?;
        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn zip3_distance(&self, from_zip3: &str, to_zip3: &str) -> AppResult<i64> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT distance_miles
            FROM zip3_distances
            WHERE from_zip3 = $1 AND to_zip3 = $2
            LIMIT 2
            "#,
        )
        .bind(from_zip3)
        .bind(to_zip3)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error fetching zip3 distance: {}", e);
            AppError::Database(format!("Failed to fetch zip3 distance: {}", e))
        })?;

        let (miles,) = exactly_one(rows, || {
            format!("zip3 distance {} -> {}", from_zip3, to_zip3)
        })?;
        Ok(miles)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct Zip3Row {
    zip3: String,
    basepoint_city: String,
    state: String,
    service_area: String,
    rate_area: String,
    region: String,
}

impl From<Zip3Row> for Zip3Reference {
    fn from(row: Zip3Row) -> Self {
        Self {
            zip3: row.zip3,
            base_point_city: row.basepoint_city,
            state: row.state,
            service_area: row.service_area,
            rate_area: row.rate_area,
            region: row.region,
        }
    }
}
