//! Recalculation window and audit log repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use movecost_core::{
    models::{ShipmentRecalculate, ShipmentRecalculateLog},
    traits::RecalculateRepository,
    AppError, AppResult,
};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use uuid::Uuid;

/// PostgreSQL implementation of RecalculateRepository
pub struct PgRecalculateRepository {
    pool: PgPool,
}

impl PgRecalculateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecalculateRepository for PgRecalculateRepository {
    /// Most recently updated active window
    #[instrument(skip(self))]
    async fn fetch_active_window(&self) -> AppResult<Option<ShipmentRecalculate>> {
        let result = sqlx::query_as::<sqlx::Postgres, RecalculateRow>(
            r#"
            SELECT id, shipment_updated_after, shipment_updated_before, active,
                   created_at, updated_at
            FROM shipment_recalculates
            WHERE active = TRUE
            ORDER BY updated_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error fetching recalculation window: {}", e);
            AppError::Database(format!("Failed to fetch recalculation window: {}", e))
        })?;

        Ok(result.map(Into::into))
    }

    #[instrument(skip(self, log), fields(shipment_id = %log.shipment_id))]
    async fn create_log(&self, log: &ShipmentRecalculateLog) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO shipment_recalculate_logs (id, shipment_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(log.id)
        .bind(log.shipment_id)
        .bind(log.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error writing recalculation log: {}", e);
            AppError::Database(format!("Failed to create recalculation log: {}", e))
        })?;

        debug!("Recorded recalculation of shipment {}", log.shipment_id);
        Ok(())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RecalculateRow {
    id: Uuid,
    shipment_updated_after: DateTime<Utc>,
    shipment_updated_before: DateTime<Utc>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RecalculateRow> for ShipmentRecalculate {
    fn from(row: RecalculateRow) -> Self {
        Self {
            id: row.id,
            shipment_updated_after: row.shipment_updated_after,
            shipment_updated_before: row.shipment_updated_before,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
