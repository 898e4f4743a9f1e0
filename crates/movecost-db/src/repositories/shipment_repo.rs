//! Shipment repository implementation
//!
//! A shipment is loaded together with its pickup and destination addresses
//! and the performance record of the carrier whose offer was accepted.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use movecost_core::{
    models::{
        Address, DiscountRate, Pound, Shipment, ShipmentLineItem, ShipmentStatus, TspPerformance,
        BASE_LINE_ITEM_CODES,
    },
    traits::ShipmentRepository,
    AppError, AppResult,
};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// PostgreSQL implementation of ShipmentRepository
pub struct PgShipmentRepository {
    pool: PgPool,
}

const SHIPMENT_SELECT: &str = r#"
    SELECT
        s.id, s.status, s.book_date, s.actual_pickup_date, s.actual_delivery_date,
        s.net_weight, s.created_at, s.updated_at,
        pa.id AS pickup_id, pa.street_address_1 AS pickup_street_1,
        pa.street_address_2 AS pickup_street_2, pa.city AS pickup_city,
        pa.state AS pickup_state, pa.postal_code AS pickup_postal_code,
        da.id AS destination_id, da.street_address_1 AS destination_street_1,
        da.street_address_2 AS destination_street_2, da.city AS destination_city,
        da.state AS destination_state, da.postal_code AS destination_postal_code,
        tp.id AS tsp_performance_id, tp.linehaul_rate, tp.sit_rate
    FROM shipments s
    LEFT JOIN addresses pa ON pa.id = s.pickup_address_id
    LEFT JOIN addresses da ON da.id = s.destination_address_id
    LEFT JOIN shipment_offers so ON so.shipment_id = s.id AND so.accepted = TRUE
    LEFT JOIN transportation_service_provider_performances tp
        ON tp.id = so.transportation_service_provider_performance_id
"#;

impl PgShipmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn parse_status(s: &str) -> ShipmentStatus {
        ShipmentStatus::from_str(s).unwrap_or_else(|| {
            warn!("Unknown shipment status {}", s);
            ShipmentStatus::Draft
        })
    }

    async fn delete_base_line_items(
        tx: &mut Transaction<'_, Postgres>,
        shipment_id: Uuid,
    ) -> AppResult<u64> {
        let codes: Vec<String> = BASE_LINE_ITEM_CODES.iter().map(|c| c.to_string()).collect();

        let result = sqlx::query(
            r#"
            DELETE FROM shipment_line_items li
            USING tariff400ng_items t
            WHERE t.id = li.tariff400ng_item_id
              AND li.shipment_id = $1
              AND t.code = ANY($2)
            "#,
        )
        .bind(shipment_id)
        .bind(&codes)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            error!("Database error deleting base line items: {}", e);
            AppError::Database(format!("Failed to delete base line items: {}", e))
        })?;

        Ok(result.rows_affected())
    }

    async fn insert_line_item(
        tx: &mut Transaction<'_, Postgres>,
        item: &ShipmentLineItem,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO shipment_line_items (
                id, shipment_id, tariff400ng_item_id, quantity_1, quantity_2,
                location, status, amount_cents, applied_rate, invoice_id,
                submitted_date, approved_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(item.id)
        .bind(item.shipment_id)
        .bind(item.item.id)
        .bind(item.quantity_1.0)
        .bind(item.quantity_2.0)
        .bind(item.location.to_string())
        .bind(item.status.to_string())
        .bind(item.amount.map(|a| a.as_i64()))
        .bind(item.applied_rate.map(|r| r.as_i64()))
        .bind(item.invoice_id)
        .bind(item.submitted_date)
        .bind(item.approved_date)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            error!("Database error inserting line item {}: {}", item.item.code, e);
            AppError::Database(format!("Failed to insert line item: {}", e))
        })?;

        Ok(())
    }

    async fn update_line_item(
        tx: &mut Transaction<'_, Postgres>,
        item: &ShipmentLineItem,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE shipment_line_items
            SET quantity_1 = $2,
                quantity_2 = $3,
                status = $4,
                amount_cents = $5,
                applied_rate = $6,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(item.id)
        .bind(item.quantity_1.0)
        .bind(item.quantity_2.0)
        .bind(item.status.to_string())
        .bind(item.amount.map(|a| a.as_i64()))
        .bind(item.applied_rate.map(|r| r.as_i64()))
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            error!("Database error updating line item {}: {}", item.id, e);
            AppError::Database(format!("Failed to update line item: {}", e))
        })?;

        Ok(())
    }
}

#[async_trait]
impl ShipmentRepository for PgShipmentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Shipment>> {
        let query = format!("{} WHERE s.id = $1", SHIPMENT_SELECT);

        let result = sqlx::query_as::<sqlx::Postgres, ShipmentRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error finding shipment {}: {}", id, e);
                AppError::Database(format!("Failed to find shipment: {}", e))
            })?;

        Ok(result.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn find_priced_created_between(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
        limit: i64,
    ) -> AppResult<Vec<Shipment>> {
        let query = format!(
            r#"{}
            WHERE s.status IN ('DELIVERED', 'COMPLETED')
              AND s.created_at >= $1 AND s.created_at < $2
            ORDER BY s.created_at
            LIMIT $3
            "#,
            SHIPMENT_SELECT
        );

        let rows = sqlx::query_as::<sqlx::Postgres, ShipmentRow>(&query)
            .bind(after)
            .bind(before)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error finding shipments to recalculate: {}", e);
                AppError::Database(format!("Failed to fetch shipments: {}", e))
            })?;

        debug!("Found {} priced shipments in window", rows.len());
        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Uuid, status: ShipmentStatus) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE shipments SET status = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(status.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error updating shipment {} status: {}", id, e);
            AppError::Database(format!("Failed to update shipment status: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::ShipmentNotFound(id.to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self, shipment, base_items, updated_items), fields(shipment_id = %shipment.id))]
    async fn save_shipment_and_line_items(
        &self,
        shipment: &Shipment,
        base_items: &[ShipmentLineItem],
        updated_items: &[ShipmentLineItem],
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            AppError::Transaction(format!("Failed to start transaction: {}", e))
        })?;

        let result = sqlx::query(
            r#"
            UPDATE shipments
            SET status = $2,
                actual_pickup_date = $3,
                actual_delivery_date = $4,
                net_weight = $5,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(shipment.id)
        .bind(shipment.status.to_string())
        .bind(shipment.actual_pickup_date)
        .bind(shipment.actual_delivery_date)
        .bind(shipment.net_weight.map(|w| w.as_i64()))
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("Database error saving shipment {}: {}", shipment.id, e);
            AppError::Database(format!("Failed to save shipment: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::ShipmentNotFound(shipment.id.to_string()));
        }

        let removed = Self::delete_base_line_items(&mut tx, shipment.id).await?;
        if removed > 0 {
            debug!("Replacing {} base line items", removed);
        }
        for item in base_items {
            Self::insert_line_item(&mut tx, item).await?;
        }
        for item in updated_items {
            Self::update_line_item(&mut tx, item).await?;
        }

        tx.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            AppError::Transaction(format!("Failed to commit transaction: {}", e))
        })?;

        info!(
            "Saved shipment {} with {} base and {} updated line items",
            shipment.id,
            base_items.len(),
            updated_items.len()
        );
        Ok(())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ShipmentRow {
    id: Uuid,
    status: String,
    book_date: Option<NaiveDate>,
    actual_pickup_date: Option<NaiveDate>,
    actual_delivery_date: Option<NaiveDate>,
    net_weight: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    pickup_id: Option<Uuid>,
    pickup_street_1: Option<String>,
    pickup_street_2: Option<String>,
    pickup_city: Option<String>,
    pickup_state: Option<String>,
    pickup_postal_code: Option<String>,
    destination_id: Option<Uuid>,
    destination_street_1: Option<String>,
    destination_street_2: Option<String>,
    destination_city: Option<String>,
    destination_state: Option<String>,
    destination_postal_code: Option<String>,
    tsp_performance_id: Option<Uuid>,
    linehaul_rate: Option<Decimal>,
    sit_rate: Option<Decimal>,
}

fn joined_address(
    id: Option<Uuid>,
    street_1: Option<String>,
    street_2: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
) -> Option<Address> {
    id.map(|id| Address {
        id: Some(id),
        street_address_1: street_1.unwrap_or_default(),
        street_address_2: street_2,
        city: city.unwrap_or_default(),
        state: state.unwrap_or_default(),
        postal_code: postal_code.unwrap_or_default(),
    })
}

impl From<ShipmentRow> for Shipment {
    fn from(row: ShipmentRow) -> Self {
        let tsp_performance = match (row.tsp_performance_id, row.linehaul_rate, row.sit_rate) {
            (Some(id), Some(linehaul), Some(sit)) => Some(TspPerformance {
                id,
                linehaul_rate: DiscountRate::new(linehaul),
                sit_rate: DiscountRate::new(sit),
            }),
            _ => None,
        };

        Self {
            id: row.id,
            status: PgShipmentRepository::parse_status(&row.status),
            book_date: row.book_date,
            actual_pickup_date: row.actual_pickup_date,
            actual_delivery_date: row.actual_delivery_date,
            net_weight: row.net_weight.map(Pound),
            pickup_address: joined_address(
                row.pickup_id,
                row.pickup_street_1,
                row.pickup_street_2,
                row.pickup_city,
                row.pickup_state,
                row.pickup_postal_code,
            ),
            destination_address: joined_address(
                row.destination_id,
                row.destination_street_1,
                row.destination_street_2,
                row.destination_city,
                row.destination_state,
                row.destination_postal_code,
            ),
            tsp_performance,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
