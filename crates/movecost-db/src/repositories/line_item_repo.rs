//! Shipment line item repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use movecost_core::{
    models::{BaseQuantity, Cents, LineItemStatus, Millicents, ShipmentLineItem},
    traits::LineItemRepository,
    AppError, AppResult,
};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use uuid::Uuid;

use super::rows::{parse_location, ItemRow, ITEM_COLUMNS};

/// PostgreSQL implementation of LineItemRepository
pub struct PgLineItemRepository {
    pool: PgPool,
}

impl PgLineItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Columns matching [`LineItemRow`], for aliases `li` and `t`
pub(crate) fn line_item_columns() -> String {
    format!(
        "li.id, li.shipment_id, li.quantity_1, li.quantity_2, li.location, li.status, \
         li.amount_cents, li.applied_rate, li.invoice_id, li.submitted_date, li.approved_date, \
         li.created_at, li.updated_at, {}",
        ITEM_COLUMNS
    )
}

#[async_trait]
impl LineItemRepository for PgLineItemRepository {
    #[instrument(skip(self))]
    async fn find_by_shipment(&self, shipment_id: Uuid) -> AppResult<Vec<ShipmentLineItem>> {
        let query = format!(
            r#"
            SELECT {}
            FROM shipment_line_items li
            JOIN tariff400ng_items t ON t.id = li.tariff400ng_item_id
            WHERE li.shipment_id = $1
            ORDER BY li.created_at
            "#,
            line_item_columns()
        );

        let rows = sqlx::query_as::<sqlx::Postgres, LineItemRow>(&query)
            .bind(shipment_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error fetching line items for {}: {}", shipment_id, e);
                AppError::Database(format!("Failed to fetch line items: {}", e))
            })?;

        debug!("Found {} line items", rows.len());
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct LineItemRow {
    id: Uuid,
    shipment_id: Uuid,
    quantity_1: i64,
    quantity_2: i64,
    location: String,
    status: String,
    amount_cents: Option<i64>,
    applied_rate: Option<i64>,
    invoice_id: Option<Uuid>,
    submitted_date: DateTime<Utc>,
    approved_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    item: ItemRow,
}

impl From<LineItemRow> for ShipmentLineItem {
    fn from(row: LineItemRow) -> Self {
        Self {
            id: row.id,
            shipment_id: row.shipment_id,
            item: row.item.into(),
            quantity_1: BaseQuantity(row.quantity_1),
            quantity_2: BaseQuantity(row.quantity_2),
            location: parse_location(&row.location),
            status: LineItemStatus::from_str(&row.status).unwrap_or_default(),
            amount: row.amount_cents.map(Cents),
            applied_rate: row.applied_rate.map(Millicents),
            invoice_id: row.invoice_id,
            submitted_date: row.submitted_date,
            approved_date: row.approved_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
