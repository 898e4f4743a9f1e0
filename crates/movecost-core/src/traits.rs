//! Common traits for repositories
//!
//! Defines the persistence boundary consumed by the rate engine, the route
//! planners and the shipment services. Every tariff lookup takes an as-of
//! date and resolves to the single row whose effective range contains it,
//! or fails with `AppError::NotFound`; it never defaults.

use crate::error::AppError;
use crate::models::{
    Cents, DiscountRate, ItemRate, Millicents, Pound, ServiceArea, Shipment, ShipmentLineItem,
    ShipmentRecalculate, ShipmentRecalculateLog, ShipmentStatus, Tariff400ngItem, Zip3Reference,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Tariff 400NG rate tables
#[async_trait]
pub trait TariffRepository: Send + Sync {
    /// Base linehaul rate for a mileage and weight bracket
    async fn base_linehaul_rate(
        &self,
        mileage: i64,
        weight: Pound,
        date: NaiveDate,
    ) -> Result<Cents, AppError>;

    /// Service area serving a ZIP3
    async fn service_area_for_zip3(
        &self,
        zip3: &str,
        date: NaiveDate,
    ) -> Result<ServiceArea, AppError>;

    /// Shorthaul rate for a cwt-miles bracket
    async fn shorthaul_rate(&self, cwt_miles: i64, date: NaiveDate) -> Result<Cents, AppError>;

    /// Full pack rate per CWT, in cents
    async fn full_pack_rate(
        &self,
        schedule: i32,
        weight: Pound,
        date: NaiveDate,
    ) -> Result<Cents, AppError>;

    /// Full unpack rate per CWT, in millicents
    async fn full_unpack_rate(
        &self,
        schedule: i32,
        weight: Pound,
        date: NaiveDate,
    ) -> Result<Millicents, AppError>;

    /// Generic item rate by code, schedule and weight bracket
    async fn item_rate(
        &self,
        code: &str,
        schedule: i32,
        weight: Pound,
        date: NaiveDate,
    ) -> Result<ItemRate, AppError>;

    /// Tariff item definition by code
    async fn item_by_code(&self, code: &str) -> Result<Tariff400ngItem, AppError>;

    /// Linehaul and SIT discounts of the best-value carrier for a PPM lane
    async fn ppm_discounts(
        &self,
        origin_zip5: &str,
        destination_zip5: &str,
        date: NaiveDate,
    ) -> Result<(DiscountRate, DiscountRate), AppError>;
}

/// ZIP3 reference data and the ZIP3-to-ZIP3 distance table
#[async_trait]
pub trait ZipRepository: Send + Sync {
    async fn zip3_reference(&self, zip3: &str) -> Result<Zip3Reference, AppError>;

    /// Distance for exactly this `(from, to)` ordering
    async fn zip3_distance(&self, from_zip3: &str, to_zip3: &str) -> Result<i64, AppError>;
}

/// Shipment repository
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Shipment>, AppError>;

    /// Delivered or completed shipments created inside `[after, before)`
    async fn find_priced_created_between(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Shipment>, AppError>;

    async fn update_status(&self, id: Uuid, status: ShipmentStatus) -> Result<(), AppError>;

    /// Save the shipment, replace its base line items with `base_items` and
    /// update `updated_items`, all in one transaction
    async fn save_shipment_and_line_items(
        &self,
        shipment: &Shipment,
        base_items: &[ShipmentLineItem],
        updated_items: &[ShipmentLineItem],
    ) -> Result<(), AppError>;
}

/// Shipment line item repository
#[async_trait]
pub trait LineItemRepository: Send + Sync {
    async fn find_by_shipment(&self, shipment_id: Uuid)
        -> Result<Vec<ShipmentLineItem>, AppError>;
}

/// Recalculation window and audit log
#[async_trait]
pub trait RecalculateRepository: Send + Sync {
    /// The active window, if an operator configured one
    async fn fetch_active_window(&self) -> Result<Option<ShipmentRecalculate>, AppError>;

    async fn create_log(&self, log: &ShipmentRecalculateLog) -> Result<(), AppError>;
}
