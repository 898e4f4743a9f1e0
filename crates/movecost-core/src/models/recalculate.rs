//! Shipment recalculation window and audit log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operator-configured window of shipments eligible for repricing
///
/// Shipments created, or with line items updated, inside
/// `[shipment_updated_after, shipment_updated_before)` are candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRecalculate {
    pub id: Uuid,
    pub shipment_updated_after: DateTime<Utc>,
    pub shipment_updated_before: DateTime<Utc>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShipmentRecalculate {
    /// Half-open window check
    #[inline]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.shipment_updated_after <= timestamp && timestamp < self.shipment_updated_before
    }
}

/// Record of a shipment that was repriced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRecalculateLog {
    pub id: Uuid,
    pub shipment_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ShipmentRecalculateLog {
    pub fn new(shipment_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            shipment_id,
            created_at: Utc::now(),
        }
    }
}
