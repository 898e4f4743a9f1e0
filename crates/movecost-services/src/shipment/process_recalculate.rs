//! Recalculation eligibility

use std::sync::Arc;

use movecost_core::{
    models::{Shipment, ShipmentLineItem, ShipmentRecalculate, BASE_LINE_ITEM_CODES},
    traits::RecalculateRepository,
    AppError, AppResult, ResultExt,
};
use tracing::{debug, instrument, warn};

use super::RecalculateShipment;

/// What happened to a shipment offered for recalculation
#[derive(Debug)]
pub enum RecalculateOutcome {
    /// Not eligible, nothing was touched
    Skipped,
    Recalculated,
    /// Repricing was attempted and failed
    Failed(AppError),
}

impl RecalculateOutcome {
    pub fn update_attempted(&self) -> bool {
        !matches!(self, RecalculateOutcome::Skipped)
    }

    /// Whether an update was attempted, or the repricing error
    pub fn into_result(self) -> AppResult<bool> {
        match self {
            RecalculateOutcome::Skipped => Ok(false),
            RecalculateOutcome::Recalculated => Ok(true),
            RecalculateOutcome::Failed(e) => Err(e),
        }
    }
}

/// True when a priced shipment created inside the window is missing a base
/// line item or has a line item updated inside the window
pub fn should_recalculate(
    window: &ShipmentRecalculate,
    shipment: &Shipment,
    line_items: &[ShipmentLineItem],
) -> bool {
    if !shipment.status.is_priced() {
        return false;
    }
    if !window.contains(shipment.created_at) {
        return false;
    }

    let missing_base_item = BASE_LINE_ITEM_CODES
        .iter()
        .any(|code| !line_items.iter().any(|item| item.item.code == *code));

    missing_base_item || line_items.iter().any(|item| window.contains(item.updated_at))
}

/// Recalculates a shipment when the active window says it is stale
pub struct ProcessRecalculateShipment {
    recalculates: Arc<dyn RecalculateRepository>,
    recalculate: RecalculateShipment,
}

impl ProcessRecalculateShipment {
    pub fn new(
        recalculates: Arc<dyn RecalculateRepository>,
        recalculate: RecalculateShipment,
    ) -> Self {
        Self {
            recalculates,
            recalculate,
        }
    }

    /// Errors only when the window itself cannot be read; repricing
    /// failures are reported as [`RecalculateOutcome::Failed`]
    #[instrument(skip(self, shipment, line_items), fields(shipment_id = %shipment.id))]
    pub async fn call(
        &self,
        shipment: &mut Shipment,
        line_items: &[ShipmentLineItem],
    ) -> AppResult<RecalculateOutcome> {
        let window = match self
            .recalculates
            .fetch_active_window()
            .await
            .context("Fetching active recalculation window")?
        {
            Some(window) => window,
            None => {
                debug!("No active recalculation window");
                return Ok(RecalculateOutcome::Skipped);
            }
        };

        if !should_recalculate(&window, shipment, line_items) {
            return Ok(RecalculateOutcome::Skipped);
        }

        match self.recalculate.call(shipment).await {
            Ok(()) => Ok(RecalculateOutcome::Recalculated),
            Err(e) => {
                warn!("Recalculation failed for shipment {}: {}", shipment.id, e);
                Ok(RecalculateOutcome::Failed(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use movecost_core::models::{ShipmentStatus, Tariff400ngItem};
    use uuid::Uuid;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 6, day, 12, 0, 0).unwrap()
    }

    fn window() -> ShipmentRecalculate {
        ShipmentRecalculate {
            id: Uuid::new_v4(),
            shipment_updated_after: at(1),
            shipment_updated_before: at(10),
            active: true,
            created_at: at(1),
            updated_at: at(1),
        }
    }

    fn delivered(created_at: DateTime<Utc>) -> Shipment {
        Shipment {
            status: ShipmentStatus::Delivered,
            created_at,
            ..Default::default()
        }
    }

    fn base_items(updated_at: DateTime<Utc>) -> Vec<ShipmentLineItem> {
        BASE_LINE_ITEM_CODES
            .iter()
            .map(|code| ShipmentLineItem {
                item: Tariff400ngItem {
                    code: code.to_string(),
                    ..Default::default()
                },
                updated_at,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_unpriced_status_is_skipped() {
        let mut shipment = delivered(at(5));
        shipment.status = ShipmentStatus::InTransit;
        assert!(!should_recalculate(&window(), &shipment, &[]));
    }

    #[test]
    fn test_created_outside_window_is_skipped() {
        assert!(!should_recalculate(&window(), &delivered(at(10)), &[]));
        assert!(!should_recalculate(&window(), &delivered(at(20)), &[]));
    }

    #[test]
    fn test_missing_base_item_triggers() {
        let mut items = base_items(at(20));
        items.pop();
        assert!(should_recalculate(&window(), &delivered(at(5)), &items));
    }

    #[test]
    fn test_item_updated_inside_window_triggers() {
        let mut items = base_items(at(20));
        items[2].updated_at = at(9);
        assert!(should_recalculate(&window(), &delivered(at(1)), &items));
    }

    #[test]
    fn test_complete_and_untouched_is_skipped() {
        let items = base_items(at(20));
        let mut shipment = delivered(at(5));
        shipment.status = ShipmentStatus::Completed;
        assert!(!should_recalculate(&window(), &shipment, &items));
    }

    #[test]
    fn test_outcome_reporting() {
        assert!(!RecalculateOutcome::Skipped.update_attempted());
        assert!(RecalculateOutcome::Recalculated.update_attempted());

        let failed = RecalculateOutcome::Failed(AppError::Internal("boom".into()));
        assert!(failed.update_attempted());
        assert!(failed.into_result().is_err());
        assert!(RecalculateOutcome::Recalculated.into_result().unwrap());
    }
}
