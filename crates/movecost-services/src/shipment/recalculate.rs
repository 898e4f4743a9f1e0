//! Repricing of an already priced shipment

use std::sync::Arc;

use movecost_core::{
    models::{Shipment, ShipmentRecalculateLog, ShipmentStatus},
    traits::{LineItemRepository, RecalculateRepository, ShipmentRepository},
    AppResult, ResultExt,
};
use tracing::{error, info, instrument};

use crate::rateengine::RateEngine;

/// Replaces the base line items of a shipment and reprices its accessorials
pub struct RecalculateShipment {
    engine: Arc<RateEngine>,
    shipments: Arc<dyn ShipmentRepository>,
    line_items: Arc<dyn LineItemRepository>,
    recalculates: Arc<dyn RecalculateRepository>,
}

impl RecalculateShipment {
    pub fn new(
        engine: Arc<RateEngine>,
        shipments: Arc<dyn ShipmentRepository>,
        line_items: Arc<dyn LineItemRepository>,
        recalculates: Arc<dyn RecalculateRepository>,
    ) -> Self {
        Self {
            engine,
            shipments,
            line_items,
            recalculates,
        }
    }

    /// Reprice the shipment and record it in the recalculation log
    ///
    /// The shipment is marked `Recalculate` while its line items are
    /// replaced. The marker is advisory: readers are not blocked by it. The
    /// original status is restored whether or not repricing succeeds.
    #[instrument(skip(self, shipment), fields(shipment_id = %shipment.id))]
    pub async fn call(&self, shipment: &mut Shipment) -> AppResult<()> {
        let original_status = shipment.status;

        self.shipments
            .update_status(shipment.id, ShipmentStatus::Recalculate)
            .await
            .context("Marking shipment for recalculation")?;
        shipment.status = ShipmentStatus::Recalculate;

        let result = self.reprice(shipment, original_status).await;
        shipment.status = original_status;

        if let Err(e) = result {
            error!("Recalculation of shipment {} failed: {}", shipment.id, e);
            let restored = self
                .shipments
                .update_status(shipment.id, original_status)
                .await;
            if let Err(restore) = restored {
                error!(
                    "Could not restore status {} of shipment {}: {}",
                    original_status, shipment.id, restore
                );
            }
            return Err(e);
        }

        self.recalculates
            .create_log(&ShipmentRecalculateLog::new(shipment.id))
            .await
            .context("Writing recalculation log")?;

        info!("Shipment {} recalculated", shipment.id);
        Ok(())
    }

    async fn reprice(
        &self,
        shipment: &mut Shipment,
        original_status: ShipmentStatus,
    ) -> AppResult<()> {
        let cost = self.engine.handle_run_on_shipment(shipment).await?;
        let base_items = self.engine.create_base_shipment_line_items(&cost).await?;

        let existing = self
            .line_items
            .find_by_shipment(shipment.id)
            .await
            .context("Fetching shipment line items")?;
        let accessorials = self
            .engine
            .price_approved_accessorials(shipment, existing)
            .await?;

        // Saved with its original status, which also clears the marker.
        // Old base items are only dropped inside this save.
        shipment.status = original_status;
        self.shipments
            .save_shipment_and_line_items(shipment, &base_items, &accessorials)
            .await
            .context("Saving recalculated shipment")
    }
}
