//! Delivery and first pricing of a shipment

use std::sync::Arc;

use chrono::NaiveDate;
use movecost_core::{
    models::Shipment,
    traits::{LineItemRepository, ShipmentRepository},
    AppResult, ResultExt,
};
use tracing::{info, instrument};

use crate::rateengine::RateEngine;

/// Marks a shipment delivered and prices all of its line items
pub struct DeliverAndPriceShipment {
    engine: Arc<RateEngine>,
    shipments: Arc<dyn ShipmentRepository>,
    line_items: Arc<dyn LineItemRepository>,
}

impl DeliverAndPriceShipment {
    pub fn new(
        engine: Arc<RateEngine>,
        shipments: Arc<dyn ShipmentRepository>,
        line_items: Arc<dyn LineItemRepository>,
    ) -> Self {
        Self {
            engine,
            shipments,
            line_items,
        }
    }

    /// Deliver the shipment, then save it with its base line items and
    /// newly priced accessorials in one transaction
    ///
    /// Any stale base line items are replaced inside that transaction. On
    /// error nothing is saved, though `shipment` may already carry the
    /// delivered status in memory.
    #[instrument(skip(self, shipment), fields(shipment_id = %shipment.id))]
    pub async fn call(&self, delivery_date: NaiveDate, shipment: &mut Shipment) -> AppResult<()> {
        shipment.deliver(delivery_date)?;

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

        self.shipments
            .save_shipment_and_line_items(shipment, &base_items, &accessorials)
            .await
            .context("Saving delivered shipment")?;

        info!(
            gcc = cost.cost.gcc.as_i64(),
            accessorials = accessorials.len(),
            "Shipment delivered and priced"
        );
        Ok(())
    }
}
