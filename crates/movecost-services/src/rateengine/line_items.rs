//! Shipment costs and the base line items generated from them

use chrono::{NaiveDate, Utc};
use movecost_core::{
    models::{
        BaseQuantity, DiscountRate, LineItemLocation, LineItemStatus, Millicents, Pound, Shipment,
        ShipmentLineItem,
    },
    AppError, AppResult, ResultExt,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{CostByShipment, CostComputation, FeeAndRate, RateEngine};

impl RateEngine {
    /// Cost of a household-goods shipment between two ZIP5s
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self, shipment), fields(shipment_id = %shipment.id))]
    pub async fn compute_shipment(
        &self,
        shipment: &Shipment,
        weight: Pound,
        origin_zip5: &str,
        destination_zip5: &str,
        date: NaiveDate,
        lh_discount: DiscountRate,
        sit_discount: DiscountRate,
    ) -> AppResult<CostComputation> {
        let mileage = self.determine_mileage(origin_zip5, destination_zip5).await?;

        let mut linehaul = self
            .linehaul_charge_computation(weight, origin_zip5, destination_zip5, mileage, date)
            .await?;
        let mut non_linehaul = self
            .non_linehaul_charge_computation(weight, origin_zip5, destination_zip5, date)
            .await?;

        linehaul.linehaul_charge_total = lh_discount.apply(linehaul.linehaul_charge_total);
        non_linehaul.apply_discount(lh_discount);

        let cost = CostComputation::new(
            linehaul,
            non_linehaul,
            Default::default(),
            Default::default(),
            lh_discount,
            sit_discount,
            weight,
        );

        info!(gcc = cost.gcc.as_i64(), "Shipment cost calculated");
        Ok(cost)
    }

    /// Run the rate engine on a shipment
    ///
    /// The shipment must carry a pickup address, a destination address, a
    /// net weight, a book date and the awarded carrier's discounts.
    pub async fn handle_run_on_shipment(&self, shipment: &Shipment) -> AppResult<CostByShipment> {
        let missing =
            |field: &str| AppError::MissingField(format!("{} of shipment {}", field, shipment.id));

        let pickup = shipment
            .pickup_address
            .as_ref()
            .ok_or_else(|| missing("pickup address"))?;
        let destination = shipment
            .destination_address
            .as_ref()
            .ok_or_else(|| missing("destination address"))?;
        let weight = shipment.net_weight.ok_or_else(|| missing("net weight"))?;
        let book_date = shipment.book_date.ok_or_else(|| missing("book date"))?;
        let performance = shipment
            .tsp_performance
            .as_ref()
            .ok_or_else(|| missing("carrier performance"))?;

        let cost = self
            .compute_shipment(
                shipment,
                weight,
                &pickup.postal_code,
                &destination.postal_code,
                book_date,
                performance.linehaul_rate,
                performance.sit_rate,
            )
            .await
            .context(format!("Pricing shipment {}", shipment.id))?;

        Ok(CostByShipment {
            shipment: shipment.clone(),
            cost,
        })
    }

    /// The six approved base line items for a priced shipment
    #[instrument(skip(self, cost_by_shipment), fields(shipment_id = %cost_by_shipment.shipment.id))]
    pub async fn create_base_shipment_line_items(
        &self,
        cost_by_shipment: &CostByShipment,
    ) -> AppResult<Vec<ShipmentLineItem>> {
        let shipment = &cost_by_shipment.shipment;
        let cost = &cost_by_shipment.cost;
        let cwt = BaseQuantity::from_cwt(cost.weight.to_cwt());
        let linehaul_total = cost.linehaul.linehaul_charge_total;

        let base_items = [
            BaseItem {
                code: "LHS",
                location: LineItemLocation::Neither,
                quantity_1: BaseQuantity::from_int(cost.weight.as_i64()),
                quantity_2: BaseQuantity::from_int(cost.linehaul.mileage),
                charge: FeeAndRate::new(linehaul_total, Millicents(0)),
            },
            BaseItem {
                code: "135A",
                location: LineItemLocation::Origin,
                quantity_1: cwt,
                quantity_2: BaseQuantity::default(),
                charge: cost.non_linehaul.origin_service,
            },
            BaseItem {
                code: "135B",
                location: LineItemLocation::Destination,
                quantity_1: cwt,
                quantity_2: BaseQuantity::default(),
                charge: cost.non_linehaul.destination_service,
            },
            BaseItem {
                code: "105A",
                location: LineItemLocation::Origin,
                quantity_1: cwt,
                quantity_2: BaseQuantity::default(),
                charge: cost.non_linehaul.pack,
            },
            BaseItem {
                code: "105C",
                location: LineItemLocation::Destination,
                quantity_1: cwt,
                quantity_2: BaseQuantity::default(),
                charge: cost.non_linehaul.unpack,
            },
            BaseItem {
                code: "16A",
                location: LineItemLocation::Neither,
                quantity_1: BaseQuantity::from_cents(linehaul_total),
                quantity_2: BaseQuantity::default(),
                charge: cost.linehaul.fuel_surcharge,
            },
        ];

        let now = Utc::now();
        let mut line_items = Vec::with_capacity(base_items.len());
        for base in base_items {
            let item = self
                .tariff
                .item_by_code(base.code)
                .await
                .context(format!("Fetching 400ng item {}", base.code))?;

            line_items.push(ShipmentLineItem {
                id: Uuid::new_v4(),
                shipment_id: shipment.id,
                item,
                quantity_1: base.quantity_1,
                quantity_2: base.quantity_2,
                location: base.location,
                status: LineItemStatus::Approved,
                amount: Some(base.charge.fee),
                applied_rate: Some(base.charge.rate),
                invoice_id: None,
                submitted_date: now,
                approved_date: Some(now),
                created_at: now,
                updated_at: now,
            });
        }

        Ok(line_items)
    }
}

struct BaseItem {
    code: &'static str,
    location: LineItemLocation,
    quantity_1: BaseQuantity,
    quantity_2: BaseQuantity,
    charge: FeeAndRate,
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{engine, shipment};
    use super::*;
    use movecost_core::models::{Cents, BASE_LINE_ITEM_CODES};

    #[tokio::test]
    async fn test_handle_run_on_shipment() {
        let engine = engine(1234);
        let result = engine.handle_run_on_shipment(&shipment()).await.unwrap();
        assert_eq!(result.cost.gcc, Cents(175543));
        assert_eq!(result.cost.linehaul.mileage, 1234);
        assert_eq!(result.cost.sit_fee, Cents::ZERO);
    }

    #[tokio::test]
    async fn test_missing_relationships() {
        let engine = engine(1234);

        let mut no_weight = shipment();
        no_weight.net_weight = None;
        let err = engine.handle_run_on_shipment(&no_weight).await.unwrap_err();
        assert_eq!(err.error_code(), "missing_field");

        let mut no_carrier = shipment();
        no_carrier.tsp_performance = None;
        let err = engine.handle_run_on_shipment(&no_carrier).await.unwrap_err();
        assert!(err.to_string().contains("carrier performance"));
    }

    #[tokio::test]
    async fn test_base_line_items() {
        let engine = engine(1234);
        let cost = engine.handle_run_on_shipment(&shipment()).await.unwrap();
        let items = engine.create_base_shipment_line_items(&cost).await.unwrap();

        let codes: Vec<&str> = items.iter().map(|i| i.item.code.as_str()).collect();
        assert_eq!(codes, BASE_LINE_ITEM_CODES.to_vec());
        assert!(items.iter().all(|i| i.status == LineItemStatus::Approved));
        assert!(items.iter().all(|i| i.shipment_id == cost.shipment.id));

        let linehaul = &items[0];
        assert_eq!(linehaul.quantity_1, BaseQuantity::from_int(2000));
        assert_eq!(linehaul.quantity_2, BaseQuantity::from_int(1234));
        assert_eq!(linehaul.amount, Some(Cents(119664)));

        let pack = &items[3];
        assert_eq!(pack.location, LineItemLocation::Origin);
        assert_eq!(pack.quantity_1, BaseQuantity::from_int(20));
        assert_eq!(pack.amount, Some(Cents(43432)));

        let fuel = &items[5];
        assert_eq!(fuel.quantity_1, BaseQuantity::from_int(119664));
        assert_eq!(fuel.amount, Some(Cents::ZERO));

        let total: Cents = items[..5].iter().filter_map(|i| i.amount).sum();
        assert_eq!(total, cost.cost.gcc);
    }
}
