//! Accessorial line item pricing

use chrono::Utc;
use movecost_core::{
    models::{
        zip5_to_zip3, BaseQuantity, Cents, DiscountRate, DiscountType, LineItemLocation, Shipment,
        ShipmentLineItem,
    },
    AppError, AppResult, ResultExt,
};
use tracing::{debug, instrument};

use super::{ComputedShipmentLineItemCharge, RateEngine};

/// Misc charge (226A) is entered as a dollar amount, priced per cent
const MISC_CHARGE_RATE: Cents = Cents(100);

impl RateEngine {
    /// Price one accessorial line item of a shipment
    #[instrument(
        skip(self, line_item, shipment),
        fields(code = %line_item.item.code, shipment_id = %shipment.id)
    )]
    pub async fn compute_shipment_line_item_charge(
        &self,
        line_item: &ShipmentLineItem,
        shipment: &Shipment,
    ) -> AppResult<ComputedShipmentLineItemCharge> {
        let code = line_item.item.code.as_str();
        let pricer = self
            .pricing
            .pricer(code)
            .ok_or_else(|| AppError::NoPricingFunction(code.to_string()))?;

        let address = match line_item.location {
            LineItemLocation::Destination => shipment.destination_address.as_ref(),
            _ => shipment.pickup_address.as_ref(),
        }
        .ok_or_else(|| {
            AppError::MissingField(format!(
                "{} address of shipment {}",
                line_item.location, shipment.id
            ))
        })?;
        let book_date = shipment.book_date.ok_or_else(|| {
            AppError::Precondition(format!("shipment {} has no book date", shipment.id))
        })?;

        let net_weight = || {
            shipment.net_weight.ok_or_else(|| {
                AppError::Precondition(format!(
                    "item {} needs the net weight of shipment {}",
                    code, shipment.id
                ))
            })
        };

        let quantity = if self.pricing.is_weight_based(code) {
            BaseQuantity::from_int(net_weight()?.as_i64())
        } else {
            line_item.quantity_1
        };

        let service_area = self
            .tariff
            .service_area_for_zip3(zip5_to_zip3(&address.postal_code), book_date)
            .await
            .context("Fetching 400ng service area from db")?;

        let rate = match code {
            "185A" => service_area.sit_185a_rate_cents,
            "185B" => service_area.sit_185b_rate_cents,
            "226A" => MISC_CHARGE_RATE,
            _ => {
                let rate_code = self.pricing.rate_code(code);
                self.tariff
                    .item_rate(
                        rate_code,
                        service_area.services_schedule,
                        net_weight()?,
                        book_date,
                    )
                    .await
                    .context(format!("Fetching 400ng item rate for {}", rate_code))?
                    .rate_cents
            }
        };

        let discount = item_discount(line_item.item.discount_type, shipment)?;
        let amount = pricer.price(rate, quantity, discount);
        debug!("Priced {} at {} (rate {})", code, amount, rate);

        Ok(ComputedShipmentLineItemCharge {
            amount,
            applied_rate: rate.to_millicents(),
        })
    }

    /// Price every approved accessorial that has not been priced yet
    ///
    /// Returns only the items that were priced, ready to be saved.
    pub async fn price_approved_accessorials(
        &self,
        shipment: &Shipment,
        line_items: Vec<ShipmentLineItem>,
    ) -> AppResult<Vec<ShipmentLineItem>> {
        let mut priced = Vec::new();
        for mut item in line_items.into_iter().filter(ShipmentLineItem::needs_pricing) {
            let charge = self.compute_shipment_line_item_charge(&item, shipment).await?;
            item.amount = Some(charge.amount);
            item.applied_rate = Some(charge.applied_rate);
            item.updated_at = Utc::now();
            priced.push(item);
        }
        Ok(priced)
    }
}

fn item_discount(
    discount_type: DiscountType,
    shipment: &Shipment,
) -> AppResult<Option<DiscountRate>> {
    let discount = match discount_type {
        DiscountType::Hhg | DiscountType::HhgLinehaul50 => shipment.linehaul_discount(),
        DiscountType::Sit => shipment.sit_discount(),
        DiscountType::None | DiscountType::Linehaul => return Ok(None),
    };

    discount.map(Some).ok_or_else(|| {
        AppError::MissingField(format!(
            "carrier performance of shipment {}",
            shipment.id
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{engine, item, shipment};
    use super::*;
    use movecost_core::models::{LineItemStatus, Millicents};

    fn line_item(code: &str, location: LineItemLocation, quantity: i64) -> ShipmentLineItem {
        ShipmentLineItem {
            item: item(code),
            location,
            quantity_1: BaseQuantity::from_int(quantity),
            status: LineItemStatus::Approved,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_weight_based_sit_first_day() {
        let engine = engine(1234);
        // Quantity is ignored in favour of the 2000 lb net weight
        let item = line_item("185A", LineItemLocation::Destination, 1);
        let charge = engine
            .compute_shipment_line_item_charge(&item, &shipment())
            .await
            .unwrap();

        assert_eq!(charge.amount, Cents(15570));
        assert_eq!(charge.applied_rate, Millicents(1_557_000));
    }

    #[tokio::test]
    async fn test_sit_additional_day_uses_origin_area() {
        let engine = engine(1234);
        let item = line_item("185B", LineItemLocation::Origin, 2000);
        let charge = engine
            .compute_shipment_line_item_charge(&item, &shipment())
            .await
            .unwrap();

        assert_eq!(charge.amount, Cents(530));
    }

    #[tokio::test]
    async fn test_misc_charge_is_fixed_rate() {
        let engine = engine(1234);
        let item = line_item("226A", LineItemLocation::Origin, 250);
        let charge = engine
            .compute_shipment_line_item_charge(&item, &shipment())
            .await
            .unwrap();

        assert_eq!(charge.amount, Cents(25000));
        assert_eq!(charge.applied_rate, Millicents(100_000));
    }

    #[tokio::test]
    async fn test_remapped_rate_code() {
        let engine = engine(1234);
        let item = line_item("17A", LineItemLocation::Origin, 500);
        let charge = engine
            .compute_shipment_line_item_charge(&item, &shipment())
            .await
            .unwrap();

        // 210A rate, floored at 1000 lb, 60% off
        assert_eq!(charge.amount, Cents(8000));
        assert_eq!(charge.applied_rate, Millicents(2_000_000));
    }

    #[tokio::test]
    async fn test_flat_rate_and_minimum_quantity() {
        let engine = engine(1234);

        let flat = line_item("125A", LineItemLocation::Origin, 40);
        let charge = engine
            .compute_shipment_line_item_charge(&flat, &shipment())
            .await
            .unwrap();
        assert_eq!(charge.amount, Cents(3000));

        let crate_item = line_item("105B", LineItemLocation::Origin, 2);
        let charge = engine
            .compute_shipment_line_item_charge(&crate_item, &shipment())
            .await
            .unwrap();
        assert_eq!(charge.amount, Cents(1920));
    }

    #[tokio::test]
    async fn test_unknown_code_has_no_pricer() {
        let engine = engine(1234);
        let item = line_item("999Z", LineItemLocation::Origin, 1);
        let err = engine
            .compute_shipment_line_item_charge(&item, &shipment())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NoPricingFunction(ref code) if code == "999Z"));
    }

    #[tokio::test]
    async fn test_missing_book_date() {
        let engine = engine(1234);
        let mut shipment = shipment();
        shipment.book_date = None;

        let item = line_item("125A", LineItemLocation::Origin, 1);
        let err = engine
            .compute_shipment_line_item_charge(&item, &shipment)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "precondition_failed");
    }

    #[tokio::test]
    async fn test_weight_based_without_net_weight() {
        let engine = engine(1234);
        let mut shipment = shipment();
        shipment.net_weight = None;

        let item = line_item("175A", LineItemLocation::Origin, 1);
        let err = engine
            .compute_shipment_line_item_charge(&item, &shipment)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "precondition_failed");
    }

    #[tokio::test]
    async fn test_item_rate_lookup_without_net_weight() {
        let engine = engine(1234);
        let mut shipment = shipment();
        shipment.net_weight = None;

        // The weight bracket of the rate table needs the net weight
        let flat = line_item("125A", LineItemLocation::Origin, 1);
        let err = engine
            .compute_shipment_line_item_charge(&flat, &shipment)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "precondition_failed");

        let misc = line_item("226A", LineItemLocation::Origin, 10);
        let charge = engine
            .compute_shipment_line_item_charge(&misc, &shipment)
            .await
            .unwrap();
        assert_eq!(charge.amount, Cents(1000));
    }

    #[tokio::test]
    async fn test_service_area_error_context() {
        let engine = engine(1234);
        let mut shipment = shipment();
        shipment.destination_address = Some(movecost_core::models::Address::from_postal_code("00000"));

        let item = line_item("185B", LineItemLocation::Destination, 1000);
        let err = engine
            .compute_shipment_line_item_charge(&item, &shipment)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("Fetching 400ng service area from db"));
    }

    #[tokio::test]
    async fn test_price_approved_accessorials_skips_priced_items() {
        let engine = engine(1234);
        let shipment = shipment();

        let mut invoiced = line_item("125A", LineItemLocation::Origin, 1);
        invoiced.invoice_id = Some(uuid::Uuid::new_v4());
        let mut submitted = line_item("125B", LineItemLocation::Origin, 1);
        submitted.status = LineItemStatus::Submitted;
        let base = line_item("LHS", LineItemLocation::Neither, 1);
        let approved = line_item("125A", LineItemLocation::Origin, 1);
        let approved_id = approved.id;

        let priced = engine
            .price_approved_accessorials(&shipment, vec![invoiced, submitted, base, approved])
            .await
            .unwrap();

        assert_eq!(priced.len(), 1);
        assert_eq!(priced[0].id, approved_id);
        assert_eq!(priced[0].amount, Some(Cents(3000)));
    }
}
