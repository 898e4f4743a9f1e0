//! Cost computation results

use movecost_core::models::{Cents, DiscountRate, Millicents, Pound, Shipment};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A charge and the rate it was computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FeeAndRate {
    pub fee: Cents,
    pub rate: Millicents,
}

impl FeeAndRate {
    pub fn new(fee: Cents, rate: Millicents) -> Self {
        Self { fee, rate }
    }
}

/// Linehaul cost breakdown
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LinehaulCostComputation {
    pub base_linehaul: Cents,
    pub origin_linehaul_factor: Cents,
    pub destination_linehaul_factor: Cents,
    pub shorthaul_charge: Cents,
    pub linehaul_charge_total: Cents,
    pub mileage: i64,
    /// Reported alongside the linehaul, never part of its total
    pub fuel_surcharge: FeeAndRate,
}

impl LinehaulCostComputation {
    pub fn scale(&mut self, factor: Decimal) {
        self.base_linehaul = self.base_linehaul.multiply_decimal(factor);
        self.origin_linehaul_factor = self.origin_linehaul_factor.multiply_decimal(factor);
        self.destination_linehaul_factor =
            self.destination_linehaul_factor.multiply_decimal(factor);
        self.shorthaul_charge = self.shorthaul_charge.multiply_decimal(factor);
        self.linehaul_charge_total = self.linehaul_charge_total.multiply_decimal(factor);
        self.fuel_surcharge.fee = self.fuel_surcharge.fee.multiply_decimal(factor);
    }
}

/// Service, pack and unpack charges
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NonLinehaulCostComputation {
    pub origin_service: FeeAndRate,
    pub destination_service: FeeAndRate,
    pub pack: FeeAndRate,
    pub unpack: FeeAndRate,
}

impl NonLinehaulCostComputation {
    pub fn scale(&mut self, factor: Decimal) {
        for fee in self.fees_mut() {
            *fee = fee.multiply_decimal(factor);
        }
    }

    /// Discount every fee, leaving the rates untouched
    pub fn apply_discount(&mut self, discount: DiscountRate) {
        for fee in self.fees_mut() {
            *fee = discount.apply(*fee);
        }
    }

    pub fn total(&self) -> Cents {
        self.origin_service.fee + self.destination_service.fee + self.pack.fee + self.unpack.fee
    }

    fn fees_mut(&mut self) -> [&mut Cents; 4] {
        [
            &mut self.origin_service.fee,
            &mut self.destination_service.fee,
            &mut self.pack.fee,
            &mut self.unpack.fee,
        ]
    }
}

/// Storage-in-transit charge, split by the discount that applies to each part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SitComputation {
    /// 185A plus 185B, discounted at the SIT rate
    pub sit_part: Cents,
    /// 210A pickup and delivery, discounted at the linehaul rate
    pub pd_part: Cents,
}

impl SitComputation {
    pub fn apply_discount(&self, lh_discount: DiscountRate, sit_discount: DiscountRate) -> Cents {
        lh_discount.apply(self.pd_part) + sit_discount.apply(self.sit_part)
    }
}

/// Full cost of a move
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CostComputation {
    pub linehaul: LinehaulCostComputation,
    pub non_linehaul: NonLinehaulCostComputation,
    pub sit_fee: Cents,
    pub sit_max: Cents,
    /// Government constructed cost
    pub gcc: Cents,
    pub lh_discount: DiscountRate,
    pub sit_discount: DiscountRate,
    pub weight: Pound,
}

impl CostComputation {
    /// Assemble a cost from already discounted components
    pub fn new(
        linehaul: LinehaulCostComputation,
        non_linehaul: NonLinehaulCostComputation,
        sit_fee: Cents,
        sit_max: Cents,
        lh_discount: DiscountRate,
        sit_discount: DiscountRate,
        weight: Pound,
    ) -> Self {
        let mut cost = Self {
            linehaul,
            non_linehaul,
            sit_fee,
            sit_max,
            gcc: Cents::ZERO,
            lh_discount,
            sit_discount,
            weight,
        };
        cost.gcc = cost.components_total();
        cost
    }

    /// Scale every monetary field, keeping `gcc` equal to the sum of its parts
    pub fn scale(&mut self, factor: Decimal) {
        self.linehaul.scale(factor);
        self.non_linehaul.scale(factor);
        self.sit_fee = self.sit_fee.multiply_decimal(factor);
        self.sit_max = self.sit_max.multiply_decimal(factor);
        self.gcc = self.components_total();
    }

    fn components_total(&self) -> Cents {
        self.linehaul.linehaul_charge_total + self.non_linehaul.total()
    }
}

/// Rate engine output for a shipment
#[derive(Debug, Clone)]
pub struct CostByShipment {
    pub shipment: Shipment,
    pub cost: CostComputation,
}

/// Price of one accessorial line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComputedShipmentLineItemCharge {
    pub amount: Cents,
    pub applied_rate: Millicents,
}

/// Origin a PPM cost was computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CostScenario {
    PickupLocation,
    OriginDutyLocation,
}

impl fmt::Display for CostScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostScenario::PickupLocation => write!(f, "pickupLocation"),
            CostScenario::OriginDutyLocation => write!(f, "originDutyLocation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostDetail {
    pub cost: CostComputation,
    pub is_winning: bool,
}

/// PPM costs from both candidate origins
///
/// Exactly one detail is winning: the larger GCC, with the duty location
/// winning ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostDetails {
    pub pickup_location: CostDetail,
    pub origin_duty_location: CostDetail,
}

impl CostDetails {
    pub fn new(from_pickup: CostComputation, from_duty_location: CostComputation) -> Self {
        let pickup_wins = from_pickup.gcc > from_duty_location.gcc;
        Self {
            pickup_location: CostDetail {
                cost: from_pickup,
                is_winning: pickup_wins,
            },
            origin_duty_location: CostDetail {
                cost: from_duty_location,
                is_winning: !pickup_wins,
            },
        }
    }

    pub fn get(&self, scenario: CostScenario) -> &CostDetail {
        match scenario {
            CostScenario::PickupLocation => &self.pickup_location,
            CostScenario::OriginDutyLocation => &self.origin_duty_location,
        }
    }

    pub fn winning_scenario(&self) -> CostScenario {
        if self.pickup_location.is_winning {
            CostScenario::PickupLocation
        } else {
            CostScenario::OriginDutyLocation
        }
    }

    pub fn winner(&self) -> &CostDetail {
        self.get(self.winning_scenario())
    }
}
