//! Pricing services for MoveCost
//!
//! This crate holds the Tariff 400NG rate engine and the shipment services
//! that drive it.
//!
//! # Services
//!
//! - `RateEngine` - linehaul, non-linehaul, SIT, PPM and accessorial pricing
//! - `DeliverAndPriceShipment` - delivers a shipment and prices its line items
//! - `RecalculateShipment` - reprices the base line items of a shipment
//! - `ProcessRecalculateShipment` - decides whether a shipment needs repricing

pub mod rateengine;
pub mod shipment;

pub use rateengine::{
    ComputedShipmentLineItemCharge, CostByShipment, CostComputation, CostDetail, CostDetails,
    CostScenario, FeeAndRate, LinehaulCostComputation, NonLinehaulCostComputation, PpmLane,
    PpmMove, Pricer, PricingTables, RateEngine, SitComputation, MAX_SIT_DAYS,
};
pub use shipment::{
    should_recalculate, DeliverAndPriceShipment, ProcessRecalculateShipment, RecalculateOutcome,
    RecalculateShipment,
};
