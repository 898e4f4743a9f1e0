//! Shipment pricing services
//!
//! These services own the shipment side of pricing: delivering and pricing
//! a shipment for the first time, and repricing shipments whose tariff
//! inputs changed inside an operator-configured recalculation window.

mod deliver;
mod process_recalculate;
mod recalculate;

pub use deliver::DeliverAndPriceShipment;
pub use process_recalculate::{should_recalculate, ProcessRecalculateShipment, RecalculateOutcome};
pub use recalculate::RecalculateShipment;
