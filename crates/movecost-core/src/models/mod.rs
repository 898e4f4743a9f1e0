//! Domain models for MoveCost
//!
//! This module contains all the core domain models used throughout the application.

pub mod address;
pub mod line_item;
pub mod recalculate;
pub mod shipment;
pub mod tariff;
pub mod unit;

pub use address::Address;
pub use line_item::{
    DiscountType, LineItemLocation, LineItemStatus, ShipmentLineItem, Tariff400ngItem,
    BASE_LINE_ITEM_CODES,
};
pub use recalculate::{ShipmentRecalculate, ShipmentRecalculateLog};
pub use shipment::{Shipment, ShipmentStatus, TspPerformance};
pub use tariff::{EffectiveDateRange, ItemRate, ServiceArea, Zip3Reference};
pub use unit::{BaseQuantity, Cents, Cwt, DiscountRate, Millicents, Pound};

/// First three digits of a five digit postal code
///
/// Callers are expected to pass a normalized ZIP5; shorter input is returned
/// unchanged so the downstream lookup reports it as not found.
pub fn zip5_to_zip3(zip5: &str) -> &str {
    zip5.get(0..3).unwrap_or(zip5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip5_to_zip3() {
        assert_eq!(zip5_to_zip3("39574"), "395");
        assert_eq!(zip5_to_zip3("02134"), "021");
        assert_eq!(zip5_to_zip3("12"), "12");
    }
}
