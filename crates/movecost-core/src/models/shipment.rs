//! Shipment model
//!
//! A household-goods shipment as seen by the pricing services: its lifecycle
//! status, the dates and weight that drive the tariff lookups, both ends of
//! the move, and the discount rates of the awarded carrier.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::address::Address;
use super::unit::{DiscountRate, Pound};
use crate::error::AppError;

/// Shipment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    #[default]
    Draft,
    Submitted,
    Awarded,
    Accepted,
    Approved,
    InTransit,
    Delivered,
    Completed,
    /// Transient marker held while line items are being repriced
    Recalculate,
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipmentStatus::Draft => write!(f, "DRAFT"),
            ShipmentStatus::Submitted => write!(f, "SUBMITTED"),
            ShipmentStatus::Awarded => write!(f, "AWARDED"),
            ShipmentStatus::Accepted => write!(f, "ACCEPTED"),
            ShipmentStatus::Approved => write!(f, "APPROVED"),
            ShipmentStatus::InTransit => write!(f, "IN_TRANSIT"),
            ShipmentStatus::Delivered => write!(f, "DELIVERED"),
            ShipmentStatus::Completed => write!(f, "COMPLETED"),
            ShipmentStatus::Recalculate => write!(f, "RECALCULATE"),
        }
    }
}

impl ShipmentStatus {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DRAFT" => Some(ShipmentStatus::Draft),
            "SUBMITTED" => Some(ShipmentStatus::Submitted),
            "AWARDED" => Some(ShipmentStatus::Awarded),
            "ACCEPTED" => Some(ShipmentStatus::Accepted),
            "APPROVED" => Some(ShipmentStatus::Approved),
            "IN_TRANSIT" => Some(ShipmentStatus::InTransit),
            "DELIVERED" => Some(ShipmentStatus::Delivered),
            "COMPLETED" => Some(ShipmentStatus::Completed),
            "RECALCULATE" => Some(ShipmentStatus::Recalculate),
            _ => None,
        }
    }

    /// Statuses whose pricing is final and may be recalculated
    pub fn is_priced(&self) -> bool {
        matches!(self, ShipmentStatus::Delivered | ShipmentStatus::Completed)
    }
}

/// Performance record of the carrier awarded the shipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TspPerformance {
    pub id: Uuid,
    pub linehaul_rate: DiscountRate,
    pub sit_rate: DiscountRate,
}

/// Household-goods shipment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub id: Uuid,
    pub status: ShipmentStatus,
    pub book_date: Option<NaiveDate>,
    pub actual_pickup_date: Option<NaiveDate>,
    pub actual_delivery_date: Option<NaiveDate>,
    pub net_weight: Option<Pound>,
    pub pickup_address: Option<Address>,
    /// Address of the new duty location
    pub destination_address: Option<Address>,
    pub tsp_performance: Option<TspPerformance>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shipment {
    /// Mark the shipment delivered
    ///
    /// Only in-transit shipments can be delivered.
    pub fn deliver(&mut self, actual_delivery_date: NaiveDate) -> Result<(), AppError> {
        if self.status != ShipmentStatus::InTransit {
            return Err(AppError::InvalidStatusTransition(format!(
                "cannot deliver shipment {} in status {}",
                self.id, self.status
            )));
        }
        self.status = ShipmentStatus::Delivered;
        self.actual_delivery_date = Some(actual_delivery_date);
        Ok(())
    }

    /// Linehaul discount of the awarded carrier
    pub fn linehaul_discount(&self) -> Option<DiscountRate> {
        self.tsp_performance.as_ref().map(|p| p.linehaul_rate)
    }

    /// SIT discount of the awarded carrier
    pub fn sit_discount(&self) -> Option<DiscountRate> {
        self.tsp_performance.as_ref().map(|p| p.sit_rate)
    }
}

impl Default for Shipment {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            status: ShipmentStatus::default(),
            book_date: None,
            actual_pickup_date: None,
            actual_delivery_date: None,
            net_weight: None,
            pickup_address: None,
            destination_address: None,
            tsp_performance: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_strings() {
        assert_eq!(ShipmentStatus::InTransit.to_string(), "IN_TRANSIT");
        assert_eq!(
            ShipmentStatus::from_str("recalculate"),
            Some(ShipmentStatus::Recalculate)
        );
        assert_eq!(ShipmentStatus::from_str("LOST"), None);
    }

    #[test]
    fn test_priced_statuses() {
        assert!(ShipmentStatus::Delivered.is_priced());
        assert!(ShipmentStatus::Completed.is_priced());
        assert!(!ShipmentStatus::InTransit.is_priced());
        assert!(!ShipmentStatus::Recalculate.is_priced());
    }

    #[test]
    fn test_deliver_requires_in_transit() {
        let date = NaiveDate::from_ymd_opt(2019, 5, 20).unwrap();

        let mut shipment = Shipment {
            status: ShipmentStatus::InTransit,
            ..Default::default()
        };
        shipment.deliver(date).unwrap();
        assert_eq!(shipment.status, ShipmentStatus::Delivered);
        assert_eq!(shipment.actual_delivery_date, Some(date));

        let mut approved = Shipment {
            status: ShipmentStatus::Approved,
            ..Default::default()
        };
        let err = approved.deliver(date).unwrap_err();
        assert!(matches!(err, AppError::InvalidStatusTransition(_)));
        assert_eq!(approved.status, ShipmentStatus::Approved);
    }
}
