//! Shipment line item and tariff item models
//!
//! A line item is one priced charge on a shipment. Six base codes are
//! generated by the rate engine for every delivered shipment; every other
//! code is an accessorial entered and approved through the invoicing workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::unit::{BaseQuantity, Cents, Millicents};

/// Codes the rate engine creates for every priced shipment
pub const BASE_LINE_ITEM_CODES: [&str; 6] = ["LHS", "135A", "135B", "105A", "105C", "16A"];

/// Where along the move a charge was incurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineItemLocation {
    Origin,
    Destination,
    #[default]
    Neither,
}

impl fmt::Display for LineItemLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineItemLocation::Origin => write!(f, "ORIGIN"),
            LineItemLocation::Destination => write!(f, "DESTINATION"),
            LineItemLocation::Neither => write!(f, "NEITHER"),
        }
    }
}

impl LineItemLocation {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ORIGIN" => Some(LineItemLocation::Origin),
            "DESTINATION" => Some(LineItemLocation::Destination),
            "NEITHER" => Some(LineItemLocation::Neither),
            _ => None,
        }
    }
}

/// Line item review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineItemStatus {
    #[default]
    Submitted,
    Approved,
}

impl fmt::Display for LineItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineItemStatus::Submitted => write!(f, "SUBMITTED"),
            LineItemStatus::Approved => write!(f, "APPROVED"),
        }
    }
}

impl LineItemStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "SUBMITTED" => Some(LineItemStatus::Submitted),
            "APPROVED" => Some(LineItemStatus::Approved),
            _ => None,
        }
    }
}

/// Which carrier discount applies to a tariff item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DiscountType {
    #[default]
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "HHG")]
    Hhg,
    #[serde(rename = "HHG_LINEHAUL_50")]
    HhgLinehaul50,
    #[serde(rename = "SIT")]
    Sit,
    #[serde(rename = "LINEHAUL")]
    Linehaul,
}

impl DiscountType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "NONE" => Some(DiscountType::None),
            "HHG" => Some(DiscountType::Hhg),
            "HHG_LINEHAUL_50" => Some(DiscountType::HhgLinehaul50),
            "SIT" => Some(DiscountType::Sit),
            "LINEHAUL" => Some(DiscountType::Linehaul),
            _ => None,
        }
    }
}

/// Tariff 400NG item definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Tariff400ngItem {
    pub id: Uuid,
    pub code: String,
    pub item: String,
    pub discount_type: DiscountType,
    pub allowed_location: LineItemLocation,
    pub requires_pre_approval: bool,
}

/// One priced charge on a shipment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentLineItem {
    pub id: Uuid,
    pub shipment_id: Uuid,
    pub item: Tariff400ngItem,
    pub quantity_1: BaseQuantity,
    pub quantity_2: BaseQuantity,
    pub location: LineItemLocation,
    pub status: LineItemStatus,
    pub amount: Option<Cents>,
    pub applied_rate: Option<Millicents>,
    pub invoice_id: Option<Uuid>,
    pub submitted_date: DateTime<Utc>,
    pub approved_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShipmentLineItem {
    /// True for the six items generated by the rate engine
    pub fn is_base_line_item(&self) -> bool {
        BASE_LINE_ITEM_CODES.contains(&self.item.code.as_str())
    }

    /// Approved accessorials that still need a price
    pub fn needs_pricing(&self) -> bool {
        !self.is_base_line_item()
            && self.status == LineItemStatus::Approved
            && self.invoice_id.is_none()
    }
}

impl Default for ShipmentLineItem {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            shipment_id: Uuid::nil(),
            item: Tariff400ngItem::default(),
            quantity_1: BaseQuantity::default(),
            quantity_2: BaseQuantity::default(),
            location: LineItemLocation::default(),
            status: LineItemStatus::default(),
            amount: None,
            applied_rate: None,
            invoice_id: None,
            submitted_date: now,
            approved_date: None,
            created_at: now,
            updated_at: now,
        }
    }
}
