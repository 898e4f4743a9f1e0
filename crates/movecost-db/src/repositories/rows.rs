//! Row types shared by several repositories

use movecost_core::models::{DiscountType, LineItemLocation, Tariff400ngItem};
use tracing::warn;
use uuid::Uuid;

/// Column list matching [`ItemRow`], for a `tariff400ng_items` alias `t`
pub(crate) const ITEM_COLUMNS: &str = "t.id AS item_id, t.code AS item_code, t.item AS item_name, \
     t.discount_type AS item_discount_type, t.allowed_location AS item_allowed_location, \
     t.requires_pre_approval AS item_requires_pre_approval";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ItemRow {
    pub item_id: Uuid,
    pub item_code: String,
    pub item_name: String,
    pub item_discount_type: String,
    pub item_allowed_location: String,
    pub item_requires_pre_approval: bool,
}

impl From<ItemRow> for Tariff400ngItem {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.item_id,
            discount_type: DiscountType::from_str(&row.item_discount_type).unwrap_or_else(|| {
                warn!(
                    "Unknown discount type {} on item {}",
                    row.item_discount_type, row.item_code
                );
                DiscountType::None
            }),
            allowed_location: parse_location(&row.item_allowed_location),
            code: row.item_code,
            item: row.item_name,
            requires_pre_approval: row.item_requires_pre_approval,
        }
    }
}

pub(crate) fn parse_location(s: &str) -> LineItemLocation {
    LineItemLocation::from_str(s).unwrap_or_default()
}
