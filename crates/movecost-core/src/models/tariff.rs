//! Tariff 400NG reference rows
//!
//! Every rate table row is valid for an inclusive effective date range, and
//! lookups must resolve to exactly one row containing the as-of date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::unit::{Cents, Pound};

/// Inclusive `[lower, upper]` date range a tariff row applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveDateRange {
    pub lower: NaiveDate,
    pub upper: NaiveDate,
}

impl EffectiveDateRange {
    pub fn new(lower: NaiveDate, upper: NaiveDate) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.lower <= date && date <= self.upper
    }
}

/// A tariff service area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceArea {
    pub service_area: String,
    pub name: String,
    pub services_schedule: i32,
    pub linehaul_factor: Cents,
    pub service_charge_cents: Cents,
    /// SIT first day and warehouse charge
    pub sit_185a_rate_cents: Cents,
    /// SIT additional day charge
    pub sit_185b_rate_cents: Cents,
    pub sit_pd_schedule: i32,
    pub effective: EffectiveDateRange,
}

/// Generic per-item rate, bracketed by schedule and weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRate {
    pub code: String,
    pub schedule: Option<i32>,
    pub weight_lbs_lower: Pound,
    pub weight_lbs_upper: Pound,
    pub rate_cents: Cents,
    pub effective: EffectiveDateRange,
}

/// ZIP3 reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zip3Reference {
    pub zip3: String,
    pub base_point_city: String,
    pub state: String,
    pub service_area: String,
    pub rate_area: String,
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_range_is_inclusive() {
        let range = EffectiveDateRange::new(
            NaiveDate::from_ymd_opt(2019, 5, 15).unwrap(),
            NaiveDate::from_ymd_opt(2019, 9, 30).unwrap(),
        );

        assert!(range.contains(NaiveDate::from_ymd_opt(2019, 5, 15).unwrap()));
        assert!(range.contains(NaiveDate::from_ymd_opt(2019, 9, 30).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2019, 10, 1).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2019, 5, 14).unwrap()));
    }
}
