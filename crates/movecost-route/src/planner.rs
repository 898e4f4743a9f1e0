//! The planner abstraction

use async_trait::async_trait;
use movecost_core::models::Address;
use serde::{Deserialize, Serialize};

use crate::error::PlannerResult;

/// A latitude/longitude pair, only ever used in-flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLong {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLong {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `lat,long` query-string form
    pub fn coords(&self) -> String {
        format!("{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// Distance in whole miles between two locations
#[async_trait]
pub trait Planner: Send + Sync {
    async fn transit_distance(&self, source: &Address, destination: &Address)
        -> PlannerResult<i64>;

    async fn lat_long_transit_distance(
        &self,
        source: LatLong,
        destination: LatLong,
    ) -> PlannerResult<i64>;

    async fn zip5_transit_distance(&self, source: &str, destination: &str) -> PlannerResult<i64>;

    async fn zip3_transit_distance(&self, source: &str, destination: &str) -> PlannerResult<i64>;
}
