//! Planner doubles for tests and local development

use std::sync::Arc;

use async_trait::async_trait;
use movecost_core::models::Address;

use crate::dtod::{DtodPlanner, Zip5Distance};
use crate::error::PlannerResult;
use crate::mock_dtod::MockDtodDistance;
use crate::planner::{LatLong, Planner};
use crate::zip::format_zip5;

/// Answers every query with the same mileage
#[derive(Debug, Clone, Copy)]
pub struct ConstantPlanner {
    miles: i64,
}

impl ConstantPlanner {
    pub fn new(miles: i64) -> Self {
        Self { miles }
    }
}

#[async_trait]
impl Planner for ConstantPlanner {
    async fn transit_distance(&self, _: &Address, _: &Address) -> PlannerResult<i64> {
        Ok(self.miles)
    }

    async fn lat_long_transit_distance(&self, _: LatLong, _: LatLong) -> PlannerResult<i64> {
        Ok(self.miles)
    }

    async fn zip5_transit_distance(&self, _: &str, _: &str) -> PlannerResult<i64> {
        Ok(self.miles)
    }

    async fn zip3_transit_distance(&self, _: &str, _: &str) -> PlannerResult<i64> {
        Ok(self.miles)
    }
}

/// Deterministic planner backed by the mock DTOD source
pub struct MockPlanner {
    inner: DtodPlanner,
    source: MockDtodDistance,
}

impl MockPlanner {
    pub fn new() -> Self {
        Self {
            inner: DtodPlanner::new(Arc::new(MockDtodDistance::new())),
            source: MockDtodDistance::new(),
        }
    }
}

impl Default for MockPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Planner for MockPlanner {
    async fn transit_distance(
        &self,
        source: &Address,
        destination: &Address,
    ) -> PlannerResult<i64> {
        self.inner.transit_distance(source, destination).await
    }

    async fn lat_long_transit_distance(
        &self,
        source: LatLong,
        destination: LatLong,
    ) -> PlannerResult<i64> {
        // Manhattan distance in degrees, about 69 miles per degree
        let degrees = (source.latitude - destination.latitude).abs()
            + (source.longitude - destination.longitude).abs();
        Ok((degrees * 69.0).round() as i64)
    }

    async fn zip5_transit_distance(&self, source: &str, destination: &str) -> PlannerResult<i64> {
        self.inner.zip5_transit_distance(source, destination).await
    }

    async fn zip3_transit_distance(&self, source: &str, destination: &str) -> PlannerResult<i64> {
        let source = format_zip5(&format!("{}00", source))?;
        let destination = format_zip5(&format!("{}00", destination))?;
        self.source.dtod_zip5_distance(&source, &destination).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_constant_planner() {
        let planner = ConstantPlanner::new(1234);
        assert_eq!(planner.zip5_transit_distance("39574", "33633").await.unwrap(), 1234);
        assert_eq!(
            planner
                .transit_distance(
                    &Address::from_postal_code("39574"),
                    &Address::from_postal_code("33633")
                )
                .await
                .unwrap(),
            1234
        );
    }

    #[tokio::test]
    async fn test_mock_planner_matches_mock_source() {
        let planner = MockPlanner::new();
        let direct = MockDtodDistance::new()
            .dtod_zip5_distance("39574", "33633")
            .await
            .unwrap();
        assert_eq!(
            planner.zip5_transit_distance("39574", "33633").await.unwrap(),
            direct
        );
        assert_eq!(
            planner.zip3_transit_distance("395", "395").await.unwrap(),
            0
        );
    }
}
