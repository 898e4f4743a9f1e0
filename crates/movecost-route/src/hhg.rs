//! Household goods distance policy
//!
//! Short moves (same ZIP3, or two ZIP3s served by the same base point city)
//! are measured by DTOD. Everything else uses the ZIP3-to-ZIP3 mileage table,
//! which stores each pair once with the smaller ZIP3 first.

use std::sync::Arc;

use async_trait::async_trait;
use movecost_core::models::Address;
use movecost_core::traits::ZipRepository;
use tracing::{debug, instrument};

use crate::dtod::Zip5Distance;
use crate::error::{PlannerError, PlannerResult};
use crate::planner::{LatLong, Planner};
use crate::zip::format_zip5;

/// Distance assigned to a move within a single ZIP5
const SAME_ZIP5_MILES: i64 = 1;

pub struct HhgPlanner {
    dtod: Arc<dyn Zip5Distance>,
    zips: Arc<dyn ZipRepository>,
    use_dtod: bool,
}

impl HhgPlanner {
    pub fn new(dtod: Arc<dyn Zip5Distance>, zips: Arc<dyn ZipRepository>) -> Self {
        Self {
            dtod,
            zips,
            use_dtod: false,
        }
    }

    /// Route every ZIP5 query through DTOD
    pub fn with_dtod_only(mut self) -> Self {
        self.use_dtod = true;
        self
    }

    /// Look up the mileage table in whichever order the pair is stored
    #[instrument(skip(self))]
    pub async fn zip3_table_distance(&self, pickup: &str, destination: &str) -> PlannerResult<i64> {
        if pickup == destination {
            return Err(PlannerError::SameZip3(pickup.to_string()));
        }

        let (from, to) = if pickup < destination {
            (pickup, destination)
        } else {
            (destination, pickup)
        };

        let miles = self.zips.zip3_distance(from, to).await?;
        debug!("Zip3 table distance {} -> {}: {} miles", from, to, miles);
        Ok(miles)
    }

    async fn same_base_point_city(&self, pickup: &str, destination: &str) -> PlannerResult<bool> {
        let pickup = self.zips.zip3_reference(pickup).await?;
        let destination = self.zips.zip3_reference(destination).await?;
        Ok(pickup.base_point_city == destination.base_point_city
            && pickup.state == destination.state)
    }
}

#[async_trait]
impl Planner for HhgPlanner {
    async fn transit_distance(
        &self,
        source: &Address,
        destination: &Address,
    ) -> PlannerResult<i64> {
        self.zip5_transit_distance(&source.postal_code, &destination.postal_code)
            .await
    }

    async fn lat_long_transit_distance(
        &self,
        _source: LatLong,
        _destination: LatLong,
    ) -> PlannerResult<i64> {
        Err(PlannerError::Unsupported("HHG lat/long distance"))
    }

    #[instrument(skip(self))]
    async fn zip5_transit_distance(&self, source: &str, destination: &str) -> PlannerResult<i64> {
        let pickup = format_zip5(source)?;
        let destination = format_zip5(destination)?;

        if pickup == destination {
            return Ok(SAME_ZIP5_MILES);
        }

        let (pickup_zip3, destination_zip3) = (&pickup[0..3], &destination[0..3]);

        if self.use_dtod || pickup_zip3 == destination_zip3 {
            return self.dtod.dtod_zip5_distance(&pickup, &destination).await;
        }

        if self
            .same_base_point_city(pickup_zip3, destination_zip3)
            .await?
        {
            debug!(
                "Zip3s {} and {} share a base point city, using DTOD",
                pickup_zip3, destination_zip3
            );
            return self.dtod.dtod_zip5_distance(&pickup, &destination).await;
        }

        self.zip3_table_distance(pickup_zip3, destination_zip3).await
    }

    async fn zip3_transit_distance(&self, source: &str, destination: &str) -> PlannerResult<i64> {
        self.zip3_table_distance(source, destination).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movecost_core::models::Zip3Reference;
    use movecost_core::AppError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingDtod {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Zip5Distance for CountingDtod {
        async fn dtod_zip5_distance(&self, _: &str, _: &str) -> PlannerResult<i64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(42)
        }
    }

    struct InMemoryZips {
        references: HashMap<String, Zip3Reference>,
        distances: HashMap<(String, String), i64>,
    }

    #[async_trait]
    impl ZipRepository for InMemoryZips {
        async fn zip3_reference(&self, zip3: &str) -> Result<Zip3Reference, AppError> {
            self.references
                .get(zip3)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("zip3 {}", zip3)))
        }

        async fn zip3_distance(&self, from: &str, to: &str) -> Result<i64, AppError> {
            self.distances
                .get(&(from.to_string(), to.to_string()))
                .copied()
                .ok_or_else(|| AppError::NotFound(format!("distance {} -> {}", from, to)))
        }
    }

    fn reference(zip3: &str, city: &str, state: &str) -> Zip3Reference {
        Zip3Reference {
            zip3: zip3.to_string(),
            base_point_city: city.to_string(),
            state: state.to_string(),
            service_area: "1".to_string(),
            rate_area: "US1".to_string(),
            region: "1".to_string(),
        }
    }

    fn planner() -> (HhgPlanner, Arc<CountingDtod>) {
        let dtod = Arc::new(CountingDtod {
            calls: AtomicUsize::new(0),
        });
        let zips = InMemoryZips {
            references: [
                reference("395", "Gulfport", "MS"),
                reference("336", "Tampa", "FL"),
                reference("220", "Washington", "DC"),
                reference("222", "Washington", "DC"),
            ]
            .into_iter()
            .map(|r| (r.zip3.clone(), r))
            .collect(),
            distances: HashMap::from([(("336".to_string(), "395".to_string()), 610)]),
        };
        (HhgPlanner::new(dtod.clone(), Arc::new(zips)), dtod)
    }

    #[tokio::test]
    async fn test_identical_zip5_is_one_mile() {
        let (planner, dtod) = planner();
        assert_eq!(planner.zip5_transit_distance("39574", "39574").await.unwrap(), 1);
        assert_eq!(dtod.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_same_zip3_uses_dtod() {
        let (planner, dtod) = planner();
        assert_eq!(planner.zip5_transit_distance("39574", "39503").await.unwrap(), 42);
        assert_eq!(dtod.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_shared_base_point_city_uses_dtod() {
        let (planner, dtod) = planner();
        assert_eq!(planner.zip5_transit_distance("22030", "22201").await.unwrap(), 42);
        assert_eq!(dtod.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_table_lookup_is_symmetric() {
        let (planner, dtod) = planner();
        assert_eq!(planner.zip5_transit_distance("39574", "33633").await.unwrap(), 610);
        assert_eq!(planner.zip5_transit_distance("33633", "39574").await.unwrap(), 610);
        assert_eq!(dtod.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dtod_override() {
        let (planner, dtod) = planner();
        let planner = planner.with_dtod_only();
        assert_eq!(planner.zip5_transit_distance("39574", "33633").await.unwrap(), 42);
        assert_eq!(dtod.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_table_self_query_errors() {
        let (planner, _) = planner();
        for zip3 in ["395", "336"] {
            let err = planner.zip3_transit_distance(zip3, zip3).await.unwrap_err();
            assert!(matches!(err, PlannerError::SameZip3(_)));
        }
    }

    #[tokio::test]
    async fn test_missing_reference_propagates() {
        let (planner, _) = planner();
        let err = planner
            .zip5_transit_distance("39574", "90210")
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::Lookup(ref e) if e.is_not_found()));
    }
}
