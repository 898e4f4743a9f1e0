//! Tariff 400NG rate engine
//!
//! The engine is a request-scoped facade over the tariff tables, a distance
//! planner and the pricing policy tables. Every computation is a sequence of
//! dated tariff lookups; the first failed lookup aborts the computation with
//! its context attached, and nothing is defaulted.

mod accessorials;
mod costs;
mod line_items;
mod linehaul;
mod nonlinehaul;
mod ppm;
mod pricers;
mod sit;

pub use costs::{
    ComputedShipmentLineItemCharge, CostByShipment, CostComputation, CostDetail, CostDetails,
    CostScenario, FeeAndRate, LinehaulCostComputation, NonLinehaulCostComputation,
    SitComputation,
};
pub use ppm::{PpmLane, PpmMove};
pub use pricers::{Pricer, PricingTables};
pub use sit::MAX_SIT_DAYS;

use std::sync::Arc;

use chrono::NaiveDate;
use movecost_core::{models::ServiceArea, traits::TariffRepository, AppResult, ResultExt};
use movecost_route::Planner;

/// Rate engine bound to a tariff source and a distance planner
#[derive(Clone)]
pub struct RateEngine {
    tariff: Arc<dyn TariffRepository>,
    planner: Arc<dyn Planner>,
    pricing: Arc<PricingTables>,
}

impl RateEngine {
    /// Create an engine using the standard Tariff 400NG pricing tables
    pub fn new(tariff: Arc<dyn TariffRepository>, planner: Arc<dyn Planner>) -> Self {
        Self::with_pricing_tables(tariff, planner, PricingTables::standard())
    }

    pub fn with_pricing_tables(
        tariff: Arc<dyn TariffRepository>,
        planner: Arc<dyn Planner>,
        pricing: Arc<PricingTables>,
    ) -> Self {
        Self {
            tariff,
            planner,
            pricing,
        }
    }

    pub fn pricing_tables(&self) -> &PricingTables {
        &self.pricing
    }

    async fn service_area(&self, zip3: &str, date: NaiveDate) -> AppResult<ServiceArea> {
        self.tariff
            .service_area_for_zip3(zip3, date)
            .await
            .context(format!("Fetching service area for zip3 {}", zip3))
    }
}
