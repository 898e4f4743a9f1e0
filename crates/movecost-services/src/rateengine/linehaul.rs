//! Linehaul charges

use chrono::NaiveDate;
use movecost_core::{
    models::{zip5_to_zip3, Cents, Cwt, Millicents, Pound},
    AppResult, ResultExt,
};
use tracing::{debug, info, instrument};

use super::{FeeAndRate, LinehaulCostComputation, RateEngine};

/// Shorthaul only applies to moves shorter than this
const SHORTHAUL_MAX_MILES: i64 = 800;

impl RateEngine {
    /// Miles between two ZIP5s, as reported by the planner
    #[instrument(skip(self))]
    pub async fn determine_mileage(
        &self,
        origin_zip5: &str,
        destination_zip5: &str,
    ) -> AppResult<i64> {
        let mileage = self
            .planner
            .zip5_transit_distance(origin_zip5, destination_zip5)
            .await
            .context("error calculating mileage")?;
        debug!("Mileage {} -> {}: {}", origin_zip5, destination_zip5, mileage);
        Ok(mileage)
    }

    /// Base linehaul (BLH)
    pub async fn base_linehaul(
        &self,
        mileage: i64,
        weight: Pound,
        date: NaiveDate,
    ) -> AppResult<Cents> {
        self.tariff
            .base_linehaul_rate(mileage, weight, date)
            .await
            .context(format!(
                "Fetching base linehaul rate for {} miles and {}",
                mileage, weight
            ))
    }

    /// Origin or destination linehaul factor (OLF/DLF)
    pub async fn linehaul_factors(
        &self,
        cwt: Cwt,
        zip3: &str,
        date: NaiveDate,
    ) -> AppResult<Cents> {
        let service_area = self.service_area(zip3, date).await?;
        Ok(service_area.linehaul_factor.multiply(cwt.as_i64()))
    }

    /// Shorthaul (SH) charge
    pub async fn shorthaul_charge(
        &self,
        mileage: i64,
        cwt: Cwt,
        date: NaiveDate,
    ) -> AppResult<Cents> {
        if mileage >= SHORTHAUL_MAX_MILES {
            return Ok(Cents::ZERO);
        }

        let cwt_miles = mileage * cwt.as_i64();
        self.tariff
            .shorthaul_rate(cwt_miles, date)
            .await
            .context(format!("Fetching shorthaul rate for {} cwt-miles", cwt_miles))
    }

    /// Fuel surcharge (16A)
    ///
    /// Not yet priced from the fuel index, so it contributes nothing.
    pub async fn fuel_surcharge_computation(&self) -> AppResult<FeeAndRate> {
        Ok(FeeAndRate::new(Cents::ZERO, Millicents(0)))
    }

    /// Full linehaul breakdown for a move of `mileage` miles
    #[instrument(skip(self))]
    pub async fn linehaul_charge_computation(
        &self,
        weight: Pound,
        origin_zip5: &str,
        destination_zip5: &str,
        mileage: i64,
        date: NaiveDate,
    ) -> AppResult<LinehaulCostComputation> {
        let cwt = weight.to_cwt();
        let origin_zip3 = zip5_to_zip3(origin_zip5);
        let destination_zip3 = zip5_to_zip3(destination_zip5);

        let base_linehaul = self.base_linehaul(mileage, weight, date).await?;
        let origin_linehaul_factor = self.linehaul_factors(cwt, origin_zip3, date).await?;
        let destination_linehaul_factor =
            self.linehaul_factors(cwt, destination_zip3, date).await?;
        let shorthaul_charge = self.shorthaul_charge(mileage, cwt, date).await?;
        let fuel_surcharge = self.fuel_surcharge_computation().await?;

        let linehaul_charge_total =
            base_linehaul + origin_linehaul_factor + destination_linehaul_factor + shorthaul_charge;

        info!(
            base_linehaul = base_linehaul.as_i64(),
            origin_linehaul_factor = origin_linehaul_factor.as_i64(),
            destination_linehaul_factor = destination_linehaul_factor.as_i64(),
            shorthaul_charge = shorthaul_charge.as_i64(),
            linehaul_charge_total = linehaul_charge_total.as_i64(),
            fuel_surcharge = fuel_surcharge.fee.as_i64(),
            mileage,
            "Linehaul charge total calculated"
        );

        Ok(LinehaulCostComputation {
            base_linehaul,
            origin_linehaul_factor,
            destination_linehaul_factor,
            shorthaul_charge,
            linehaul_charge_total,
            mileage,
            fuel_surcharge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{date, engine, FixtureTariff};
    use super::*;
    use movecost_route::ConstantPlanner;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_linehaul_breakdown() {
        let engine = engine(1234);
        let linehaul = engine
            .linehaul_charge_computation(Pound(2000), "39574", "33633", 1234, date())
            .await
            .unwrap();

        assert_eq!(linehaul.base_linehaul, Cents(296640));
        assert_eq!(linehaul.origin_linehaul_factor, Cents(57 * 20));
        assert_eq!(linehaul.destination_linehaul_factor, Cents(69 * 20));
        assert_eq!(linehaul.shorthaul_charge, Cents::ZERO);
        assert_eq!(linehaul.linehaul_charge_total, Cents(299160));
        assert_eq!(linehaul.mileage, 1234);
    }

    #[tokio::test]
    async fn test_fuel_surcharge_excluded_from_total() {
        let engine = engine(1234);
        let linehaul = engine
            .linehaul_charge_computation(Pound(2000), "39574", "33633", 1234, date())
            .await
            .unwrap();

        assert_eq!(linehaul.fuel_surcharge, FeeAndRate::default());
        assert_eq!(
            linehaul.linehaul_charge_total,
            linehaul.base_linehaul
                + linehaul.origin_linehaul_factor
                + linehaul.destination_linehaul_factor
                + linehaul.shorthaul_charge
        );
    }

    #[tokio::test]
    async fn test_shorthaul_zero_at_800_miles() {
        let tariff = Arc::new(FixtureTariff::default());
        let engine = RateEngine::new(tariff.clone(), Arc::new(ConstantPlanner::new(800)));

        let charge = engine.shorthaul_charge(800, Cwt(20), date()).await.unwrap();
        assert_eq!(charge, Cents::ZERO);
        assert!(tariff.shorthaul_queries().is_empty());

        let charge = engine.shorthaul_charge(2000, Cwt(20), date()).await.unwrap();
        assert_eq!(charge, Cents::ZERO);
    }

    #[tokio::test]
    async fn test_shorthaul_uses_cwt_miles() {
        let tariff = Arc::new(FixtureTariff::default());
        let engine = RateEngine::new(tariff.clone(), Arc::new(ConstantPlanner::new(799)));

        let charge = engine.shorthaul_charge(799, Cwt(20), date()).await.unwrap();
        assert_eq!(charge, FixtureTariff::SHORTHAUL_RATE);
        assert_eq!(tariff.shorthaul_queries(), vec![799 * 20]);
    }

    #[tokio::test]
    async fn test_determine_mileage_uses_planner() {
        let engine = engine(321);
        assert_eq!(engine.determine_mileage("39574", "33633").await.unwrap(), 321);
    }

    #[tokio::test]
    async fn test_missing_service_area_aborts() {
        let engine = engine(1234);
        let err = engine
            .linehaul_charge_computation(Pound(2000), "99999", "33633", 1234, date())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("999"));
    }
}
