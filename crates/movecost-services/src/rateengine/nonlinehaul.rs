//! Service, pack and unpack charges

use chrono::NaiveDate;
use movecost_core::{
    models::{zip5_to_zip3, Cwt, Pound},
    AppResult, ResultExt,
};
use tracing::{info, instrument};

use super::{FeeAndRate, NonLinehaulCostComputation, RateEngine};

impl RateEngine {
    /// Origin or destination service charge (135A/135B)
    pub async fn service_fee_cents(
        &self,
        cwt: Cwt,
        zip3: &str,
        date: NaiveDate,
    ) -> AppResult<FeeAndRate> {
        let service_area = self.service_area(zip3, date).await?;
        let rate = service_area.service_charge_cents;
        Ok(FeeAndRate::new(
            rate.multiply(cwt.as_i64()),
            rate.to_millicents(),
        ))
    }

    /// Full pack (105A), priced on the origin services schedule
    pub async fn full_pack_cents(
        &self,
        cwt: Cwt,
        weight: Pound,
        zip3: &str,
        date: NaiveDate,
    ) -> AppResult<FeeAndRate> {
        let service_area = self.service_area(zip3, date).await?;
        let rate = self
            .tariff
            .full_pack_rate(service_area.services_schedule, weight, date)
            .await
            .context(format!(
                "Fetching full pack rate for schedule {}",
                service_area.services_schedule
            ))?;

        Ok(FeeAndRate::new(rate.multiply(cwt.as_i64()), rate.to_millicents()))
    }

    /// Full unpack (105C), priced on the destination services schedule
    ///
    /// Unpack rates are published in millicents per CWT.
    pub async fn full_unpack_cents(
        &self,
        cwt: Cwt,
        weight: Pound,
        zip3: &str,
        date: NaiveDate,
    ) -> AppResult<FeeAndRate> {
        let service_area = self.service_area(zip3, date).await?;
        let rate = self
            .tariff
            .full_unpack_rate(service_area.services_schedule, weight, date)
            .await
            .context(format!(
                "Fetching full unpack rate for schedule {}",
                service_area.services_schedule
            ))?;

        Ok(FeeAndRate::new(rate.multiply(cwt.as_i64()).to_cents(), rate))
    }

    #[instrument(skip(self))]
    pub async fn non_linehaul_charge_computation(
        &self,
        weight: Pound,
        origin_zip5: &str,
        destination_zip5: &str,
        date: NaiveDate,
    ) -> AppResult<NonLinehaulCostComputation> {
        let cwt = weight.to_cwt();
        let origin_zip3 = zip5_to_zip3(origin_zip5);
        let destination_zip3 = zip5_to_zip3(destination_zip5);

        let origin_service = self.service_fee_cents(cwt, origin_zip3, date).await?;
        let destination_service = self.service_fee_cents(cwt, destination_zip3, date).await?;
        let pack = self.full_pack_cents(cwt, weight, origin_zip3, date).await?;
        let unpack = self
            .full_unpack_cents(cwt, weight, destination_zip3, date)
            .await?;

        info!(
            origin_service_fee = origin_service.fee.as_i64(),
            destination_service_fee = destination_service.fee.as_i64(),
            pack_fee = pack.fee.as_i64(),
            unpack_fee = unpack.fee.as_i64(),
            "Non-linehaul charges calculated"
        );

        Ok(NonLinehaulCostComputation {
            origin_service,
            destination_service,
            pack,
            unpack,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{date, engine};
    use super::*;
    use movecost_core::models::{Cents, Millicents};

    #[tokio::test]
    async fn test_non_linehaul_breakdown() {
        let engine = engine(1234);
        let cost = engine
            .non_linehaul_charge_computation(Pound(2000), "39574", "33633", date())
            .await
            .unwrap();

        assert_eq!(
            cost.origin_service,
            FeeAndRate::new(Cents(7000), Millicents(350_000))
        );
        assert_eq!(
            cost.destination_service,
            FeeAndRate::new(Cents(13260), Millicents(663_000))
        );
        assert_eq!(cost.pack, FeeAndRate::new(Cents(108580), Millicents(5_429_000)));
        assert_eq!(cost.unpack, FeeAndRate::new(Cents(10858), Millicents(542_900)));
    }

    #[tokio::test]
    async fn test_unpack_rounds_millicents() {
        let engine = engine(1234);
        // 3 cwt * 542900 millicents = 1628.7 cents
        let unpack = engine
            .full_unpack_cents(Cwt(3), Pound(300), "336", date())
            .await
            .unwrap();
        assert_eq!(unpack.fee, Cents(1629));
    }

    #[tokio::test]
    async fn test_first_failure_aborts() {
        let engine = engine(1234);
        let err = engine
            .non_linehaul_charge_computation(Pound(2000), "39574", "00000", date())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
