//! Personally procured move (PPM) costs
//!
//! A PPM is reimbursed at what the government would have paid a carrier
//! for the same lane. The lane distance is supplied by the caller instead
//! of the planner. Weights under 1000 lb are priced at 1000 lb and then
//! prorated by weight. SIT is reported beside the GCC.

use chrono::NaiveDate;
use movecost_core::{
    models::{zip5_to_zip3, DiscountRate, Pound},
    AppResult, ResultExt,
};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use super::{CostComputation, CostDetails, RateEngine, MAX_SIT_DAYS};

/// Lightest weight priced at its own rate
const PPM_MINIMUM_WEIGHT: Pound = Pound(1000);

/// One origin-destination pair of a PPM
#[derive(Debug, Clone)]
pub struct PpmLane {
    pub weight: Pound,
    pub origin_zip5: String,
    pub destination_zip5: String,
    pub distance_miles: i64,
    pub date: NaiveDate,
    pub days_in_sit: i64,
}

/// A PPM with two candidate origins
#[derive(Debug, Clone)]
pub struct PpmMove {
    pub weight: Pound,
    pub origin_pickup_zip5: String,
    pub origin_duty_location_zip5: String,
    pub destination_zip5: String,
    pub distance_miles_from_pickup: i64,
    pub distance_miles_from_duty_location: i64,
    pub date: NaiveDate,
    pub days_in_sit: i64,
}

impl PpmMove {
    fn lane(&self, origin_zip5: &str, distance_miles: i64) -> PpmLane {
        PpmLane {
            weight: self.weight,
            origin_zip5: origin_zip5.to_string(),
            destination_zip5: self.destination_zip5.clone(),
            distance_miles,
            date: self.date,
            days_in_sit: self.days_in_sit,
        }
    }
}

impl RateEngine {
    /// Cost of a PPM lane at the given carrier discounts
    #[instrument(skip(self), fields(origin = %lane.origin_zip5, destination = %lane.destination_zip5))]
    pub async fn compute_ppm(
        &self,
        lane: &PpmLane,
        lh_discount: DiscountRate,
        sit_discount: DiscountRate,
    ) -> AppResult<CostComputation> {
        let (weight, prorate_factor) = if lane.weight < PPM_MINIMUM_WEIGHT {
            (
                PPM_MINIMUM_WEIGHT,
                Some(Decimal::from(lane.weight.as_i64()) / Decimal::from(PPM_MINIMUM_WEIGHT.as_i64())),
            )
        } else {
            (lane.weight, None)
        };
        let cwt = weight.to_cwt();

        let mut linehaul = self
            .linehaul_charge_computation(
                weight,
                &lane.origin_zip5,
                &lane.destination_zip5,
                lane.distance_miles,
                lane.date,
            )
            .await?;
        let mut non_linehaul = self
            .non_linehaul_charge_computation(
                weight,
                &lane.origin_zip5,
                &lane.destination_zip5,
                lane.date,
            )
            .await?;

        linehaul.linehaul_charge_total = lh_discount.apply(linehaul.linehaul_charge_total);
        non_linehaul.apply_discount(lh_discount);

        // SIT carries its own discount rate
        let destination_zip3 = zip5_to_zip3(&lane.destination_zip5);
        let sit_fee = self
            .sit_charge(cwt, lane.days_in_sit, destination_zip3, lane.date, true)
            .await?
            .apply_discount(lh_discount, sit_discount);
        let sit_max = self
            .sit_charge(cwt, MAX_SIT_DAYS, destination_zip3, lane.date, true)
            .await?
            .apply_discount(lh_discount, sit_discount);

        let mut cost = CostComputation::new(
            linehaul,
            non_linehaul,
            sit_fee,
            sit_max,
            lh_discount,
            sit_discount,
            lane.weight,
        );

        if let Some(factor) = prorate_factor {
            cost.scale(factor);
        }

        info!(
            gcc = cost.gcc.as_i64(),
            sit_fee = cost.sit_fee.as_i64(),
            sit_max = cost.sit_max.as_i64(),
            "PPM cost calculated"
        );
        Ok(cost)
    }

    /// Cost of a PPM lane at the discounts of its best-value carrier
    pub async fn compute_ppm_including_lh_discount(
        &self,
        lane: &PpmLane,
    ) -> AppResult<CostComputation> {
        let (lh_discount, sit_discount) = self
            .tariff
            .ppm_discounts(&lane.origin_zip5, &lane.destination_zip5, lane.date)
            .await
            .context(format!(
                "Fetching PPM discounts for {} -> {}",
                lane.origin_zip5, lane.destination_zip5
            ))?;

        self.compute_ppm(lane, lh_discount, sit_discount).await
    }

    /// PPM costs from the pickup ZIP and from the origin duty location ZIP
    #[instrument(skip(self, ppm))]
    pub async fn compute_ppm_move_costs(&self, ppm: &PpmMove) -> AppResult<CostDetails> {
        let from_pickup = self
            .compute_ppm_including_lh_discount(
                &ppm.lane(&ppm.origin_pickup_zip5, ppm.distance_miles_from_pickup),
            )
            .await?;
        let from_duty_location = self
            .compute_ppm_including_lh_discount(&ppm.lane(
                &ppm.origin_duty_location_zip5,
                ppm.distance_miles_from_duty_location,
            ))
            .await?;

        let details = CostDetails::new(from_pickup, from_duty_location);
        info!("Winning PPM origin: {}", details.winning_scenario());
        Ok(details)
    }
}
