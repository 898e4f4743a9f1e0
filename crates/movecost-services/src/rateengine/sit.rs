//! Storage in transit

use chrono::NaiveDate;
use movecost_core::{
    models::{Cents, Cwt},
    AppError, AppResult, ResultExt,
};
use tracing::debug;

use super::{RateEngine, SitComputation};

/// Longest SIT stay a move is entitled to
pub const MAX_SIT_DAYS: i64 = 90;

/// SIT pickup and delivery
const SIT_PD_CODE: &str = "210A";

impl RateEngine {
    /// SIT charge for a stay of `days_in_sit` days
    ///
    /// The first day is billed at 185A and each additional day at 185B. Only
    /// non-PPM moves pay the 210A pickup and delivery charge.
    pub async fn sit_charge(
        &self,
        cwt: Cwt,
        days_in_sit: i64,
        zip3: &str,
        date: NaiveDate,
        is_ppm: bool,
    ) -> AppResult<SitComputation> {
        if days_in_sit == 0 {
            return Ok(SitComputation::default());
        }
        if days_in_sit < 0 {
            return Err(AppError::InvalidInput(format!(
                "requested SIT charge for negative days in SIT: {}",
                days_in_sit
            )));
        }

        let service_area = self.service_area(zip3, date).await?;
        let first_day = service_area.sit_185a_rate_cents.multiply(cwt.as_i64());
        let additional_days = service_area
            .sit_185b_rate_cents
            .multiply(cwt.as_i64())
            .multiply(days_in_sit - 1);

        let pd_part = if is_ppm {
            Cents::ZERO
        } else {
            let rate = self
                .tariff
                .item_rate(SIT_PD_CODE, service_area.sit_pd_schedule, cwt.to_pounds(), date)
                .await
                .context("Fetching SIT pickup/delivery rate")?;
            rate.rate_cents.multiply(cwt.as_i64())
        };

        debug!(
            "SIT for {} days: first day {}, additional days {}, P/D {}",
            days_in_sit, first_day, additional_days, pd_part
        );

        Ok(SitComputation {
            sit_part: first_day + additional_days,
            pd_part,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{date, engine};
    use super::*;

    #[tokio::test]
    async fn test_zero_days_is_free() {
        let engine = engine(1234);
        let sit = engine.sit_charge(Cwt(20), 0, "000", date(), true).await.unwrap();
        assert_eq!(sit, SitComputation::default());
    }

    #[tokio::test]
    async fn test_negative_days_rejected() {
        let engine = engine(1234);
        let err = engine.sit_charge(Cwt(20), -1, "336", date(), true).await.unwrap_err();
        assert_eq!(err.error_code(), "invalid_input");
    }

    #[tokio::test]
    async fn test_ppm_sit_has_no_pd_part() {
        let engine = engine(1234);
        let sit = engine.sit_charge(Cwt(20), 30, "336", date(), true).await.unwrap();
        assert_eq!(sit.sit_part, Cents(1557 * 20 + 53 * 20 * 29));
        assert_eq!(sit.pd_part, Cents::ZERO);
    }

    #[tokio::test]
    async fn test_hhg_sit_adds_pd_part() {
        let engine = engine(1234);
        let sit = engine.sit_charge(Cwt(20), 1, "336", date(), false).await.unwrap();
        assert_eq!(sit.sit_part, Cents(1557 * 20));
        assert_eq!(sit.pd_part, Cents(2000 * 20));
    }
}
