//! Tariff 400NG repository implementation
//!
//! Every rate table carries an inclusive `effective_date_lower` /
//! `effective_date_upper` pair. Weight, mileage and cwt-miles brackets are
//! half-open: `lower <= value < upper`.

use async_trait::async_trait;
use chrono::NaiveDate;
use movecost_core::{
    models::{
        Cents, DiscountRate, EffectiveDateRange, ItemRate, Millicents, Pound, ServiceArea,
        Tariff400ngItem,
    },
    traits::TariffRepository,
    AppError, AppResult,
};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, error, instrument};

use super::exactly_one;
use super::rows::{ItemRow, ITEM_COLUMNS};

/// PostgreSQL implementation of TariffRepository
pub struct PgTariffRepository {
    pool: PgPool,
}

impl PgTariffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn db_error(what: &str, e: sqlx::Error) -> AppError {
        error!("Database error fetching {}: {}", what, e);
        AppError::Database(format!("Failed to fetch {}: {}", what, e))
    }
}

#[async_trait]
impl TariffRepository for PgTariffRepository {
    #[instrument(skip(self))]
    async fn base_linehaul_rate(
        &self,
        mileage: i64,
        weight: Pound,
        date: NaiveDate,
    ) -> AppResult<Cents> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT rate_cents
            FROM tariff400ng_linehaul_rates
            WHERE distance_miles_lower <= $1 AND $1 < distance_miles_upper
              AND weight_lbs_lower <= $2 AND $2 < weight_lbs_upper
              AND $3 BETWEEN effective_date_lower AND effective_date_upper
            LIMIT 2
            "#,
        )
        .bind(mileage)
        .bind(weight.as_i64())
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_error("base linehaul rate", e))?;

        let (rate,) = exactly_one(rows, || {
            format!(
                "base linehaul rate for {} miles, {} on {}",
                mileage, weight, date
            )
        })?;
        debug!("Base linehaul rate: {} cents", rate);
        Ok(Cents(rate))
    }

    #[instrument(skip(self))]
    async fn service_area_for_zip3(&self, zip3: &str, date: NaiveDate) -> AppResult<ServiceArea> {
        let rows = sqlx::query_as::<sqlx::Postgres, ServiceAreaRow>(
            r#"
            SELECT
                sa.service_area, sa.name, sa.services_schedule, sa.linehaul_factor,
                sa.service_charge_cents, sa.sit_185a_rate_cents, sa.sit_185b_rate_cents,
                sa.sit_pd_schedule, sa.effective_date_lower, sa.effective_date_upper
            FROM tariff400ng_service_areas sa
            JOIN tariff400ng_zip3s z ON z.service_area = sa.service_area
            WHERE z.zip3 = $1
              AND $2 BETWEEN sa.effective_date_lower AND sa.effective_date_upper
            LIMIT 2
            "#,
        )
        .bind(zip3)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_error("service area", e))?;

        let row = exactly_one(rows, || {
            format!("400ng service area for zip3 {} on {}", zip3, date)
        })?;
        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn shorthaul_rate(&self, cwt_miles: i64, date: NaiveDate) -> AppResult<Cents> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT rate_cents
            FROM tariff400ng_shorthaul_rates
            WHERE cwt_miles_lower <= $1 AND $1 < cwt_miles_upper
              AND $2 BETWEEN effective_date_lower AND effective_date_upper
            LIMIT 2
            "#,
        )
        .bind(cwt_miles)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_error("shorthaul rate", e))?;

        let (rate,) = exactly_one(rows, || {
            format!("shorthaul rate for {} cwt-miles on {}", cwt_miles, date)
        })?;
        Ok(Cents(rate))
    }

    #[instrument(skip(self))]
    async fn full_pack_rate(
        &self,
        schedule: i32,
        weight: Pound,
        date: NaiveDate,
    ) -> AppResult<Cents> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT rate_cents
            FROM tariff400ng_full_pack_rates
            WHERE schedule = $1
              AND weight_lbs_lower <= $2 AND $2 < weight_lbs_upper
              AND $3 BETWEEN effective_date_lower AND effective_date_upper
            LIMIT 2
            "#,
        )
        .bind(schedule)
        .bind(weight.as_i64())
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_error("full pack rate", e))?;

        let (rate,) = exactly_one(rows, || {
            format!(
                "full pack rate for schedule {}, {} on {}",
                schedule, weight, date
            )
        })?;
        Ok(Cents(rate))
    }

    #[instrument(skip(self))]
    async fn full_unpack_rate(
        &self,
        schedule: i32,
        weight: Pound,
        date: NaiveDate,
    ) -> AppResult<Millicents> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT rate_millicents
            FROM tariff400ng_full_unpack_rates
            WHERE schedule = $1
              AND weight_lbs_lower <= $2 AND $2 < weight_lbs_upper
              AND $3 BETWEEN effective_date_lower AND effective_date_upper
            LIMIT 2
            "#,
        )
        .bind(schedule)
        .bind(weight.as_i64())
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_error("full unpack rate", e))?;

        let (rate,) = exactly_one(rows, || {
            format!(
                "full unpack rate for schedule {}, {} on {}",
                schedule, weight, date
            )
        })?;
        Ok(Millicents(rate))
    }

    #[instrument(skip(self))]
    async fn item_rate(
        &self,
        code: &str,
        schedule: i32,
        weight: Pound,
        date: NaiveDate,
    ) -> AppResult<ItemRate> {
        let rows = sqlx::query_as::<sqlx::Postgres, ItemRateRow>(
            r#"
            SELECT
                code, schedule, weight_lbs_lower, weight_lbs_upper, rate_cents,
                effective_date_lower, effective_date_upper
            FROM tariff400ng_item_rates
            WHERE code = $1
              AND (schedule = $2 OR schedule IS NULL)
              AND weight_lbs_lower <= $3 AND $3 < weight_lbs_upper
              AND $4 BETWEEN effective_date_lower AND effective_date_upper
            LIMIT 2
            "#,
        )
        .bind(code)
        .bind(schedule)
        .bind(weight.as_i64())
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_error("item rate", e))?;

        let row = exactly_one(rows, || {
            format!(
                "item rate for code {}, schedule {}, {} on {}",
                code, schedule, weight, date
            )
        })?;
        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn item_by_code(&self, code: &str) -> AppResult<Tariff400ngItem> {
        let query = format!(
            "SELECT {} FROM tariff400ng_items t WHERE t.code = $1 LIMIT 2",
            ITEM_COLUMNS
        );
        let rows = sqlx::query_as::<sqlx::Postgres, ItemRow>(&query)
            .bind(code)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::db_error("tariff400ng item", e))?;

        let row = exactly_one(rows, || format!("tariff400ng item {}", code))?;
        Ok(row.into())
    }

    /// Discounts of the best-value carrier serving the lane's traffic distribution list
    #[instrument(skip(self))]
    async fn ppm_discounts(
        &self,
        origin_zip5: &str,
        destination_zip5: &str,
        date: NaiveDate,
    ) -> AppResult<(DiscountRate, DiscountRate)> {
        let rows: Vec<(Decimal, Decimal)> = sqlx::query_as(
            r#"
            SELECT tp.linehaul_rate, tp.sit_rate
            FROM tariff400ng_zip3s oz
            LEFT JOIN tariff400ng_zip5_rate_areas oz5 ON oz5.zip5 = $1
            JOIN tariff400ng_zip3s dz ON dz.zip3 = LEFT($2, 3)
            JOIN traffic_distribution_lists tdl
              ON tdl.source_rate_area = COALESCE(oz5.rate_area, oz.rate_area)
             AND tdl.destination_region = dz.region
             AND tdl.code_of_service = 'D'
            JOIN transportation_service_provider_performances tp
              ON tp.traffic_distribution_list_id = tdl.id
            WHERE oz.zip3 = LEFT($1, 3)
              AND $3 BETWEEN tp.rate_cycle_start AND tp.rate_cycle_end
            ORDER BY tp.best_value_score DESC
            LIMIT 1
            "#,
        )
        .bind(origin_zip5)
        .bind(destination_zip5)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::db_error("PPM discount rates", e))?;

        let (linehaul, sit) = exactly_one(rows, || {
            format!(
                "discount rates for {} -> {} on {}",
                origin_zip5, destination_zip5, date
            )
        })?;
        Ok((DiscountRate::new(linehaul), DiscountRate::new(sit)))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ServiceAreaRow {
    service_area: String,
    name: String,
    services_schedule: i32,
    linehaul_factor: i64,
    service_charge_cents: i64,
    sit_185a_rate_cents: i64,
    sit_185b_rate_cents: i64,
    sit_pd_schedule: i32,
    effective_date_lower: NaiveDate,
    effective_date_upper: NaiveDate,
}

impl From<ServiceAreaRow> for ServiceArea {
    fn from(row: ServiceAreaRow) -> Self {
        Self {
            service_area: row.service_area,
            name: row.name,
            services_schedule: row.services_schedule,
            linehaul_factor: Cents(row.linehaul_factor),
            service_charge_cents: Cents(row.service_charge_cents),
            sit_185a_rate_cents: Cents(row.sit_185a_rate_cents),
            sit_185b_rate_cents: Cents(row.sit_185b_rate_cents),
            sit_pd_schedule: row.sit_pd_schedule,
            effective: EffectiveDateRange::new(row.effective_date_lower, row.effective_date_upper),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ItemRateRow {
    code: String,
    schedule: Option<i32>,
    weight_lbs_lower: i64,
    weight_lbs_upper: i64,
    rate_cents: i64,
    effective_date_lower: NaiveDate,
    effective_date_upper: NaiveDate,
}

impl From<ItemRateRow> for ItemRate {
    fn from(row: ItemRateRow) -> Self {
        Self {
            code: row.code,
            schedule: row.schedule,
            weight_lbs_lower: Pound(row.weight_lbs_lower),
            weight_lbs_upper: Pound(row.weight_lbs_upper),
            rate_cents: Cents(row.rate_cents),
            effective: EffectiveDateRange::new(row.effective_date_lower, row.effective_date_upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movecost_core::config::DatabaseConfig;

    #[test]
    fn test_service_area_row_conversion() {
        let lower = NaiveDate::from_ymd_opt(2019, 5, 15).unwrap();
        let upper = NaiveDate::from_ymd_opt(2020, 5, 14).unwrap();
        let area: ServiceArea = ServiceAreaRow {
            service_area: "197".to_string(),
            name: "Tampa, FL".to_string(),
            services_schedule: 2,
            linehaul_factor: 69,
            service_charge_cents: 663,
            sit_185a_rate_cents: 1557,
            sit_185b_rate_cents: 53,
            sit_pd_schedule: 2,
            effective_date_lower: lower,
            effective_date_upper: upper,
        }
        .into();

        assert_eq!(area.linehaul_factor, Cents(69));
        assert_eq!(area.sit_185a_rate_cents, Cents(1557));
        assert!(area.effective.contains(upper));
    }

    #[tokio::test]
    #[ignore] // Requires database with tariff data
    async fn test_base_linehaul_rate_lookup() {
        let config = DatabaseConfig {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgresql://localhost/movecost".to_string()),
            max_connections: 2,
        };
        let pool = crate::create_pool(&config).await.unwrap();
        let repo = PgTariffRepository::new(pool);

        let date = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
        let rate = repo
            .base_linehaul_rate(1234, Pound(2000), date)
            .await
            .unwrap();
        assert!(rate > Cents::ZERO);

        let err = repo
            .base_linehaul_rate(1234, Pound(2000), NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
