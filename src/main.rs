//! MoveCost recalculation sweep
//!
//! Reprices delivered and completed shipments created inside the active
//! recalculation window. Runs once and exits; scheduling is left to cron.

use anyhow::Context;
use movecost_core::{
    traits::{LineItemRepository, RecalculateRepository, ShipmentRepository},
    AppConfig,
};
use movecost_db::{
    create_pool, PgLineItemRepository, PgRecalculateRepository, PgShipmentRepository,
    PgTariffRepository, PgZipRepository,
};
use movecost_route::planner_from_config;
use movecost_services::{
    ProcessRecalculateShipment, RateEngine, RecalculateOutcome, RecalculateShipment,
};
use std::env;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
fn init_tracing() {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "movecost={},movecost_services={},movecost_route={},movecost_db={},sqlx=warn",
            log_level, log_level, log_level, log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

#[derive(Debug, Default)]
struct SweepSummary {
    examined: usize,
    recalculated: usize,
    failed: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting MoveCost recalculation v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().context("Failed to load configuration")?;

    info!("Connecting to database...");
    let pool = create_pool(&config.database)
        .await
        .context("Failed to create database pool")?;

    let shipments = Arc::new(PgShipmentRepository::new(pool.clone()));
    let line_items = Arc::new(PgLineItemRepository::new(pool.clone()));
    let recalculates = Arc::new(PgRecalculateRepository::new(pool.clone()));
    let tariff = Arc::new(PgTariffRepository::new(pool.clone()));
    let zips = Arc::new(PgZipRepository::new(pool));

    let planner =
        planner_from_config(&config, zips).context("Failed to build distance planner")?;
    let engine = Arc::new(RateEngine::new(tariff, planner));

    let process = ProcessRecalculateShipment::new(
        recalculates.clone(),
        RecalculateShipment::new(
            engine,
            shipments.clone(),
            line_items.clone(),
            recalculates.clone(),
        ),
    );

    let window = match recalculates
        .fetch_active_window()
        .await
        .context("Failed to fetch recalculation window")?
    {
        Some(window) => window,
        None => {
            info!("No active recalculation window, nothing to do");
            return Ok(());
        }
    };

    info!(
        "Recalculating shipments created between {} and {}",
        window.shipment_updated_after, window.shipment_updated_before
    );

    let candidates = shipments
        .find_priced_created_between(
            window.shipment_updated_after,
            window.shipment_updated_before,
            config.recalculation.batch_limit,
        )
        .await
        .context("Failed to fetch candidate shipments")?;

    let mut summary = SweepSummary::default();
    for mut shipment in candidates {
        summary.examined += 1;

        let items = match line_items.find_by_shipment(shipment.id).await {
            Ok(items) => items,
            Err(e) => {
                error!("Skipping shipment {}: {}", shipment.id, e);
                summary.failed += 1;
                continue;
            }
        };

        match process.call(&mut shipment, &items).await? {
            RecalculateOutcome::Skipped => {}
            RecalculateOutcome::Recalculated => summary.recalculated += 1,
            RecalculateOutcome::Failed(e) => {
                warn!(
                    error_code = e.error_code(),
                    "Shipment {} was not recalculated: {}", shipment.id, e
                );
                summary.failed += 1;
            }
        }
    }

    info!(
        examined = summary.examined,
        recalculated = summary.recalculated,
        failed = summary.failed,
        "Recalculation sweep finished"
    );
    Ok(())
}
