//! MoveCost Database Layer
//!
//! PostgreSQL access for the pricing pipeline:
//!
//! - Connection pool management with sqlx
//! - Tariff 400NG rate lookups resolved by effective date
//! - ZIP3 reference data and the ZIP3-to-ZIP3 mileage table
//! - Shipments, line items and recalculation bookkeeping, with multi-row
//!   writes inside one transaction

pub mod pool;
pub mod repositories;

pub use pool::create_pool;
pub use repositories::*;

// Re-export commonly used types
pub use movecost_core::{AppError, AppResult};
pub use sqlx::PgPool;
