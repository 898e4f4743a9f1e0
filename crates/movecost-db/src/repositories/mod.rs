//! Repository implementations
//!
//! Concrete implementations of the repository traits defined in
//! movecost-core, using sqlx for PostgreSQL access.

pub mod line_item_repo;
pub mod recalculate_repo;
pub mod shipment_repo;
pub mod tariff_repo;
pub mod zip_repo;

mod rows;

pub use line_item_repo::PgLineItemRepository;
pub use recalculate_repo::PgRecalculateRepository;
pub use shipment_repo::PgShipmentRepository;
pub use tariff_repo::PgTariffRepository;
pub use zip_repo::PgZipRepository;

use movecost_core::{AppError, AppResult};

/// Resolve a dated lookup to its single matching row
///
/// Lookups fetch at most two rows so an ambiguous effective range is
/// reported instead of silently picking one.
pub(crate) fn exactly_one<T>(mut rows: Vec<T>, what: impl FnOnce() -> String) -> AppResult<T> {
    match rows.len() {
        0 => Err(AppError::NotFound(what())),
        1 => Ok(rows.remove(0)),
        _ => Err(AppError::MultipleMatches(what())),
    }
}
