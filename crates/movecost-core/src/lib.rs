//! MoveCost Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the MoveCost pricing system. It includes:
//!
//! - Tariff units (cents, millicents, hundredweight, discount rates)
//! - Domain models (Shipment, ShipmentLineItem, tariff rows, recalculation windows)
//! - Repository traits consumed by the rate engine and shipment services
//! - Unified error handling
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::{AppError, ResultExt};

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
