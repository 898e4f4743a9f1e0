//! Unified error handling for MoveCost
//!
//! This module provides a single error type covering every failure mode of
//! the pricing pipeline: tariff lookups, external distance services, invalid
//! postal codes and violated preconditions. Errors are wrapped with lookup
//! context on their way up and are never recovered locally.

use thiserror::Error;

/// Main application error type
///
/// All errors in the application should be converted to this type.
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Database Errors ====================
    #[error("Database error: {0}")]
    Database(String),

    #[error("Database pool error: {0}")]
    Pool(String),

    #[error("Transaction failed: {0}")]
    Transaction(String),

    // ==================== Lookup Errors ====================
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Multiple rows matched: {0}")]
    MultipleMatches(String),

    #[error("Shipment not found: {0}")]
    ShipmentNotFound(String),

    // ==================== Pricing Errors ====================
    #[error("No pricing function found for code {0}")]
    NoPricingFunction(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Invalid status transition: {0}")]
    InvalidStatusTransition(String),

    // ==================== Validation Errors ====================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported postal code: {0}")]
    UnsupportedPostalCode(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    // ==================== External Service Errors ====================
    #[error("External service error: {0}")]
    ExternalService(String),

    // ==================== Internal Errors ====================
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // ==================== Wrapped Errors ====================
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Wrap this error with a description of the operation that failed
    pub fn context(self, context: impl Into<String>) -> Self {
        AppError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with all context layers removed
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the root cause is a missing row
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.root(),
            AppError::NotFound(_) | AppError::ShipmentNotFound(_)
        )
    }

    /// Returns the error code for logs and API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database_error",
            AppError::Pool(_) => "pool_error",
            AppError::Transaction(_) => "transaction_error",
            AppError::NotFound(_) => "not_found",
            AppError::MultipleMatches(_) => "multiple_matches",
            AppError::ShipmentNotFound(_) => "shipment_not_found",
            AppError::NoPricingFunction(_) => "no_pricing_function",
            AppError::Precondition(_) => "precondition_failed",
            AppError::InvalidStatusTransition(_) => "invalid_status_transition",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::UnsupportedPostalCode(_) => "unsupported_postal_code",
            AppError::MissingField(_) => "missing_field",
            AppError::ExternalService(_) => "external_service_error",
            AppError::Internal(_) => "internal_error",
            AppError::Config(_) => "config_error",
            AppError::Serialization(_) => "serialization_error",
            AppError::Context { source, .. } => source.error_code(),
        }
    }
}

/// Adds `.context(...)` to any `AppResult`
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError>;
}

impl<T, E: Into<AppError>> ResultExt<T> for Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| e.into().context(context))
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wraps_message() {
        let err = AppError::NotFound("service area for zip3 395".to_string())
            .context("Fetching 400ng service area from db");

        assert_eq!(
            err.to_string(),
            "Fetching 400ng service area from db: Not found: service area for zip3 395"
        );
        assert!(err.is_not_found());
        assert_eq!(err.error_code(), "not_found");
    }

    #[test]
    fn test_result_context() {
        let result: Result<(), AppError> =
            Err(AppError::Precondition("net weight missing".to_string()));
        let err = result.context("pricing 175A").unwrap_err();

        assert!(matches!(err.root(), AppError::Precondition(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::UnsupportedPostalCode("1234A".to_string()).error_code(),
            "unsupported_postal_code"
        );
        assert_eq!(
            AppError::NoPricingFunction("999Z".to_string()).error_code(),
            "no_pricing_function"
        );
    }
}
