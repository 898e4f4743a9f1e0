//! Planner errors

use movecost_core::AppError;
use thiserror::Error;

/// Result alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Errors raised while computing a distance
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Unsupported postal code: {0}")]
    UnsupportedPostalCode(String),

    #[error("Invalid zip code: {0}")]
    InvalidZip(String),

    #[error("pickup zip3 ({0}) cannot be the same as destination zip3")]
    SameZip3(String),

    #[error("Connection error calling {host}: {message}")]
    Connection { host: String, message: String },

    #[error("Timeout calling {0}")]
    Timeout(String),

    #[error("HTTP error from {host}: status {status}")]
    HttpStatus {
        host: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response from {host}: {message}")]
    Decode { host: String, message: String },

    #[error("No route found by {0}")]
    NoRoute(String),

    #[error("Address could not be geocoded: {0}")]
    Geocode(String),

    #[error("DTOD returned no distance between {pickup} and {destination}: {reason}")]
    NoDistance {
        pickup: String,
        destination: String,
        reason: String,
    },

    #[error("Not supported by this planner: {0}")]
    Unsupported(&'static str),

    #[error("Planner configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Lookup(#[from] AppError),
}

impl PlannerError {
    /// Map a reqwest failure, keeping timeouts distinguishable
    pub(crate) fn from_reqwest(host: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PlannerError::Timeout(host.to_string())
        } else {
            PlannerError::Connection {
                host: host.to_string(),
                message: err.to_string(),
            }
        }
    }

    pub fn is_unsupported_postal_code(&self) -> bool {
        matches!(self, PlannerError::UnsupportedPostalCode(_))
    }
}

impl From<PlannerError> for AppError {
    fn from(err: PlannerError) -> Self {
        match err {
            PlannerError::UnsupportedPostalCode(zip) => AppError::UnsupportedPostalCode(zip),
            PlannerError::InvalidZip(_) | PlannerError::SameZip3(_) => {
                AppError::InvalidInput(err.to_string())
            }
            PlannerError::Config(message) => AppError::Config(message),
            PlannerError::Lookup(inner) => inner,
            other => AppError::ExternalService(other.to_string()),
        }
    }
}
