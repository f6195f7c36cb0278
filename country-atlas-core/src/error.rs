//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use country_atlas_client::ApiError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Country not found
    #[error("Country not found: {0}")]
    CountryNotFound(String),

    /// Route path could not be parsed
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// API error (converted from the client library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether the error is expected behavior (user input, missing resource),
    /// used for log level selection.
    ///
    /// Level `warn` should be used when this returns `true`, `error` otherwise.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::CountryNotFound(_) | Self::InvalidRoute(_) => true,
            Self::Api(e) => e.is_expected(),
        }
    }

    /// Whether the error is a cancellation notice.
    ///
    /// Cancellation is silence, not failure: callers must not surface it or
    /// derive state from it.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Api(ApiError::Cancelled))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
