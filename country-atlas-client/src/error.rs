use serde::{Deserialize, Serialize};

/// Unified error type for all REST Countries operations.
///
/// All variants are serializable for structured error reporting. Callers that
/// tie requests to a page lifetime should treat [`Cancelled`](Self::Cancelled)
/// as silence rather than a failure: it means the owning scope was torn down
/// and no state may be updated from the request's outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The endpoint answered with a non-success status.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body text, as returned by the endpoint.
        body: String,
    },

    /// Failed to parse the endpoint's response as JSON of the expected shape.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// The requested country record does not exist.
    NotFound {
        /// Country code that was not found.
        code: String,
    },

    /// The request's cancellation scope was cancelled before completion.
    ///
    /// Not a true failure. No response was observed and no state may be
    /// derived from the request.
    Cancelled,
}

impl ApiError {
    /// Whether the error is expected behavior (missing resource, torn-down
    /// scope), used for log level selection.
    ///
    /// Returns `true` for errors that should be logged at `warn` or below,
    /// `false` for ones that warrant `error`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Cancelled)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::HttpStatus { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {body}")
                }
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::NotFound { code } => {
                write!(f, "Country '{code}' not found")
            }
            Self::Cancelled => {
                write!(f, "Request cancelled")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
