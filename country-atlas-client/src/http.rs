//! Generic HTTP request plumbing
//!
//! One place for the request/response flow shared by every endpoint method:
//! sending, cancellation, status checking, logging, body reading, and JSON
//! parsing. Endpoint methods construct their own `RequestBuilder` and keep
//! full control over URLs and query strings.
//!
//! Cancellation is threaded through every await point: once the caller's
//! [`CancellationToken`] fires, the in-flight request is dropped and
//! [`ApiError::Cancelled`] is returned without observing the response.

use std::borrow::Cow;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::error::ApiError;

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Cap on response-body bytes echoed into a single log line. The country
/// list payload runs to a few hundred kilobytes.
const LOG_BODY_LIMIT: usize = 256;

/// Create an HTTP client with the default timeout configuration.
pub(crate) fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// Shorten a response body for logging.
///
/// Bodies within [`LOG_BODY_LIMIT`] pass through unchanged; longer ones are
/// cut at the last character boundary inside the limit, with the total size
/// appended so the log still records how large the payload was.
fn abbreviate_body(body: &str) -> Cow<'_, str> {
    if body.len() <= LOG_BODY_LIMIT {
        return Cow::Borrowed(body);
    }

    let cut = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= LOG_BODY_LIMIT)
        .last()
        .unwrap_or(0);

    Cow::Owned(format!(
        "{}... ({} bytes total)",
        &body[..cut],
        body.len()
    ))
}

/// Perform an HTTP request and return the response body text.
///
/// Unified processing: cancellation, sending, status check, logging, body
/// read. No retries and no caching; each call maps to exactly one request.
///
/// # Arguments
/// * `request` - configured request builder (URL, query, headers)
/// * `method` - request method name (for logging)
/// * `url` - request URL (for logging)
/// * `cancel` - cancellation scope the request is tied to
///
/// # Returns
/// * `Ok(body)` - response body text of a 2xx response
/// * `Err(ApiError::Cancelled)` - scope cancelled mid-flight
/// * `Err(ApiError::HttpStatus)` - non-success status, body captured
/// * `Err(ApiError::NetworkError | ApiError::Timeout)` - transport failure
pub(crate) async fn execute_request(
    request: RequestBuilder,
    method: &str,
    url: &str,
    cancel: &CancellationToken,
) -> Result<String, ApiError> {
    log::debug!("{method} {url}");

    let response = tokio::select! {
        () = cancel.cancelled() => {
            log::debug!("{method} {url} cancelled before response");
            return Err(ApiError::Cancelled);
        }
        result = request.send() => result.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?,
    };

    let status = response.status();
    log::debug!("Response Status: {status}");

    let body = tokio::select! {
        () = cancel.cancelled() => {
            log::debug!("{method} {url} cancelled while reading body");
            return Err(ApiError::Cancelled);
        }
        result = response.text() => result.map_err(|e| ApiError::NetworkError {
            detail: format!("Failed to read response body: {e}"),
        })?,
    };

    if !status.is_success() {
        log::warn!("{method} {url} answered HTTP {status}");
        return Err(ApiError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }

    log::debug!("Response Body: {}", abbreviate_body(&body));

    Ok(body)
}

/// Parse a JSON response body.
///
/// # Returns
/// * `Ok(T)` - successfully parsed
/// * `Err(ApiError::ParseError)` - body is not valid JSON of the expected shape
pub(crate) fn parse_json<T>(body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", abbreviate_body(body));
        ApiError::ParseError {
            detail: e.to_string(),
        }
    })
}
