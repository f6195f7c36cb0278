//! # country-atlas-client
//!
//! HTTP bindings for the [REST Countries v3.1 API](https://restcountries.com/),
//! covering the three operations the Country Atlas viewer needs:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | [`CountryDirectory::list_countries`] | `GET /all?fields=...` |
//! | [`CountryDirectory::get_country`] | `GET /alpha/{code}?fields=...` |
//! | [`CountryDirectory::lookup_names`] | `GET /alpha?codes=c1,c2,...&fields=cca3,name` |
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use country_atlas_client::{CountryDirectory, RestCountriesClient};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestCountriesClient::new();
//!
//!     // Requests are tied to a cancellation scope owned by the caller.
//!     let scope = CancellationToken::new();
//!
//!     let countries = client.list_countries(&scope).await?;
//!     println!("{} countries", countries.len());
//!
//!     let france = client.get_country("FRA", &scope).await?;
//!     let borders = client.lookup_names(&france.borders, &scope).await?;
//!     for border in &borders {
//!         println!("{} borders {}", france.display_name(), border.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Cancellation
//!
//! Every request takes a [`CancellationToken`](tokio_util::sync::CancellationToken).
//! Cancelling the token while a request is in flight drops the request and
//! resolves it with [`ApiError::Cancelled`]; by contract the caller applies
//! no state from such an outcome. This is how page teardown and route changes
//! abort stale loads.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError):
//!
//! - [`ApiError::HttpStatus`] — non-success status, body text captured
//! - [`ApiError::ParseError`] — response was not JSON of the expected shape
//! - [`ApiError::NotFound`] — unknown country code
//! - [`ApiError::NetworkError`] / [`ApiError::Timeout`] — transport failure
//! - [`ApiError::Cancelled`] — the owning scope was torn down (not a failure)
//!
//! There is no retry, no backoff, and no caching across calls.

mod client;
mod error;
mod http;
mod traits;
mod types;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the client and its base URL
pub use client::{API_BASE, RestCountriesClient};

// Re-export the directory trait
pub use traits::CountryDirectory;

// Re-export wire types
pub use types::{
    BorderCountry, CountryDetail, CountryName, CountrySummary, Currency, Flags, Maps, NativeName,
};
