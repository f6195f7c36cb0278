use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::types::{BorderCountry, CountryDetail, CountrySummary};

/// Read-only access to a country directory.
///
/// Every operation is tied to a [`CancellationToken`] scope owned by the
/// caller (a page mount, a route identity). When the scope is cancelled the
/// operation resolves with [`ApiError::Cancelled`](crate::ApiError::Cancelled)
/// and the caller must not derive any state from it.
///
/// [`RestCountriesClient`](crate::RestCountriesClient) is the production
/// implementation; view-model layers depend on `Arc<dyn CountryDirectory>`
/// so they can be driven by in-memory doubles in tests.
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    /// Fetch the summary list for the directory page.
    ///
    /// Unsorted and unfiltered; list-quality rules (dropping unnamed
    /// records, ordering) belong to the caller.
    async fn list_countries(&self, cancel: &CancellationToken) -> Result<Vec<CountrySummary>>;

    /// Fetch one country's full record by its alpha-3 code.
    ///
    /// Codes are case-sensitive three-letter identifiers. An unknown code
    /// resolves to [`ApiError::NotFound`](crate::ApiError::NotFound).
    async fn get_country(&self, code: &str, cancel: &CancellationToken) -> Result<CountryDetail>;

    /// Resolve country codes into display names in one batched request.
    ///
    /// The returned entries preserve the endpoint's response order. An empty
    /// `codes` slice resolves to an empty list without any network call.
    async fn lookup_names(
        &self,
        codes: &[String],
        cancel: &CancellationToken,
    ) -> Result<Vec<BorderCountry>>;
}
