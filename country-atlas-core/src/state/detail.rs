//! Detail page state: one country's full record plus its border links.

use std::sync::Arc;

use country_atlas_client::{ApiError, BorderCountry, CountryDetail, CountryDirectory};
use tokio_util::sync::CancellationToken;

use crate::error::{CoreError, CoreResult};
use crate::state::PageStatus;

/// State of the country detail page, keyed by the route's country code.
///
/// Each navigation owns a fresh cancellation scope: loading a different code
/// cancels whatever the previous code still had in flight, so a stale
/// response can never land in the new page's state.
pub struct CountryDetailState {
    directory: Arc<dyn CountryDirectory>,
    /// Scope of the current code's requests. Rotated on every navigation.
    scope: CancellationToken,
    code: Option<String>,
    country: Option<CountryDetail>,
    borders: Vec<BorderCountry>,
    loading: bool,
    error: Option<String>,
    /// Bumped on every accepted code change. Consumers watch it to reset
    /// scroll position to the top.
    nav_epoch: u64,
}

impl CountryDetailState {
    /// Create the page state. No fetch happens until [`load`](Self::load).
    #[must_use]
    pub fn new(directory: Arc<dyn CountryDirectory>) -> Self {
        Self {
            directory,
            scope: CancellationToken::new(),
            code: None,
            country: None,
            borders: Vec::new(),
            loading: false,
            error: None,
            nav_epoch: 0,
        }
    }

    /// Load the record for `code`, superseding any in-flight load.
    ///
    /// Fetches the full record, then resolves its border codes into display
    /// names. An unknown code stores a not-found message without touching
    /// the previously displayed record. A load whose scope was cancelled
    /// mid-flight applies nothing and reports `Ok(())`.
    pub async fn load(&mut self, code: &str) -> CoreResult<()> {
        // Requests scoped to the previous code must not land here.
        self.scope.cancel();
        self.scope = CancellationToken::new();
        let scope = self.scope.clone();

        if self.code.as_deref() != Some(code) {
            self.nav_epoch += 1;
        }
        self.code = Some(code.to_string());
        self.loading = true;
        self.error = None;

        let detail = match self.directory.get_country(code, &scope).await {
            Ok(detail) => detail,
            Err(ApiError::Cancelled) => return Ok(()),
            Err(e) => {
                if scope.is_cancelled() {
                    return Ok(());
                }
                let e = match e {
                    ApiError::NotFound { code } => CoreError::CountryNotFound(code),
                    other => CoreError::Api(other),
                };
                if e.is_expected() {
                    log::warn!("Country detail load failed: {e}");
                } else {
                    log::error!("Country detail load failed: {e}");
                }
                self.error = Some(e.to_string());
                self.loading = false;
                return Err(e);
            }
        };

        let borders = self.resolve_borders(&detail.borders, &scope).await;
        if scope.is_cancelled() {
            return Ok(());
        }

        self.country = Some(detail);
        self.borders = borders;
        self.loading = false;
        Ok(())
    }

    /// Resolve border codes into display names with one batched lookup.
    ///
    /// An empty code list resolves to an empty result without any network
    /// call. A failed lookup degrades to an empty result: border links are
    /// an enhancement, never a page error.
    pub async fn resolve_borders(
        &self,
        codes: &[String],
        scope: &CancellationToken,
    ) -> Vec<BorderCountry> {
        if codes.is_empty() {
            return Vec::new();
        }

        match self.directory.lookup_names(codes, scope).await {
            Ok(borders) => borders,
            Err(ApiError::Cancelled) => Vec::new(),
            Err(e) => {
                log::warn!("Border lookup failed, omitting border links: {e}");
                Vec::new()
            }
        }
    }

    /// What the page should render right now.
    #[must_use]
    pub fn status(&self) -> PageStatus {
        if self.loading {
            PageStatus::Loading
        } else if let Some(message) = &self.error {
            PageStatus::Failed(message.clone())
        } else {
            PageStatus::Ready
        }
    }

    /// The loaded record, if any.
    #[must_use]
    pub fn country(&self) -> Option<&CountryDetail> {
        self.country.as_ref()
    }

    /// Resolved border countries, in lookup response order.
    #[must_use]
    pub fn borders(&self) -> &[BorderCountry] {
        &self.borders
    }

    /// The code of the current navigation, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Navigation counter; changes whenever the route code changes.
    #[must_use]
    pub fn nav_epoch(&self) -> u64 {
        self.nav_epoch
    }

    /// Whether a fetch is pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Display message of the last failed load, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Handle to the current navigation's scope, for owners that tear the
    /// page down while a load is in flight.
    #[must_use]
    pub fn scope(&self) -> CancellationToken {
        self.scope.clone()
    }

    /// Tear the page down: cancel every request tied to the current code.
    pub fn unmount(&mut self) {
        self.scope.cancel();
    }
}
