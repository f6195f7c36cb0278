//! Directory page state: the full country list plus search and region filter.

use std::future::Future;
use std::sync::Arc;

use country_atlas_client::{ApiError, CountryDirectory, CountrySummary};
use tokio_util::sync::CancellationToken;

use crate::error::CoreResult;
use crate::state::PageStatus;
use crate::utils::debounce::Debouncer;
use crate::utils::normalize::normalize;

/// Region filter selection.
///
/// The wire value `"all"` is the sentinel for "no filter"; any other value
/// must match a record's region field exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegionFilter {
    /// No region restriction.
    #[default]
    All,
    /// Exact-match restriction to one region.
    Named(String),
}

impl RegionFilter {
    /// Parse a selection value, honoring the `"all"` sentinel.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }

    /// Whether a record with the given region passes the filter.
    #[must_use]
    pub fn matches(&self, region: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == region,
        }
    }
}

/// State of the country directory page.
///
/// Owns the fetched list for the duration of the page mount. The search
/// query is applied in two steps: [`search`](Self::search) records raw input
/// and opens a debounce window; [`commit_search`](Self::commit_search) makes
/// it effective once the window settles.
pub struct CountryListState {
    directory: Arc<dyn CountryDirectory>,
    /// Mount lifetime. Cancelled exactly once, on unmount.
    scope: CancellationToken,
    countries: Vec<CountrySummary>,
    loading: bool,
    error: Option<String>,
    raw_query: String,
    query: String,
    region: RegionFilter,
    debouncer: Debouncer,
}

impl CountryListState {
    /// Create the page state. No fetch happens until [`load`](Self::load).
    #[must_use]
    pub fn new(directory: Arc<dyn CountryDirectory>) -> Self {
        Self {
            directory,
            scope: CancellationToken::new(),
            countries: Vec::new(),
            loading: false,
            error: None,
            raw_query: String::new(),
            query: String::new(),
            region: RegionFilter::All,
            debouncer: Debouncer::default(),
        }
    }

    /// Fetch the country list.
    ///
    /// Drops records without a usable display name and sorts the rest
    /// ascending by display name (case- and accent-insensitive collation).
    /// On failure the display message lands in [`error`](Self::error) and is
    /// also returned. A load whose scope was cancelled mid-flight applies
    /// nothing (the loading flag included) and reports `Ok(())`.
    pub async fn load(&mut self) -> CoreResult<()> {
        self.loading = true;
        self.error = None;
        let scope = self.scope.clone();

        match self.directory.list_countries(&scope).await {
            Ok(countries) => {
                if scope.is_cancelled() {
                    return Ok(());
                }
                self.countries = prepare_list(countries);
                self.loading = false;
                Ok(())
            }
            Err(ApiError::Cancelled) => Ok(()),
            Err(e) => {
                if scope.is_cancelled() {
                    return Ok(());
                }
                if e.is_expected() {
                    log::warn!("Country list load failed: {e}");
                } else {
                    log::error!("Country list load failed: {e}");
                }
                self.error = Some(e.to_string());
                self.loading = false;
                Err(e.into())
            }
        }
    }

    /// Record raw search input and open a new debounce window.
    ///
    /// The returned future resolves `true` once the input has been stable
    /// for the window; the caller then applies it via
    /// [`commit_search`](Self::commit_search). A `false` resolution means
    /// the keystroke was superseded and must be ignored.
    pub fn search(&mut self, text: impl Into<String>) -> impl Future<Output = bool> + Send + 'static {
        self.raw_query = text.into();
        self.debouncer.reschedule()
    }

    /// Make the recorded raw input the effective query (trimmed).
    pub fn commit_search(&mut self) {
        self.query = self.raw_query.trim().to_string();
    }

    /// Replace the region filter. Takes effect immediately.
    pub fn filter_by_region(&mut self, region: RegionFilter) {
        self.region = region;
    }

    /// Unique regions observed in the list, alphabetically sorted.
    ///
    /// Recomputed from the current list; empty region values are excluded.
    #[must_use]
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self
            .countries
            .iter()
            .map(|c| c.region.clone())
            .filter(|r| !r.is_empty())
            .collect();
        regions.sort();
        regions.dedup();
        regions
    }

    /// The list filtered by region and effective query, in list order.
    ///
    /// Region check first; the query then matches case- and
    /// accent-insensitively against the display name. An empty result is a
    /// normal state, not an error.
    #[must_use]
    pub fn visible(&self) -> Vec<&CountrySummary> {
        let query = normalize(&self.query);
        self.countries
            .iter()
            .filter(|c| {
                if !self.region.matches(&c.region) {
                    return false;
                }
                if query.is_empty() {
                    return true;
                }
                normalize(c.display_name()).contains(&query)
            })
            .collect()
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

    /// The full (sorted, name-filtered) list.
    #[must_use]
    pub fn countries(&self) -> &[CountrySummary] {
        &self.countries
    }

    /// Whether a fetch is pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Display message of the last failed fetch, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Raw input as last typed.
    #[must_use]
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// The effective (committed) query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The active region filter.
    #[must_use]
    pub fn region(&self) -> &RegionFilter {
        &self.region
    }

    /// Handle to the mount lifetime, for owners that tear the page down
    /// while a load is in flight.
    #[must_use]
    pub fn scope(&self) -> CancellationToken {
        self.scope.clone()
    }

    /// Tear the page down: cancel the pending debounce window and every
    /// request tied to the mount lifetime.
    pub fn unmount(&mut self) {
        self.debouncer.cancel_pending();
        self.scope.cancel();
    }
}

/// Apply the list-quality rules: drop unnamed records, sort by display name.
fn prepare_list(mut countries: Vec<CountrySummary>) -> Vec<CountrySummary> {
    countries.retain(CountrySummary::has_usable_name);
    countries.sort_by_cached_key(|c| (normalize(c.display_name()), c.display_name().to_string()));
    countries
}
