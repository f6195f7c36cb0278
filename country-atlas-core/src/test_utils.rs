//! Test support module
//!
//! Provides a scriptable in-memory [`CountryDirectory`] and factory helpers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use country_atlas_client::{
    ApiError, BorderCountry, CountryDetail, CountryDirectory, CountryName, CountrySummary,
    Result as ApiResult,
};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Scriptable `CountryDirectory` double with call counters.
///
/// By default every operation honors the cancellation token it is handed,
/// like the real client. [`ignoring_cancellation`](Self::ignoring_cancellation)
/// turns a mock into one that answers regardless, to prove the state layer's
/// own guards reject results that raced a teardown.
pub(crate) struct MockDirectory {
    list_response: RwLock<ApiResult<Vec<CountrySummary>>>,
    details: RwLock<HashMap<String, CountryDetail>>,
    lookup_response: RwLock<ApiResult<Vec<BorderCountry>>>,
    pub list_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub lookup_calls: AtomicUsize,
    last_lookup: RwLock<Option<Vec<String>>>,
    honor_cancellation: AtomicBool,
    /// If set, cancel the scope handed to a call before answering it
    /// (simulates teardown racing a pending fetch).
    cancel_scope_on_call: AtomicBool,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self {
            list_response: RwLock::new(Ok(Vec::new())),
            details: RwLock::new(HashMap::new()),
            lookup_response: RwLock::new(Ok(Vec::new())),
            list_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            lookup_calls: AtomicUsize::new(0),
            last_lookup: RwLock::new(None),
            honor_cancellation: AtomicBool::new(true),
            cancel_scope_on_call: AtomicBool::new(false),
        }
    }

    pub fn with_countries(self, countries: Vec<CountrySummary>) -> Self {
        *self.list_response.try_write().unwrap() = Ok(countries);
        self
    }

    pub fn with_list_error(self, error: ApiError) -> Self {
        *self.list_response.try_write().unwrap() = Err(error);
        self
    }

    pub fn with_detail(self, detail: CountryDetail) -> Self {
        self.details
            .try_write()
            .unwrap()
            .insert(detail.code.clone(), detail);
        self
    }

    pub fn with_lookup(self, borders: Vec<BorderCountry>) -> Self {
        *self.lookup_response.try_write().unwrap() = Ok(borders);
        self
    }

    pub fn with_lookup_error(self, error: ApiError) -> Self {
        *self.lookup_response.try_write().unwrap() = Err(error);
        self
    }

    pub fn ignoring_cancellation(self) -> Self {
        self.honor_cancellation.store(false, Ordering::SeqCst);
        self
    }

    pub fn cancelling_scope_on_call(self) -> Self {
        self.cancel_scope_on_call.store(true, Ordering::SeqCst);
        self
    }

    /// Codes passed to the most recent `lookup_names` call.
    pub fn last_lookup_codes(&self) -> Option<Vec<String>> {
        self.last_lookup.try_read().unwrap().clone()
    }

    fn observe(&self, cancel: &CancellationToken) -> ApiResult<()> {
        if self.cancel_scope_on_call.load(Ordering::SeqCst) {
            cancel.cancel();
        }
        if self.honor_cancellation.load(Ordering::SeqCst) && cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        Ok(())
    }
}

#[async_trait]
impl CountryDirectory for MockDirectory {
    async fn list_countries(&self, cancel: &CancellationToken) -> ApiResult<Vec<CountrySummary>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.observe(cancel)?;
        self.list_response.read().await.clone()
    }

    async fn get_country(&self, code: &str, cancel: &CancellationToken) -> ApiResult<CountryDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.observe(cancel)?;
        self.details
            .read()
            .await
            .get(code)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                code: code.to_string(),
            })
    }

    async fn lookup_names(
        &self,
        codes: &[String],
        cancel: &CancellationToken,
    ) -> ApiResult<Vec<BorderCountry>> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_lookup.write().await = Some(codes.to_vec());
        self.observe(cancel)?;
        self.lookup_response.read().await.clone()
    }
}

// ===== Factory helpers =====

/// Summary record with the fields the list page filters and sorts on.
pub(crate) fn named_summary(code: &str, name: &str, region: &str) -> CountrySummary {
    CountrySummary {
        code: code.to_string(),
        name: CountryName {
            common: name.to_string(),
            ..CountryName::default()
        },
        region: region.to_string(),
        ..CountrySummary::default()
    }
}

/// Detail record with the given border codes.
pub(crate) fn named_detail(code: &str, name: &str, borders: &[&str]) -> CountryDetail {
    CountryDetail {
        code: code.to_string(),
        name: CountryName {
            common: name.to_string(),
            ..CountryName::default()
        },
        borders: borders.iter().map(ToString::to_string).collect(),
        ..CountryDetail::default()
    }
}

pub(crate) fn named_border(code: &str, name: &str) -> BorderCountry {
    BorderCountry {
        code: code.to_string(),
        name: name.to_string(),
    }
}
