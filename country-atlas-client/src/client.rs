//! REST Countries v3.1 client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::error::{ApiError, Result};
use crate::http::{create_http_client, execute_request, parse_json};
use crate::traits::CountryDirectory;
use crate::types::{BorderCountry, BorderCountryWire, CountryDetail, CountrySummary};

/// Public REST Countries v3.1 base URL.
pub const API_BASE: &str = "https://restcountries.com/v3.1";

/// Field set requested for the list endpoint.
const LIST_FIELDS: &str = "cca3,name,flags,population,region,capital";
/// Field set requested for the detail endpoint.
const DETAIL_FIELDS: &str =
    "cca3,name,nativeName,flags,population,region,subregion,capital,languages,currencies,maps,borders,tld";
/// Field set requested for the batched code lookup.
const LOOKUP_FIELDS: &str = "cca3,name";

/// HTTP client for the REST Countries v3.1 API.
///
/// Holds one [`reqwest::Client`] with the default timeout configuration.
/// Stateless beyond that: no caching across calls, no retries.
pub struct RestCountriesClient {
    client: Client,
    base_url: String,
}

impl RestCountriesClient {
    /// Create a client against the public API ([`API_BASE`]).
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    /// Create a client against a self-hosted or mirrored deployment.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for RestCountriesClient {
    fn default() -> Self {
        Self::new()
    }
}

/// The detail endpoint answers with either a single object or an array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

#[async_trait]
impl CountryDirectory for RestCountriesClient {
    async fn list_countries(&self, cancel: &CancellationToken) -> Result<Vec<CountrySummary>> {
        let url = format!("{}/all?fields={LIST_FIELDS}", self.base_url);
        let body = execute_request(self.client.get(&url), "GET", &url, cancel).await?;
        parse_json(&body)
    }

    async fn get_country(&self, code: &str, cancel: &CancellationToken) -> Result<CountryDetail> {
        let url = format!(
            "{}/alpha/{}?fields={DETAIL_FIELDS}",
            self.base_url,
            urlencoding::encode(code)
        );

        let body = match execute_request(self.client.get(&url), "GET", &url, cancel).await {
            Ok(body) => body,
            // The endpoint reports unknown codes as plain 404s.
            Err(ApiError::HttpStatus { status: 404, .. }) => {
                return Err(ApiError::NotFound {
                    code: code.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        match parse_json::<OneOrMany<CountryDetail>>(&body)? {
            OneOrMany::One(detail) => Ok(detail),
            OneOrMany::Many(mut details) => {
                if details.is_empty() {
                    Err(ApiError::NotFound {
                        code: code.to_string(),
                    })
                } else {
                    Ok(details.swap_remove(0))
                }
            }
        }
    }

    async fn lookup_names(
        &self,
        codes: &[String],
        cancel: &CancellationToken,
    ) -> Result<Vec<BorderCountry>> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/alpha?codes={}&fields={LOOKUP_FIELDS}",
            self.base_url,
            codes.join(",")
        );
        let body = execute_request(self.client.get(&url), "GET", &url, cancel).await?;
        let entries: Vec<BorderCountryWire> = parse_json(&body)?;
        Ok(entries.into_iter().map(BorderCountry::from).collect())
    }
}
