//! Shared helpers for live API tests.

#![allow(dead_code)]

use country_atlas_client::RestCountriesClient;

/// Environment variable that opts in to tests against the public API.
pub const LIVE_TESTS_VAR: &str = "COUNTRY_ATLAS_LIVE_TESTS";

/// Skip the test unless live API tests are opted in via [`LIVE_TESTS_VAR`].
#[macro_export]
macro_rules! skip_if_offline {
    () => {
        if std::env::var("COUNTRY_ATLAS_LIVE_TESTS").is_err() {
            eprintln!("skipping live API test: set COUNTRY_ATLAS_LIVE_TESTS to enable");
            return;
        }
    };
}

/// Assert a `Result` is `Ok` and unwrap it (failing the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Client against the public API, honoring a base URL override for mirrors.
pub fn live_client() -> RestCountriesClient {
    match std::env::var("COUNTRY_ATLAS_API_BASE") {
        Ok(base) => RestCountriesClient::with_base_url(base),
        Err(_) => RestCountriesClient::new(),
    }
}
