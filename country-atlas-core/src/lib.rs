//! Country Atlas Core Library
//!
//! The view-model layer behind the country directory and detail pages:
//!
//! - [`CountryListState`] — the directory: load, debounced search, region
//!   filter, derived region set, visible subset
//! - [`CountryDetailState`] — one country's record plus resolved border links
//! - [`Route`] — the two addressable views, with unknown-path redirects
//! - [`theme`] — the process-wide light/dark toggle
//!
//! The layer is headless and platform-independent: it fetches through the
//! [`CountryDirectory`](country_atlas_client::CountryDirectory) trait and
//! leaves rendering entirely to the consumer. Each page state ties its
//! requests to a cancellation scope bound to the page's identity, so a
//! teardown or route change aborts stale loads before they can land.

pub mod error;
pub mod route;
pub mod state;
pub mod theme;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ApiError, CoreError, CoreResult};
pub use route::Route;
pub use state::{CountryDetailState, CountryListState, PageStatus, RegionFilter};
pub use theme::Theme;
pub use utils::debounce::{Debouncer, DEBOUNCE_WINDOW};
pub use utils::normalize::normalize;
