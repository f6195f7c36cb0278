//! Page view-model state.
//!
//! One state struct per addressable view. Each owns its data exclusively
//! (no cross-page cache) and ties its in-flight requests to a cancellation
//! scope bound to the page's identity: mount lifetime for the directory,
//! route code for the detail page.

mod detail;
mod list;

pub use detail::CountryDetailState;
pub use list::{CountryListState, RegionFilter};

/// What a page should render right now.
///
/// An empty result set under `Ready` is a normal state, distinct from both
/// `Loading` and `Failed`. There is no partial-success rendering: a failed
/// page shows its error, not stale content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    /// A fetch is pending.
    Loading,
    /// The fetch failed; holds the display message.
    Failed(String),
    /// Data is available (possibly empty).
    Ready,
}
