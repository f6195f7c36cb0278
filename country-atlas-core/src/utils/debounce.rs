//! Cancellable debounce windows.
//!
//! The directory's search box recomputes its filter only once input has been
//! stable for a fixed window. Each keystroke cancels the pending window and
//! opens a new one: an explicit schedule-then-cancel abstraction instead of
//! ad hoc timer bookkeeping.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// How long input must be stable before the search filter recomputes.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(250);

/// A single-slot debounce scheduler.
///
/// At most one window is pending at a time; [`reschedule`](Self::reschedule)
/// supersedes the previous one unconditionally.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    /// Create a debouncer with the given window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Cancel any pending window and open a new one.
    ///
    /// The returned future resolves `true` once the window elapses with no
    /// further reschedule, or `false` if it was superseded or cancelled
    /// first. The caller decides what "settled" means (commit the query,
    /// recompute the filter).
    pub fn reschedule(&mut self) -> impl Future<Output = bool> + Send + 'static {
        self.cancel_pending();

        let token = CancellationToken::new();
        self.pending = Some(token.clone());
        let window = self.window;

        async move {
            tokio::select! {
                () = token.cancelled() => false,
                () = tokio::time::sleep(window) => true,
            }
        }
    }

    /// Cancel the pending window, if any. Used on teardown.
    pub fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    /// Whether a window is currently open.
    ///
    /// Stays `true` after the window elapses until the next
    /// [`reschedule`](Self::reschedule) or [`cancel_pending`](Self::cancel_pending);
    /// the slot only tracks supersession, not completion.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}
