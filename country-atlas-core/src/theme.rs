//! Process-wide light/dark theme state.
//!
//! One toggle for the whole process, initialized to light. Not persisted
//! across restarts.

use std::sync::atomic::{AtomicU8, Ordering};

// 0 = Light (the initial theme), 1 = Dark.
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// Color scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light scheme, the initial state.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// The other scheme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    fn index(self) -> u8 {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
        }
    }

    fn from_index(index: u8) -> Self {
        if index == 0 { Self::Light } else { Self::Dark }
    }
}

/// The currently active theme.
#[must_use]
pub fn current() -> Theme {
    Theme::from_index(CURRENT_THEME.load(Ordering::SeqCst))
}

/// Replace the active theme.
pub fn set(theme: Theme) {
    CURRENT_THEME.store(theme.index(), Ordering::SeqCst);
}

/// Flip the active theme, returning the new value.
pub fn toggle() -> Theme {
    let next = current().toggled();
    set(next);
    next
}
