//! OS color-scheme preference signal.

use std::cell::Cell;

pub trait ColorScheme {
    /// Whether the platform currently prefers a dark color scheme.
    ///
    /// Implementations answer `false` when the signal is unavailable.
    fn prefers_dark(&self) -> bool;
}

/// Settable signal for native callers and tests.
#[derive(Debug, Default)]
pub struct FixedScheme {
    dark: Cell<bool>,
}

impl FixedScheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        Self { dark: Cell::new(dark) }
    }

    pub fn set(&self, dark: bool) {
        self.dark.set(dark);
    }
}

impl ColorScheme for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }
}

impl<T: ColorScheme> ColorScheme for Option<T> {
    fn prefers_dark(&self) -> bool {
        self.as_ref().is_some_and(ColorScheme::prefers_dark)
    }
}
