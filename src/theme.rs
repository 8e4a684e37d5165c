//! The two-valued visual theme.
//!
//! DESIGN
//! ======
//! Parsing is strict: only the exact lowercase names are themes. Anything
//! else read back from storage is treated as "no preference" by callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual appearance mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?} (expected \"dark\" or \"light\")")]
pub struct ParseThemeError(pub String);

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Map a "prefers dark" media query result onto a theme.
    #[must_use]
    pub const fn from_prefers_dark(matches: bool) -> Self {
        if matches { Self::Dark } else { Self::Light }
    }

    /// Parse a stored value, returning `None` for anything that is not a theme.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}
