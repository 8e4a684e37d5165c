//! Page-level configuration for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults match the documentation site's markup. A page can override any
//! field by placing a JSON object in the root element's `data-theme-toggle`
//! attribute; omitted fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
pub const DEFAULT_ICON_ID: &str = "theme-icon";
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";
pub const DEFAULT_DARK_ICON_CLASS: &str = "fa-solid fa-sun";
pub const DEFAULT_LIGHT_ICON_CLASS: &str = "fa-solid fa-moon";

/// Root element attribute that may carry a JSON config override.
pub const CONFIG_ATTRIBUTE: &str = "data-theme-toggle";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid theme config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("theme config field `{0}` must not be empty")]
    EmptyField(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Persistent store key holding `"dark"` or `"light"`.
    pub storage_key: String,
    /// Id of the optional toggle control.
    pub toggle_id: String,
    /// Id of the optional icon element.
    pub icon_id: String,
    /// Root attribute set to `"dark"` while dark mode is active.
    pub marker_attribute: String,
    pub media_query: String,
    pub dark_icon_class: String,
    pub light_icon_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            icon_id: DEFAULT_ICON_ID.to_owned(),
            marker_attribute: DEFAULT_MARKER_ATTRIBUTE.to_owned(),
            media_query: DEFAULT_MEDIA_QUERY.to_owned(),
            dark_icon_class: DEFAULT_DARK_ICON_CLASS.to_owned(),
            light_icon_class: DEFAULT_LIGHT_ICON_CLASS.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::EmptyField`] when a required field is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config from the root element's override attribute.
    ///
    /// A missing attribute yields the defaults; an invalid one is logged and
    /// also yields the defaults.
    #[must_use]
    pub fn from_root_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default theme config");
                Self::default()
            }
        }
    }

    /// Check that the fields the controller cannot work without are set.
    ///
    /// Icon classes may be empty; that just clears the icon.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("toggle_id", &self.toggle_id),
            ("icon_id", &self.icon_id),
            ("marker_attribute", &self.marker_attribute),
            ("media_query", &self.media_query),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }
        Ok(())
    }

    /// Icon class shown while `theme` is active.
    #[must_use]
    pub fn icon_class(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.dark_icon_class,
            Theme::Light => &self.light_icon_class,
        }
    }
}
