//! Theme controller: resolves, applies, and persists the active theme.
//!
//! DESIGN
//! ======
//! The controller owns its collaborators behind three small capabilities
//! (`PreferenceStore`, `ElementHandle`, `ColorScheme`) so the same logic runs
//! against `web_sys` in the browser and against in-memory fakes in tests.
//! All methods take `&self`; the browser layer shares one controller between
//! its click and media-query listeners through `Rc`.
//!
//! The root marker attribute is the source of truth for what is currently
//! shown; the store is the source of truth for what the user asked for.
//! Toggling reads the former, OS change handling consults the latter.

use crate::config::ThemeConfig;
use crate::element::ElementHandle;
use crate::scheme::ColorScheme;
use crate::store::PreferenceStore;
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, E, P> {
    config: ThemeConfig,
    store: S,
    root: E,
    icon: Option<E>,
    scheme: P,
}

impl<S, E, P> ThemeController<S, E, P>
where
    S: PreferenceStore,
    E: ElementHandle,
    P: ColorScheme,
{
    pub fn new(config: ThemeConfig, store: S, root: E, icon: Option<E>, scheme: P) -> Self {
        Self { config, store, root, icon, scheme }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &E {
        &self.root
    }

    pub fn icon(&self) -> Option<&E> {
        self.icon.as_ref()
    }

    pub fn scheme(&self) -> &P {
        &self.scheme
    }

    /// Theme implied by the OS preference alone.
    pub fn system_preference(&self) -> Theme {
        Theme::from_prefers_dark(self.scheme.prefers_dark())
    }

    /// Stored theme if valid, otherwise the OS preference.
    pub fn theme(&self) -> Theme {
        self.store
            .get(&self.config.storage_key)
            .as_deref()
            .and_then(Theme::from_stored)
            .unwrap_or_else(|| self.system_preference())
    }

    /// Theme currently shown, as read from the root marker.
    pub fn current_theme(&self) -> Theme {
        match self.root.attribute(&self.config.marker_attribute).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn has_explicit_preference(&self) -> bool {
        self.store.contains(&self.config.storage_key)
    }

    /// Apply `theme` to the root marker, persist it, then update the icon.
    pub fn set_theme(&self, theme: Theme) {
        let marker = &self.config.marker_attribute;
        match theme {
            Theme::Dark => self.root.set_attribute(marker, Theme::Dark.as_str()),
            Theme::Light => self.root.remove_attribute(marker),
        }

        self.store.set(&self.config.storage_key, theme.as_str());

        if let Some(icon) = &self.icon {
            icon.set_class_name(self.config.icon_class(theme));
        }

        log::debug!("theme set to {theme}");
    }

    pub fn toggle_theme(&self) {
        self.set_theme(self.current_theme().opposite());
    }

    /// Resolve and apply the initial theme. Run once, before listeners attach.
    pub fn init_theme(&self) {
        self.set_theme(self.theme());
    }

    /// Click handler for the toggle control.
    pub fn handle_toggle_click(&self) {
        self.toggle_theme();
    }

    /// OS preference change handler.
    ///
    /// Applies the new preference only while nothing is stored. Returns
    /// whether the theme was changed.
    pub fn handle_scheme_change(&self, prefers_dark: bool) -> bool {
        if self.has_explicit_preference() {
            log::debug!("ignoring color scheme change: explicit preference stored");
            return false;
        }
        self.set_theme(Theme::from_prefers_dark(prefers_dark));
        true
    }
}
