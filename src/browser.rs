//! Browser bindings and wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs at module instantiation so the stored theme lands on `<html>` before
//! first paint. The toggle control and media query are looked up exactly
//! once; if either is missing its listener is simply not registered.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MediaQueryList, MediaQueryListEvent, Storage, Window};

use crate::config::{CONFIG_ATTRIBUTE, ThemeConfig};
use crate::controller::ThemeController;
use crate::scheme::ColorScheme;
use crate::store::PreferenceStore;

pub type BrowserController = ThemeController<LocalStore, Element, Option<MediaQueryList>>;

#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
}

// =============================================================================
// CAPABILITIES
// =============================================================================

/// `window.localStorage`, or nothing when storage is disabled.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme choice will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("failed to persist {key}={value}: {e:?}");
        }
    }
}

impl ColorScheme for MediaQueryList {
    fn prefers_dark(&self) -> bool {
        self.matches()
    }
}

// =============================================================================
// INSTALL
// =============================================================================

/// Read the optional JSON override from the root element.
fn load_config(root: &Element) -> ThemeConfig {
    ThemeConfig::from_root_attribute(root.get_attribute(CONFIG_ATTRIBUTE).as_deref())
}

/// Build the controller, apply the initial theme, and register listeners.
///
/// # Errors
///
/// Fails only when there is no document root to theme.
pub fn install() -> Result<Rc<BrowserController>, InstallError> {
    let window = web_sys::window().ok_or(InstallError::NoWindow)?;
    let document = window.document().ok_or(InstallError::NoDocument)?;
    let root = document.document_element().ok_or(InstallError::NoRootElement)?;

    let config = load_config(&root);
    let toggle = document.get_element_by_id(&config.toggle_id);
    let icon = document.get_element_by_id(&config.icon_id);
    let media_query = window.match_media(&config.media_query).ok().flatten();

    let controller = Rc::new(ThemeController::new(
        config,
        LocalStore::from_window(&window),
        root,
        icon,
        media_query.clone(),
    ));

    controller.init_theme();

    if let Some(toggle) = toggle {
        let ctl = Rc::clone(&controller);
        let cb = Closure::wrap(Box::new(move || {
            ctl.handle_toggle_click();
        }) as Box<dyn FnMut()>);
        if toggle
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to attach theme toggle click listener");
        }
        cb.forget();
    }

    if let Some(mq) = media_query {
        let ctl = Rc::clone(&controller);
        let cb = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            ctl.handle_scheme_change(event.matches());
        }) as Box<dyn FnMut(_)>);
        if mq
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to attach color scheme change listener");
        }
        cb.forget();
    }

    Ok(controller)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Warn);

    if let Err(e) = install() {
        log::warn!("theme toggle not installed: {e}");
    }
}
