//! # theme-toggle
//!
//! Dark/light theme switching for the documentation site, compiled to
//! WebAssembly and loaded from the page `<head>`.
//!
//! The stored choice (`localStorage["theme"]`) wins; without one the OS
//! `prefers-color-scheme` signal decides. The active theme is shown by a
//! `data-theme="dark"` marker on `<html>` and mirrored by the toggle icon.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The `dark`/`light` enumeration |
//! | [`config`] | Storage key, element ids, and icon classes |
//! | [`controller`] | Resolve, apply, persist, and react to events |
//! | [`store`] | Persistent preference storage capability |
//! | [`element`] | DOM element capability |
//! | [`scheme`] | OS color-scheme signal capability |
//! | `browser` | `web_sys` bindings and the wasm entry point (`hydrate` only) |

pub mod config;
pub mod controller;
pub mod element;
pub mod scheme;
pub mod store;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use theme::Theme;
