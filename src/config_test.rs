use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_site_markup() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.icon_id, "theme-icon");
    assert_eq!(config.marker_attribute, "data-theme");
    assert_eq!(config.media_query, "(prefers-color-scheme: dark)");
}

#[test]
fn default_validates() {
    assert!(ThemeConfig::default().validate().is_ok());
}

#[test]
fn icon_class_sun_for_dark_moon_for_light() {
    let config = ThemeConfig::default();
    assert_eq!(config.icon_class(Theme::Dark), "fa-solid fa-sun");
    assert_eq!(config.icon_class(Theme::Light), "fa-solid fa-moon");
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config = ThemeConfig::from_json(r#"{"storage_key":"docs-theme"}"#).unwrap();
    assert_eq!(config.storage_key, "docs-theme");
    assert_eq!(config.toggle_id, DEFAULT_TOGGLE_ID);
    assert_eq!(config.dark_icon_class, DEFAULT_DARK_ICON_CLASS);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
}

#[test]
fn malformed_json_is_rejected() {
    let err = ThemeConfig::from_json("{storage_key:").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn blank_required_field_is_rejected() {
    let err = ThemeConfig::from_json(r#"{"marker_attribute":"  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField("marker_attribute")));
}

#[test]
fn blank_icon_class_is_allowed() {
    let config = ThemeConfig::from_json(r#"{"dark_icon_class":""}"#).unwrap();
    assert_eq!(config.icon_class(Theme::Dark), "");
}

// =============================================================
// Root attribute resolution
// =============================================================

#[test]
fn missing_root_attribute_gives_default() {
    assert_eq!(ThemeConfig::from_root_attribute(None), ThemeConfig::default());
}

#[test]
fn malformed_root_attribute_falls_back_to_default() {
    assert_eq!(ThemeConfig::from_root_attribute(Some("{storage_key:")), ThemeConfig::default());
}

#[test]
fn blank_required_field_in_root_attribute_falls_back_to_default() {
    let config = ThemeConfig::from_root_attribute(Some(r#"{"marker_attribute":" "}"#));
    assert_eq!(config, ThemeConfig::default());
}

#[test]
fn valid_root_attribute_is_applied() {
    let config = ThemeConfig::from_root_attribute(Some(r#"{"icon_id":"mode-icon"}"#));
    assert_eq!(config.icon_id, "mode-icon");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
}
