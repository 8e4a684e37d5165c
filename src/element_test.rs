use super::*;

#[test]
fn new_element_is_bare() {
    let el = MemoryElement::new();
    assert_eq!(el.attribute("data-theme"), None);
    assert_eq!(el.class_name(), "");
}

#[test]
fn set_and_remove_attribute() {
    let el = MemoryElement::new();
    el.set_attribute("data-theme", "dark");
    assert!(el.has_attribute("data-theme"));
    assert_eq!(el.attribute("data-theme").as_deref(), Some("dark"));

    el.remove_attribute("data-theme");
    assert!(!el.has_attribute("data-theme"));
}

#[test]
fn removing_missing_attribute_is_noop() {
    let el = MemoryElement::new();
    el.remove_attribute("data-theme");
    assert!(!el.has_attribute("data-theme"));
}

#[test]
fn set_class_name_replaces_whole_class() {
    let el = MemoryElement::new();
    el.set_class_name("fa-solid fa-sun");
    el.set_class_name("fa-solid fa-moon");
    assert_eq!(el.class_name(), "fa-solid fa-moon");
}
