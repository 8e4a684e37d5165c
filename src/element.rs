//! Minimal DOM element capability used by the controller.
//!
//! Implemented for `web_sys::Element` under `hydrate` and for
//! [`MemoryElement`] everywhere else.

use std::cell::RefCell;
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

pub trait ElementHandle {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
    fn set_class_name(&self, class: &str);
}

/// Detached in-memory element.
#[derive(Debug, Default)]
pub struct MemoryElement {
    attributes: RefCell<BTreeMap<String, String>>,
    class_name: RefCell<String>,
}

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        self.class_name.borrow().clone()
    }

    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.borrow().contains_key(name)
    }
}

impl ElementHandle for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    fn remove_attribute(&self, name: &str) {
        self.attributes.borrow_mut().remove(name);
    }

    fn set_class_name(&self, class: &str) {
        class.clone_into(&mut self.class_name.borrow_mut());
    }
}

#[cfg(feature = "hydrate")]
impl ElementHandle for web_sys::Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if web_sys::Element::set_attribute(self, name, value).is_err() {
            log::warn!("failed to set attribute {name}");
        }
    }

    fn remove_attribute(&self, name: &str) {
        if web_sys::Element::remove_attribute(self, name).is_err() {
            log::warn!("failed to remove attribute {name}");
        }
    }

    fn set_class_name(&self, class: &str) {
        web_sys::Element::set_class_name(self, class);
    }
}
