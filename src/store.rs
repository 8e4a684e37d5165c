//! Persistent preference storage capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `window.localStorage` (see `browser::LocalStore`).
//! Natively, and in tests, `MemoryStore` stands in for it.

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Synchronous string key-value store.
///
/// Writes are best-effort: implementations swallow failures rather than
/// surfacing them to the controller.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);

    /// Whether `key` holds a non-empty value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }

    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
