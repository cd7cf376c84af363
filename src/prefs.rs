//! Preference storage behind an explicit service object.
//!
//! The theme toggle receives a `PreferenceStore` rather than reaching for
//! `localStorage` itself. `MemoryStore` backs tests and browsers where local
//! storage is blocked; `LocalStore` is the browser implementation.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::PageError;

pub trait PreferenceStore {
    /// Stored value for `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Create or overwrite `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// Process-local store; contents vanish with the page.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`, falling back to memory when the browser denies access.
#[cfg(feature = "hydrate")]
#[derive(Debug)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
    fallback: MemoryStore,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().unwrap_or(None));
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme preference will not survive reloads");
        }
        Self { storage, fallback: MemoryStore::new() }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match &self.storage {
            Some(storage) => storage.get_item(key).unwrap_or(None),
            None => self.fallback.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        match &self.storage {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| PageError::Storage(format!("{e:?}"))),
            None => self.fallback.set(key, value),
        }
    }
}

#[cfg(test)]
#[path = "prefs_test.rs"]
mod tests;
