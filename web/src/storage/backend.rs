use std::{cell::RefCell, collections::HashMap};

use crate::errors::StorageError;

/// String key/value storage shared between pages.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &'static str, value: &str) -> Result<(), StorageError>;
}

/// The browser's `localStorage`. On the server there is no storage, reads come back
/// empty and writes are refused.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
mod local_storage {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = localStorage)]
        pub fn getItem(key: &str) -> Option<String>;

        #[wasm_bindgen(catch, js_namespace = localStorage)]
        pub fn setItem(key: &str, value: &str) -> Result<(), JsValue>;
    }
}

impl KeyValueStore for BrowserStorage {
    #[cfg(feature = "hydrate")]
    fn get_item(&self, key: &str) -> Option<String> {
        local_storage::getItem(key)
    }

    #[cfg(not(feature = "hydrate"))]
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    #[cfg(feature = "hydrate")]
    fn set_item(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        local_storage::setItem(key, value).map_err(|_| StorageError::WriteFailed { key })
    }

    #[cfg(not(feature = "hydrate"))]
    fn set_item(&self, _key: &'static str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// In-process storage, used by tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}
