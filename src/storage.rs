//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use recipe_core::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;

/// Handle to the page's local storage. Looked up on every call, so it also
/// works when storage becomes available late.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_message(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                message: js_message(&e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: js_message(&e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: js_message(&e),
            })
    }
}
