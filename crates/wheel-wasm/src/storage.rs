//! `localStorage` key-value store.

use wheel_core::{KeyValueStore, WheelError};

/// Browser `localStorage`. Construction never fails; a page where storage
/// is disabled gets a store whose every call errors.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; entries will not be remembered");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, WheelError> {
        self.storage
            .as_ref()
            .ok_or_else(|| WheelError::Storage("localStorage unavailable".to_string()))
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, WheelError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| WheelError::Storage(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WheelError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| WheelError::Storage(format!("{e:?}")))
    }
}
