//! Persistence adapter for the entry list.
//!
//! The list is stored as a JSON array of strings under one fixed key.
//! Nothing in here ever fails the caller: a broken or missing store just
//! means the wheel starts without memory of the previous session.

use crate::error::WheelError;
use std::collections::HashMap;

/// Host key-value storage (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, WheelError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), WheelError>;
}

/// In-memory store. Each direction can be switched to failing, which stands
/// in for disabled storage or an exceeded quota.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw value, bypassing `fail_writes`.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, WheelError> {
        if self.fail_reads {
            return Err(WheelError::Storage("reads disabled".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WheelError> {
        if self.fail_writes {
            return Err(WheelError::Storage("quota exceeded".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Saves and loads the entry list under a fixed key.
pub struct EntryStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Overwrite the stored list. Failures are logged and dropped.
    pub fn save(&mut self, entries: &[String]) {
        if let Err(e) = self.try_save(entries) {
            log::warn!("Failed to persist entries: {e}");
        }
    }

    /// Read the stored list, or `[]` when absent, unreadable, or not an array.
    pub fn load(&self) -> Vec<String> {
        match self.try_load() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Failed to read entries: {e}");
                Vec::new()
            }
        }
    }

    fn try_save(&mut self, entries: &[String]) -> Result<(), WheelError> {
        let json = serde_json::to_string(entries)?;
        self.store.set(&self.key, &json)
    }

    fn try_load(&self) -> Result<Vec<String>, WheelError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        let serde_json::Value::Array(items) = value else {
            log::warn!("Stored entries under {:?} are not an array; ignoring", self.key);
            return Ok(Vec::new());
        };
        let total = items.len();
        let entries: Vec<String> = items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect();
        if entries.len() != total {
            log::warn!(
                "Dropped {} non-string stored entries",
                total - entries.len()
            );
        }
        Ok(entries)
    }
}
