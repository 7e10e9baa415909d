//! In-memory store used to simulate storage faults in tests

use std::collections::HashMap;

use super::{KeyValueStore, check_quota};
use crate::error::StorageError;

/// Map-backed store with an optional quota and an availability switch.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    quota: Option<usize>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Make every subsequent operation fail with `StorageError::Unavailable`
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Write a raw value, bypassing quota and availability checks
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
    }

    fn ensure_available(&self) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("memory store disabled".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_available()?;
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        check_quota(value, self.quota)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        self.ensure_available()?;
        Ok(self.slots.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_unavailable() {
        let mut store = MemoryStore::new();
        store.set_unavailable(true);
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable(_))));
        assert!(matches!(store.set("k", "v"), Err(StorageError::Unavailable(_))));
    }

    #[test]
    fn test_quota_rejects_large_value_and_keeps_old() {
        let mut store = MemoryStore::with_quota(4);
        store.set("k", "old").unwrap();
        assert!(store.set("k", "too large").is_err());
        assert_eq!(store.get("k").unwrap(), Some("old".to_string()));
    }
}
