//! Persistent key-value substrate
//!
//! Settings are persisted as a single JSON blob under a fixed key. The
//! substrate holds string keys, string values, whole-value
//! overwrites.

pub mod file;
#[cfg(test)]
pub mod memory;

use crate::error::StorageError;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

/// Default quota for a store, mirroring a browser local-storage budget
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// A named-slot store holding string values.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`, returning whether one existed
    fn remove(&mut self, key: &str) -> Result<bool, StorageError>;
}

/// Check a value against an optional quota.
pub(crate) fn check_quota(value: &str, quota: Option<usize>) -> Result<(), StorageError> {
    match quota {
        Some(limit) if value.len() > limit => Err(StorageError::QuotaExceeded {
            size: value.len(),
            limit,
        }),
        _ => Ok(()),
    }
}
