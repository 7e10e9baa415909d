//! In-process key/value cache with optional per-entry TTL
//!
//! Expiry is lazy: entries are checked when read and swept by `stats()` and
//! `keys()`. There is no background timer and no capacity limit.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clock::{Clock, SystemClock};

/// A cached value with its insertion time and optional lifetime.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub key: String,
    pub value: T,
    pub timestamp: DateTime<Utc>,
    pub ttl: Option<Duration>,
}

impl<T> CacheEntry<T> {
    /// An entry is expired once more than `ttl` has elapsed since it was stored.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let Some(ttl) = self.ttl else {
            return false;
        };

        let elapsed = now
            .signed_duration_since(self.timestamp)
            .to_std()
            .unwrap_or(Duration::ZERO);

        elapsed > ttl
    }
}

/// Cache statistics, computed after an expiry sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub approx_memory_bytes: usize,
    /// Percentage of `get` calls that hit (0 when nothing was requested)
    pub hit_rate: f64,
    /// Percentage of `get` calls that missed (0 when nothing was requested)
    pub miss_rate: f64,
}

/// Generic TTL cache
///
/// `has` applies the same expiry rule as `get` but does not count toward
/// the hit/miss statistics.
pub struct Cache<T, C: Clock = SystemClock> {
    entries: HashMap<String, CacheEntry<T>>,
    hits: u64,
    misses: u64,
    clock: C,
}

impl<T> Cache<T, SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<T> Default for Cache<T, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl<T, C: Clock> Cache<T, C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
            clock,
        }
    }

    /// Insert or replace the entry for `key`
    pub fn set(&mut self, key: impl Into<String>, value: T, ttl: Option<Duration>) {
        let key = key.into();
        let entry = CacheEntry {
            key: key.clone(),
            value,
            timestamp: self.clock.now(),
            ttl,
        };
        self.entries.insert(key, entry);
    }

    /// Return the live value for `key`, counting a hit or a miss.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        self.evict_if_expired(key);

        match self.entries.get(key) {
            Some(entry) => {
                self.hits += 1;
                log::debug!("Cache hit: {}", key);
                Some(&entry.value)
            }
            None => {
                self.misses += 1;
                log::debug!("Cache miss: {}", key);
                None
            }
        }
    }

    /// Whether a live entry exists for `key`
    pub fn has(&mut self, key: &str) -> bool {
        self.evict_if_expired(key);
        self.entries.contains_key(key)
    }

    /// Remove the entry for `key`, returning whether one was present
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop every entry and reset the hit/miss counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Live keys, sorted
    pub fn keys(&mut self) -> Vec<String> {
        self.sweep();
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Remove every expired entry, returning how many were dropped
    pub fn sweep(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - self.entries.len();
        if removed > 0 {
            log::debug!("Swept {} expired cache entries", removed);
        }
        removed
    }

    fn evict_if_expired(&mut self, key: &str) {
        let now = self.clock.now();
        if self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired(now))
        {
            self.entries.remove(key);
        }
    }
}

impl<T: Serialize, C: Clock> Cache<T, C> {
    /// Sweep expired entries, then report size and hit/miss rates
    pub fn stats(&mut self) -> CacheStats {
        self.sweep();

        let approx_memory_bytes = self
            .entries
            .values()
            .map(|entry| {
                entry.key.len()
                    + serde_json::to_vec(&entry.value)
                        .map(|v| v.len())
                        .unwrap_or(0)
            })
            .sum();

        let requests = self.hits + self.misses;
        let (hit_rate, miss_rate) = if requests == 0 {
            (0.0, 0.0)
        } else {
            (
                self.hits as f64 / requests as f64 * 100.0,
                self.misses as f64 / requests as f64 * 100.0,
            )
        };

        CacheStats {
            total_entries: self.entries.len(),
            approx_memory_bytes,
            hit_rate,
            miss_rate,
        }
    }
}
