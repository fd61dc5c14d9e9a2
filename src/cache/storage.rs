//! In-memory TTL storage for fetched payloads
//!
//! One entry per source key, overwritten wholesale on every store. An entry
//! older than the TTL is treated as absent and removed on the read that
//! notices it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::{Payload, SourceKey};

/// A stored payload and the time it was stored
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: Arc<Payload>,
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Fresh while strictly younger than `ttl`, compared in milliseconds.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let age_ms = (now - self.stored_at).num_milliseconds();
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        age_ms < ttl_ms
    }
}

/// TTL-bounded payload storage
pub struct CacheStorage {
    entries: HashMap<SourceKey, CacheEntry>,
    ttl: Duration,
}

impl CacheStorage {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh payload for `key`, evicting the entry if it has expired
    pub fn get(&mut self, key: SourceKey, now: DateTime<Utc>) -> Option<Arc<Payload>> {
        match self.entries.get(&key) {
            Some(entry) if entry.is_fresh(now, self.ttl) => Some(entry.data.clone()),
            Some(_) => {
                log::debug!("Cache entry for {} expired, evicting", key);
                self.entries.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Store `data` for `key`, replacing any previous entry
    pub fn put(&mut self, key: SourceKey, data: Arc<Payload>, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            CacheEntry {
                data,
                stored_at: now,
            },
        );
    }

    /// Remove the entry for `key`; true if one existed
    pub fn delete(&mut self, key: SourceKey) -> bool {
        self.entries.remove(&key).is_some()
    }

    /// Remove every entry
    pub fn clear_all(&mut self) -> ClearStats {
        let entries_removed = self.entries.len();
        self.entries.clear();
        ClearStats { entries_removed }
    }

    /// Entry counts and age bounds as of `now`. Expired entries are counted,
    /// not evicted.
    pub fn stats(&self, now: DateTime<Utc>) -> CacheStats {
        let valid: Vec<&CacheEntry> = self
            .entries
            .values()
            .filter(|e| e.is_fresh(now, self.ttl))
            .collect();

        let mut keys: Vec<SourceKey> = self.entries.keys().copied().collect();
        keys.sort();

        CacheStats {
            total_entries: self.entries.len(),
            valid_entries: valid.len(),
            expired_entries: self.entries.len() - valid.len(),
            oldest_entry: valid.iter().map(|e| e.stored_at).min(),
            newest_entry: valid.iter().map(|e| e.stored_at).max(),
            keys: keys.iter().map(|k| k.as_str().to_string()).collect(),
        }
    }
}

/// Statistics about a clear operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearStats {
    pub entries_removed: usize,
}

/// Statistics about cache state
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
    pub oldest_entry: Option<DateTime<Utc>>,
    pub newest_entry: Option<DateTime<Utc>>,
    /// Cached source keys, fresh or not
    pub keys: Vec<String>,
}
