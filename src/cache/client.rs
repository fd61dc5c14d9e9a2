//! Fetch-and-cache service
//!
//! Wraps the source routines with the TTL cache. The storage sits behind a
//! std mutex that is only ever held between awaits, never across one.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::debug;

use super::clock::{Clock, SystemClock};
use super::storage::{CacheStats, CacheStorage, ClearStats};
use crate::client::{FeedApi, Payload, SourceKey, SourceRoutines};
use crate::error::Result;

/// Cached access to every source routine.
pub struct CachedFeedClient<C: FeedApi> {
    routines: SourceRoutines<C>,
    cache: Mutex<CacheStorage>,
    clock: Arc<dyn Clock>,
}

impl<C: FeedApi> CachedFeedClient<C> {
    /// Create a cached client fetching `limit` records per source, with
    /// entries fresh for `ttl`.
    pub fn new(inner: Arc<C>, limit: usize, ttl: Duration) -> Self {
        Self::with_clock(inner, limit, ttl, Arc::new(SystemClock))
    }

    /// Same as [`new`](Self::new) with an explicit time source.
    pub fn with_clock(inner: Arc<C>, limit: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            routines: SourceRoutines::new(inner, limit),
            cache: Mutex::new(CacheStorage::new(ttl)),
            clock,
        }
    }

    /// The wrapped feed client
    pub fn inner(&self) -> &Arc<C> {
        self.routines.api()
    }

    /// Payload for a source name.
    ///
    /// Only an unrecognized name is an error; retrieval failures are
    /// already replaced by sample data inside the payload.
    pub async fn get(&self, source: &str, force_refresh: bool) -> Result<Arc<Payload>> {
        let key: SourceKey = source.parse()?;
        Ok(self.get_key(key, force_refresh).await)
    }

    /// Payload for a parsed key. A fresh entry is returned as the same `Arc`
    /// without running the routine.
    pub async fn get_key(&self, key: SourceKey, force_refresh: bool) -> Arc<Payload> {
        if !force_refresh {
            let now = self.clock.now();
            let cached = self.storage().get(key, now);
            if let Some(data) = cached {
                debug!("Cache hit: {}", key);
                return data;
            }
            debug!("Cache miss: {}", key);
        } else {
            debug!("Forced refresh: {}", key);
        }

        let data = Arc::new(self.routines.fetch(key).await);
        let now = self.clock.now();
        self.storage().put(key, data.clone(), now);
        data
    }

    /// Drop the entry for a source name; true if one existed
    pub fn invalidate(&self, source: &str) -> Result<bool> {
        let key: SourceKey = source.parse()?;
        Ok(self.invalidate_key(key))
    }

    pub fn invalidate_key(&self, key: SourceKey) -> bool {
        self.storage().delete(key)
    }

    /// Drop every entry
    pub fn invalidate_all(&self) -> ClearStats {
        self.storage().clear_all()
    }

    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now();
        self.storage().stats(now)
    }

    pub fn ttl(&self) -> Duration {
        self.storage().ttl()
    }

    fn storage(&self) -> MutexGuard<'_, CacheStorage> {
        // A panic while holding the lock cannot leave an entry half-written.
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
