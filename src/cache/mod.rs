//! In-memory cache for platform payloads
//!
//! Entries live for the process lifetime only and are keyed by source.

pub mod client;
pub mod clock;
pub mod storage;

use std::time::Duration;

/// Default time an entry stays fresh
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60); // 5 min

pub use client::CachedFeedClient;
pub use clock::{Clock, ManualClock, SystemClock};
pub use storage::{CacheEntry, CacheStats, CacheStorage, ClearStats};
