//! Bounded content view history

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::content::ContentType;

/// Entries kept before the oldest is dropped
pub const HISTORY_CAPACITY: usize = 100;

/// Most recent views considered for recommendations
pub const RECENT_WINDOW: usize = 10;

/// Categories a recommendation pass draws from
pub const TOP_CATEGORIES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewHistoryEntry {
    pub content_id: String,
    pub content_type: ContentType,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

/// FIFO of content views
#[derive(Debug, Clone)]
pub struct ViewHistory {
    entries: VecDeque<ViewHistoryEntry>,
    capacity: usize,
}

impl Default for ViewHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl ViewHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: ViewHistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last `n` entries, oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &ViewHistoryEntry> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewHistoryEntry> {
        self.entries.iter()
    }

    /// Up to `limit` categories of the recent window, most viewed first.
    /// Equal counts keep the order in which the categories first appear.
    pub fn top_categories(&self, window: usize, limit: usize) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for entry in self.recent(window) {
            let count = counts.entry(entry.category.as_str()).or_insert(0);
            if *count == 0 {
                order.push(entry.category.as_str());
            }
            *count += 1;
        }

        order.sort_by_key(|category| std::cmp::Reverse(counts[category]));
        order.truncate(limit);
        order.into_iter().map(str::to_string).collect()
    }
}
