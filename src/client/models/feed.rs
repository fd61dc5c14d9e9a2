//! Payload types stored in the cache and pushed to listeners

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{GithubRepo, HuggingfaceModel, RedditPost, Tweet};
use crate::client::{Source, SourceKey};

/// Where the records of a feed came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Retrieved from the platform API
    Live,
    /// Fixed fallback records
    Sample,
}

/// Records for one platform together with their origin
#[derive(Debug, Clone, Serialize)]
pub struct Feed<T> {
    pub items: Vec<T>,
    pub origin: Origin,
}

impl<T> Feed<T> {
    pub fn live(items: Vec<T>) -> Self {
        Self {
            items,
            origin: Origin::Live,
        }
    }

    pub fn sample(items: Vec<T>) -> Self {
        Self {
            items,
            origin: Origin::Sample,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Merged result of fetching every platform at once
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub reddit: Feed<RedditPost>,
    pub twitter: Feed<Tweet>,
    pub github: Feed<GithubRepo>,
    pub huggingface: Feed<HuggingfaceModel>,
    pub timestamp: DateTime<Utc>,
}

/// Cached value for one [`SourceKey`]
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "source", content = "data", rename_all = "lowercase")]
pub enum Payload {
    Reddit(Feed<RedditPost>),
    Twitter(Feed<Tweet>),
    Github(Feed<GithubRepo>),
    Huggingface(Feed<HuggingfaceModel>),
    All(Snapshot),
}

impl Payload {
    /// The key this payload is cached under
    pub fn key(&self) -> SourceKey {
        match self {
            Payload::Reddit(_) => SourceKey::Single(Source::Reddit),
            Payload::Twitter(_) => SourceKey::Single(Source::Twitter),
            Payload::Github(_) => SourceKey::Single(Source::Github),
            Payload::Huggingface(_) => SourceKey::Single(Source::Huggingface),
            Payload::All(_) => SourceKey::All,
        }
    }

    /// Total number of records, summed across platforms for a snapshot
    pub fn record_count(&self) -> usize {
        match self {
            Payload::Reddit(feed) => feed.len(),
            Payload::Twitter(feed) => feed.len(),
            Payload::Github(feed) => feed.len(),
            Payload::Huggingface(feed) => feed.len(),
            Payload::All(snapshot) => {
                snapshot.reddit.len()
                    + snapshot.twitter.len()
                    + snapshot.github.len()
                    + snapshot.huggingface.len()
            }
        }
    }

    /// True when any part of the payload is fallback data
    pub fn uses_sample_data(&self) -> bool {
        match self {
            Payload::Reddit(feed) => feed.origin == Origin::Sample,
            Payload::Twitter(feed) => feed.origin == Origin::Sample,
            Payload::Github(feed) => feed.origin == Origin::Sample,
            Payload::Huggingface(feed) => feed.origin == Origin::Sample,
            Payload::All(snapshot) => [
                snapshot.reddit.origin,
                snapshot.twitter.origin,
                snapshot.github.origin,
                snapshot.huggingface.origin,
            ]
            .contains(&Origin::Sample),
        }
    }
}
