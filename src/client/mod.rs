//! Platform feed clients
//!
//! A [`FeedApi`] implementation retrieves normalized records from one
//! external platform per method. [`SourceRoutines`] wraps any implementation
//! so that every failure is replaced by fixed sample data.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[cfg(test)]
pub mod fixtures;
pub mod live;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod routines;
pub mod samples;

pub use live::LiveFeedClient;
#[cfg(test)]
pub use mock::MockFeedClient;
pub use models::{
    Feed, GithubRepo, HuggingfaceModel, Origin, Payload, RedditPost, Snapshot, Tweet,
};
pub use routines::SourceRoutines;

/// One external platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Reddit,
    Twitter,
    Github,
    Huggingface,
}

impl Source {
    /// Every platform, in the order the aggregate snapshot lists them
    pub const ALL: [Source; 4] = [
        Source::Reddit,
        Source::Twitter,
        Source::Github,
        Source::Huggingface,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Reddit => "reddit",
            Source::Twitter => "twitter",
            Source::Github => "github",
            Source::Huggingface => "huggingface",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "reddit" => Ok(Source::Reddit),
            "twitter" => Ok(Source::Twitter),
            "github" => Ok(Source::Github),
            "huggingface" => Ok(Source::Huggingface),
            other => Err(Error::UnknownSource(other.to_string())),
        }
    }
}

/// Cache key: a single platform or the aggregate of all of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKey {
    Single(Source),
    All,
}

impl SourceKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKey::Single(source) => source.as_str(),
            SourceKey::All => "all",
        }
    }
}

impl From<Source> for SourceKey {
    fn from(source: Source) -> Self {
        SourceKey::Single(source)
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKey {
    type Err = Error;

    /// Names are matched exactly; anything unrecognized is an unknown source.
    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(SourceKey::All);
        }
        s.parse::<Source>().map(SourceKey::Single)
    }
}

/// Retrieval contract for the external platforms.
///
/// Implementations return normalized records or an error; they never
/// substitute fallback data themselves.
#[async_trait]
pub trait FeedApi: Send + Sync {
    /// Hot posts from the configured subreddits, by score
    async fn list_reddit_posts(&self, limit: usize) -> Result<Vec<RedditPost>>;

    /// Recent tweets for the configured queries, by engagement
    async fn list_tweets(&self, limit: usize) -> Result<Vec<Tweet>>;

    /// Repositories for the configured topics, by stars
    async fn list_github_repos(&self, limit: usize) -> Result<Vec<GithubRepo>>;

    /// Models matching the configured search, by downloads
    async fn list_huggingface_models(&self, limit: usize) -> Result<Vec<HuggingfaceModel>>;
}
