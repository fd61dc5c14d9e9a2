//! Per-source retrieval routines with sample-data fallback
//!
//! A routine never fails: whatever goes wrong while talking to a platform is
//! logged and the fixed sample records are returned in its place.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};

use super::models::{Feed, GithubRepo, HuggingfaceModel, Payload, RedditPost, Snapshot, Tweet};
use super::{FeedApi, Source, SourceKey, samples};
use crate::error::{ApiError, Error, Result};

/// Fallback-safe wrapper around a [`FeedApi`]
pub struct SourceRoutines<C: FeedApi> {
    api: Arc<C>,
    limit: usize,
}

impl<C: FeedApi> SourceRoutines<C> {
    /// Wrap `api`, requesting `limit` records per platform
    pub fn new(api: Arc<C>, limit: usize) -> Self {
        Self { api, limit }
    }

    /// The wrapped client
    pub fn api(&self) -> &Arc<C> {
        &self.api
    }

    /// Run the routine for `key`; `All` fans out to every platform
    pub async fn fetch(&self, key: SourceKey) -> Payload {
        match key {
            SourceKey::Single(source) => self.fetch_source(source).await,
            SourceKey::All => Payload::All(self.fetch_all().await),
        }
    }

    /// Run a single platform's routine
    pub async fn fetch_source(&self, source: Source) -> Payload {
        match source {
            Source::Reddit => Payload::Reddit(self.reddit().await),
            Source::Twitter => Payload::Twitter(self.twitter().await),
            Source::Github => Payload::Github(self.github().await),
            Source::Huggingface => Payload::Huggingface(self.huggingface().await),
        }
    }

    /// Fetch every platform concurrently; each one falls back independently
    pub async fn fetch_all(&self) -> Snapshot {
        let (reddit, twitter, github, huggingface) =
            tokio::join!(self.reddit(), self.twitter(), self.github(), self.huggingface());

        Snapshot {
            reddit,
            twitter,
            github,
            huggingface,
            timestamp: Utc::now(),
        }
    }

    async fn reddit(&self) -> Feed<RedditPost> {
        let result = self.api.list_reddit_posts(self.limit).await;
        settle(Source::Reddit, result, || {
            samples::reddit_posts(Utc::now(), self.limit)
        })
    }

    async fn twitter(&self) -> Feed<Tweet> {
        let result = self.api.list_tweets(self.limit).await;
        settle(Source::Twitter, result, || {
            samples::tweets(Utc::now(), self.limit)
        })
    }

    async fn github(&self) -> Feed<GithubRepo> {
        let result = self.api.list_github_repos(self.limit).await;
        settle(Source::Github, result, || {
            samples::github_repos(Utc::now(), self.limit)
        })
    }

    async fn huggingface(&self) -> Feed<HuggingfaceModel> {
        let result = self.api.list_huggingface_models(self.limit).await;
        settle(Source::Huggingface, result, || {
            samples::huggingface_models(Utc::now(), self.limit)
        })
    }
}

/// Turn a retrieval result into a feed, substituting samples on error
fn settle<T, F>(source: Source, result: Result<Vec<T>>, fallback: F) -> Feed<T>
where
    F: FnOnce() -> Vec<T>,
{
    match result {
        Ok(items) => {
            debug!("Fetched {} live {} records", items.len(), source);
            Feed::live(items)
        }
        Err(Error::Api(ApiError::NotConfigured(_))) => {
            info!("Using sample {} data", source);
            Feed::sample(fallback())
        }
        Err(e) => {
            warn!("Error fetching {} data, using sample data: {}", source, e);
            Feed::sample(fallback())
        }
    }
}
