//! Mock feed client for testing
//!
//! Serves configured records per platform without touching the network,
//! and records how often each platform was asked.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::models::{GithubRepo, HuggingfaceModel, RedditPost, Tweet};
use super::{FeedApi, Source};
use crate::error::{ApiError, Result};

/// Mock feed client.
///
/// # Example
/// ```ignore
/// let mock = MockFeedClient::new()
///     .with_reddit(vec![RedditPostBuilder::new("p1").build()])
///     .await;
///
/// let posts = mock.list_reddit_posts(10).await?;
/// assert_eq!(posts.len(), 1);
/// ```
#[derive(Default)]
pub struct MockFeedClient {
    reddit: Arc<Mutex<Vec<RedditPost>>>,
    tweets: Arc<Mutex<Vec<Tweet>>>,
    github: Arc<Mutex<Vec<GithubRepo>>>,
    huggingface: Arc<Mutex<Vec<HuggingfaceModel>>>,
    /// Per-platform failures, returned on every call
    failures: Arc<Mutex<HashMap<Source, ApiError>>>,
    /// Error for the next call only, whatever the platform
    error: Arc<Mutex<Option<ApiError>>>,
    /// Simulated latency for every call
    delay: Arc<Mutex<Option<Duration>>>,
    call_count: Arc<Mutex<CallCounts>>,
    last_limit: Arc<Mutex<Option<usize>>>,
}

/// Per-platform call counts
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub reddit: usize,
    pub twitter: usize,
    pub github: usize,
    pub huggingface: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.reddit + self.twitter + self.github + self.huggingface
    }

    pub fn for_source(&self, source: Source) -> usize {
        match source {
            Source::Reddit => self.reddit,
            Source::Twitter => self.twitter,
            Source::Github => self.github,
            Source::Huggingface => self.huggingface,
        }
    }
}

impl MockFeedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_reddit(self, posts: Vec<RedditPost>) -> Self {
        *self.reddit.lock().await = posts;
        self
    }

    pub async fn with_tweets(self, tweets: Vec<Tweet>) -> Self {
        *self.tweets.lock().await = tweets;
        self
    }

    pub async fn with_github(self, repos: Vec<GithubRepo>) -> Self {
        *self.github.lock().await = repos;
        self
    }

    pub async fn with_huggingface(self, models: Vec<HuggingfaceModel>) -> Self {
        *self.huggingface.lock().await = models;
        self
    }

    /// Make every call for `source` fail with `error`.
    pub async fn with_failure(self, source: Source, error: ApiError) -> Self {
        self.failures.lock().await.insert(source, error);
        self
    }

    /// Fail the next call only. The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Sleep for `delay` inside every call.
    pub async fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().await = Some(delay);
        self
    }

    /// Stop failing calls for `source`.
    pub async fn recover(&self, source: Source) {
        self.failures.lock().await.remove(&source);
    }

    /// Replace the posts served from now on.
    pub async fn set_reddit(&self, posts: Vec<RedditPost>) {
        *self.reddit.lock().await = posts;
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Limit passed to the most recent call
    pub async fn last_limit(&self) -> Option<usize> {
        *self.last_limit.lock().await
    }

    /// Count the call, then apply latency and any configured failure.
    async fn enter(&self, source: Source, limit: usize) -> Result<()> {
        {
            let mut counts = self.call_count.lock().await;
            match source {
                Source::Reddit => counts.reddit += 1,
                Source::Twitter => counts.twitter += 1,
                Source::Github => counts.github += 1,
                Source::Huggingface => counts.huggingface += 1,
            }
        }
        *self.last_limit.lock().await = Some(limit);

        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        if let Some(e) = self.failures.lock().await.get(&source) {
            return Err(e.clone().into());
        }
        Ok(())
    }
}

fn take<T: Clone>(items: &[T], limit: usize) -> Vec<T> {
    items.iter().take(limit).cloned().collect()
}

#[async_trait]
impl FeedApi for MockFeedClient {
    async fn list_reddit_posts(&self, limit: usize) -> Result<Vec<RedditPost>> {
        self.enter(Source::Reddit, limit).await?;
        Ok(take(&self.reddit.lock().await, limit))
    }

    async fn list_tweets(&self, limit: usize) -> Result<Vec<Tweet>> {
        self.enter(Source::Twitter, limit).await?;
        Ok(take(&self.tweets.lock().await, limit))
    }

    async fn list_github_repos(&self, limit: usize) -> Result<Vec<GithubRepo>> {
        self.enter(Source::Github, limit).await?;
        Ok(take(&self.github.lock().await, limit))
    }

    async fn list_huggingface_models(&self, limit: usize) -> Result<Vec<HuggingfaceModel>> {
        self.enter(Source::Huggingface, limit).await?;
        Ok(take(&self.huggingface.lock().await, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{RedditPostBuilder, TweetBuilder};
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_serves_configured_records() {
        let mock = MockFeedClient::new()
            .with_reddit(vec![
                RedditPostBuilder::new("a").build(),
                RedditPostBuilder::new("b").build(),
            ])
            .await
            .with_tweets(vec![TweetBuilder::new("t").build()])
            .await;

        assert_eq!(mock.list_reddit_posts(1).await.unwrap().len(), 1);
        assert_eq!(mock.list_tweets(10).await.unwrap()[0].id, "t");
        assert!(mock.list_github_repos(10).await.unwrap().is_empty());

        let counts = mock.call_counts().await;
        assert_eq!(counts.reddit, 1);
        assert_eq!(counts.twitter, 1);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_mock_one_shot_error_is_consumed() {
        let mock = MockFeedClient::new()
            .with_error(ApiError::ServerError("boom".to_string()))
            .await;

        assert!(matches!(
            mock.list_github_repos(5).await,
            Err(Error::Api(ApiError::ServerError(_)))
        ));
        assert!(mock.list_github_repos(5).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_failure_persists_until_recovered() {
        let mock = MockFeedClient::new()
            .with_failure(Source::Twitter, ApiError::Unauthorized(Source::Twitter))
            .await;

        assert!(mock.list_tweets(5).await.is_err());
        assert!(mock.list_tweets(5).await.is_err());
        assert!(mock.list_reddit_posts(5).await.is_ok());

        mock.recover(Source::Twitter).await;
        assert!(mock.list_tweets(5).await.is_ok());
        assert_eq!(mock.call_counts().await.for_source(Source::Twitter), 3);
    }
}
