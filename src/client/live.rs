//! Live platform client
//!
//! Talks to the Reddit, Twitter, GitHub and HuggingFace HTTP APIs and
//! normalizes their responses. Failures are returned as [`ApiError`]s; the
//! fallback to sample data happens one layer up in [`super::SourceRoutines`].

use std::collections::HashSet;
use std::num::NonZeroU32;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::models::{GithubRepo, HuggingfaceModel, RedditPost, Tweet};
use super::models::{github, huggingface, reddit, twitter};
use super::{FeedApi, Source};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// User agent sent with every request (Reddit rejects anonymous agents)
const CLIENT_USER_AGENT: &str = concat!("Groktutor/", env!("CARGO_PKG_VERSION"));

/// Shared request budget across all platforms
const RATE_LIMIT_PER_SECOND: NonZeroU32 = NonZeroU32::new(10).unwrap();

/// HTTP client for the four external platforms
pub struct LiveFeedClient {
    http: HttpClient,
    config: Config,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl LiveFeedClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.request_timeout())
            .user_agent(CLIENT_USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(RATE_LIMIT_PER_SECOND);

        Ok(Self {
            http,
            config: config.clone(),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    /// Refuse live calls when sample mode is on
    fn ensure_live(&self, source: Source) -> Result<()> {
        if self.config.sample_mode {
            return Err(ApiError::NotConfigured(source).into());
        }
        Ok(())
    }

    /// Send a request and decode a JSON body, mapping HTTP failures
    async fn send_json<T: DeserializeOwned>(
        &self,
        source: Source,
        request: RequestBuilder,
    ) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            status if status.is_success() => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse {} response: {}", source, e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized(source).into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden(source).into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(std::time::Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }

    /// Exchange app credentials for an application-only OAuth token
    async fn reddit_token(&self, client_id: &str, client_secret: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
        }

        let request = self
            .http
            .post(&self.config.reddit.auth_url)
            .basic_auth(client_id, Some(client_secret))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials");

        let token: TokenResponse = self.send_json(Source::Reddit, request).await?;
        Ok(token.access_token)
    }
}

/// Page sizes accepted by the recent-search endpoint
const TWEET_PAGE_MIN: usize = 10;
const TWEET_PAGE_MAX: usize = 100;

/// Split `limit` evenly over `parts` queries, rounding up
fn per_query(limit: usize, parts: usize) -> usize {
    limit.div_ceil(parts.max(1))
}

#[async_trait]
impl FeedApi for LiveFeedClient {
    async fn list_reddit_posts(&self, limit: usize) -> Result<Vec<RedditPost>> {
        self.ensure_live(Source::Reddit)?;
        let cfg = &self.config.reddit;
        let (Some(client_id), Some(client_secret)) =
            (cfg.client_id.as_deref(), cfg.client_secret.as_deref())
        else {
            return Err(ApiError::NotConfigured(Source::Reddit).into());
        };

        let token = self.reddit_token(client_id, client_secret).await?;
        let per_sub = per_query(limit, cfg.subreddits.len()).to_string();

        let listings = try_join_all(cfg.subreddits.iter().map(|sub| {
            let url = format!("{}/r/{}/hot", cfg.base_url, sub);
            let request = self
                .http
                .get(url)
                .bearer_auth(&token)
                .query(&[("limit", per_sub.as_str())]);
            self.send_json::<reddit::Listing>(Source::Reddit, request)
        }))
        .await?;

        let mut posts: Vec<RedditPost> = listings
            .into_iter()
            .flat_map(|listing| listing.data.children)
            .map(|child| child.data.into())
            .collect();

        posts.sort_by(|a, b| b.score.cmp(&a.score));
        posts.truncate(limit);
        Ok(posts)
    }

    async fn list_tweets(&self, limit: usize) -> Result<Vec<Tweet>> {
        self.ensure_live(Source::Twitter)?;
        let cfg = &self.config.twitter;
        let Some(bearer) = cfg.bearer_token.as_deref() else {
            return Err(ApiError::NotConfigured(Source::Twitter).into());
        };

        // Overfetch to the endpoint minimum; the merged list is cut to `limit`.
        let max_results = per_query(limit, cfg.search_queries.len())
            .clamp(TWEET_PAGE_MIN, TWEET_PAGE_MAX)
            .to_string();

        let responses = try_join_all(cfg.search_queries.iter().map(|query| {
            let url = format!("{}/tweets/search/recent", cfg.base_url);
            let request = self.http.get(url).bearer_auth(bearer).query(&[
                ("query", query.as_str()),
                ("max_results", max_results.as_str()),
                ("tweet.fields", "public_metrics,created_at"),
                ("expansions", "author_id"),
                ("user.fields", "name,username"),
            ]);
            self.send_json::<twitter::SearchResponse>(Source::Twitter, request)
        }))
        .await?;

        let mut tweets: Vec<Tweet> = responses
            .into_iter()
            .flat_map(|response| response.into_tweets())
            .collect();

        tweets.sort_by(|a, b| b.engagement().cmp(&a.engagement()));
        tweets.truncate(limit);
        Ok(tweets)
    }

    async fn list_github_repos(&self, limit: usize) -> Result<Vec<GithubRepo>> {
        self.ensure_live(Source::Github)?;
        let cfg = &self.config.github;
        let Some(token) = cfg.token.as_deref() else {
            return Err(ApiError::NotConfigured(Source::Github).into());
        };

        let per_page = per_query(limit, cfg.topics.len()).to_string();

        let responses = try_join_all(cfg.topics.iter().map(|topic| {
            let url = format!("{}/search/repositories", cfg.base_url);
            let q = format!("topic:{}", topic);
            let request = self
                .http
                .get(url)
                .header(AUTHORIZATION, format!("token {}", token))
                .header(ACCEPT, "application/vnd.github.v3+json")
                .query(&[
                    ("q", q.as_str()),
                    ("sort", "stars"),
                    ("order", "desc"),
                    ("per_page", per_page.as_str()),
                ]);
            self.send_json::<github::SearchResponse>(Source::Github, request)
        }))
        .await?;

        // The same repository can match several topics
        let mut seen = HashSet::new();
        let mut repos: Vec<GithubRepo> = responses
            .into_iter()
            .flat_map(|response| response.items)
            .map(GithubRepo::from)
            .filter(|repo| seen.insert(repo.id.clone()))
            .collect();

        repos.sort_by(|a, b| b.stars.cmp(&a.stars));
        repos.truncate(limit);
        Ok(repos)
    }

    async fn list_huggingface_models(&self, limit: usize) -> Result<Vec<HuggingfaceModel>> {
        self.ensure_live(Source::Huggingface)?;
        let cfg = &self.config.huggingface;
        let Some(token) = cfg.token.as_deref() else {
            return Err(ApiError::NotConfigured(Source::Huggingface).into());
        };

        let limit_param = limit.to_string();
        let request = self
            .http
            .get(format!("{}/models", cfg.base_url))
            .bearer_auth(token)
            .query(&[
                ("search", cfg.search.as_str()),
                ("sort", "downloads"),
                ("direction", "-1"),
                ("limit", limit_param.as_str()),
            ]);

        let models: Vec<huggingface::RawModel> =
            self.send_json(Source::Huggingface, request).await?;
        Ok(models.into_iter().map(HuggingfaceModel::from).collect())
    }
}
