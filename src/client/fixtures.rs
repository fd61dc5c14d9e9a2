//! Test fixtures and builders for feed records
//!
//! Builders start from plausible defaults so tests only spell out the
//! fields they assert on.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use super::models::{GithubRepo, HuggingfaceModel, RedditPost, Tweet};

/// Fixed timestamp shared by every fixture
pub fn fixture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

// ============================================================================
// RedditPostBuilder
// ============================================================================

#[derive(Debug, Clone)]
pub struct RedditPostBuilder {
    post: RedditPost,
}

impl RedditPostBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            post: RedditPost {
                title: format!("Post {}", id),
                subreddit: "PromptEngineering".to_string(),
                author: "tester".to_string(),
                score: 1,
                num_comments: 0,
                created: fixture_time(),
                url: Some(format!("https://reddit.com/r/PromptEngineering/{}", id)),
                selftext: String::new(),
                id,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.post.title = title.into();
        self
    }

    pub fn score(mut self, score: i64) -> Self {
        self.post.score = score;
        self
    }

    pub fn comments(mut self, count: u64) -> Self {
        self.post.num_comments = count;
        self
    }

    pub fn build(self) -> RedditPost {
        self.post
    }
}

// ============================================================================
// TweetBuilder
// ============================================================================

#[derive(Debug, Clone)]
pub struct TweetBuilder {
    tweet: Tweet,
}

impl TweetBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            tweet: Tweet {
                content: format!("Tweet {}", id),
                username: "@tester".to_string(),
                display_name: "Tester".to_string(),
                likes: 0,
                retweets: 0,
                created: fixture_time(),
                url: format!("https://twitter.com/tester/status/{}", id),
                id,
            },
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.tweet.content = content.into();
        self
    }

    pub fn engagement(mut self, likes: u64, retweets: u64) -> Self {
        self.tweet.likes = likes;
        self.tweet.retweets = retweets;
        self
    }

    pub fn build(self) -> Tweet {
        self.tweet
    }
}

// ============================================================================
// GithubRepoBuilder
// ============================================================================

#[derive(Debug, Clone)]
pub struct GithubRepoBuilder {
    repo: GithubRepo,
}

impl GithubRepoBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            repo: GithubRepo {
                repo: format!("repo-{}", id),
                author: "tester".to_string(),
                stars: 0,
                forks: 0,
                description: "Test repository".to_string(),
                updated: fixture_time(),
                url: format!("https://github.com/tester/repo-{}", id),
                language: Some("Rust".to_string()),
                issues: 0,
                id,
            },
        }
    }

    pub fn stars(mut self, stars: u64) -> Self {
        self.repo.stars = stars;
        self
    }

    pub fn language(mut self, language: Option<&str>) -> Self {
        self.repo.language = language.map(str::to_string);
        self
    }

    pub fn build(self) -> GithubRepo {
        self.repo
    }
}

// ============================================================================
// HuggingfaceModelBuilder
// ============================================================================

#[derive(Debug, Clone)]
pub struct HuggingfaceModelBuilder {
    model: HuggingfaceModel,
}

impl HuggingfaceModelBuilder {
    /// `id` is the full `author/name` model id
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let model = id.rsplit('/').next().unwrap_or(&id).to_string();
        let author = id.split('/').next().unwrap_or(&id).to_string();
        Self {
            model: HuggingfaceModel {
                url: format!("https://huggingface.co/{}", id),
                model,
                author,
                downloads: 0,
                description: "Test model".to_string(),
                updated: Some(fixture_time()),
                tags: Vec::new(),
                id,
            },
        }
    }

    pub fn downloads(mut self, downloads: u64) -> Self {
        self.model.downloads = downloads;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.model.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> HuggingfaceModel {
        self.model
    }
}
