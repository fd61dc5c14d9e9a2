//! Tweet model

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tweet matching one of the watched search queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    /// Tweet ID
    pub id: String,

    /// Tweet text
    pub content: String,

    /// Author handle including the leading `@`
    pub username: String,

    /// Author display name
    pub display_name: String,

    /// Like count
    pub likes: u64,

    /// Retweet count
    pub retweets: u64,

    /// Creation time
    pub created: DateTime<Utc>,

    /// Link to the tweet
    pub url: String,
}

impl Tweet {
    /// Likes plus retweets, used for ranking
    pub fn engagement(&self) -> u64 {
        self.likes + self.retweets
    }
}

/// Response of `/tweets/search/recent`
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub data: Vec<RawTweet>,
    #[serde(default)]
    pub includes: Option<Includes>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Includes {
    #[serde(default)]
    pub users: Vec<RawUser>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawUser {
    pub id: String,
    pub name: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTweet {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub public_metrics: PublicMetrics,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PublicMetrics {
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub retweet_count: u64,
}

impl SearchResponse {
    /// Resolve authors from the expansion block and normalize every tweet
    pub fn into_tweets(self) -> Vec<Tweet> {
        let users: HashMap<String, RawUser> = self
            .includes
            .map(|inc| inc.users)
            .unwrap_or_default()
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();

        self.data
            .into_iter()
            .map(|raw| {
                let author = raw.author_id.as_ref().and_then(|id| users.get(id));
                let (username, display_name, handle) = match author {
                    Some(user) => (
                        format!("@{}", user.username),
                        user.name.clone(),
                        user.username.clone(),
                    ),
                    None => (
                        "@unknown".to_string(),
                        "Unknown User".to_string(),
                        "unknown".to_string(),
                    ),
                };
                Tweet {
                    url: format!("https://twitter.com/{}/status/{}", handle, raw.id),
                    id: raw.id,
                    content: raw.text,
                    username,
                    display_name,
                    likes: raw.public_metrics.like_count,
                    retweets: raw.public_metrics.retweet_count,
                    created: raw.created_at,
                }
            })
            .collect()
    }
}
