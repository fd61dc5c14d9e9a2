//! Reddit post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post from one of the watched subreddits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditPost {
    /// Post ID
    pub id: String,

    /// Post title
    pub title: String,

    /// Subreddit name
    pub subreddit: String,

    /// Author username
    pub author: String,

    /// Net upvotes
    pub score: i64,

    /// Number of comments
    pub num_comments: u64,

    /// Creation time
    pub created: DateTime<Utc>,

    /// Permalink (absent on sample data)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Post body
    #[serde(default)]
    pub selftext: String,
}

/// Listing envelope returned by `/r/{sub}/hot`
#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
    #[serde(default)]
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingChild {
    pub data: RawPost,
}

/// Post fields as the API sends them
#[derive(Debug, Deserialize)]
pub(crate) struct RawPost {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub author: String,
    pub subreddit: String,
    pub created_utc: f64,
    pub permalink: String,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub selftext: String,
}

impl From<RawPost> for RedditPost {
    fn from(raw: RawPost) -> Self {
        let created =
            DateTime::from_timestamp(raw.created_utc as i64, 0).unwrap_or(DateTime::UNIX_EPOCH);
        Self {
            id: raw.id,
            title: raw.title,
            subreddit: raw.subreddit,
            author: raw.author,
            score: raw.score,
            num_comments: raw.num_comments,
            created,
            url: Some(format!("https://reddit.com{}", raw.permalink)),
            selftext: raw.selftext,
        }
    }
}
