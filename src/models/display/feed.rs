//! Feed record rows

use chrono::{DateTime, Utc};
use tabled::Tabled;

use super::common::{format_age, truncate_string};
use crate::client::{Feed, GithubRepo, HuggingfaceModel, Origin, RedditPost, Snapshot, Tweet};

const TITLE_WIDTH: usize = 60;

#[derive(Debug, Clone, Tabled)]
pub struct RedditPostRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "SUBREDDIT")]
    pub subreddit: String,
    #[tabled(rename = "TITLE")]
    pub title: String,
    #[tabled(rename = "SCORE")]
    pub score: i64,
    #[tabled(rename = "COMMENTS")]
    pub comments: u64,
    #[tabled(rename = "AGE")]
    pub age: String,
}

impl RedditPostRow {
    pub fn new(post: &RedditPost, now: DateTime<Utc>) -> Self {
        Self {
            id: post.id.clone(),
            subreddit: format!("r/{}", post.subreddit),
            title: truncate_string(&post.title, TITLE_WIDTH),
            score: post.score,
            comments: post.num_comments,
            age: format_age(post.created, now),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct TweetRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "USER")]
    pub user: String,
    #[tabled(rename = "CONTENT")]
    pub content: String,
    #[tabled(rename = "LIKES")]
    pub likes: u64,
    #[tabled(rename = "RTS")]
    pub retweets: u64,
    #[tabled(rename = "AGE")]
    pub age: String,
}

impl TweetRow {
    pub fn new(tweet: &Tweet, now: DateTime<Utc>) -> Self {
        Self {
            id: tweet.id.clone(),
            user: format!("@{}", tweet.username),
            content: truncate_string(&tweet.content, TITLE_WIDTH),
            likes: tweet.likes,
            retweets: tweet.retweets,
            age: format_age(tweet.created, now),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct RepoRow {
    #[tabled(rename = "REPO")]
    pub repo: String,
    #[tabled(rename = "STARS")]
    pub stars: u64,
    #[tabled(rename = "FORKS")]
    pub forks: u64,
    #[tabled(rename = "LANG")]
    pub language: String,
    #[tabled(rename = "UPDATED")]
    pub updated: String,
}

impl RepoRow {
    pub fn new(repo: &GithubRepo, now: DateTime<Utc>) -> Self {
        Self {
            repo: format!("{}/{}", repo.author, repo.repo),
            stars: repo.stars,
            forks: repo.forks,
            language: repo.language.clone().unwrap_or_else(|| "--".to_string()),
            updated: format_age(repo.updated, now),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct ModelRow {
    #[tabled(rename = "MODEL")]
    pub model: String,
    #[tabled(rename = "DOWNLOADS")]
    pub downloads: u64,
    #[tabled(rename = "TAGS")]
    pub tags: String,
    #[tabled(rename = "UPDATED")]
    pub updated: String,
}

impl ModelRow {
    pub fn new(model: &HuggingfaceModel, now: DateTime<Utc>) -> Self {
        let tags = model.tags.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
        Self {
            model: model.id.clone(),
            downloads: model.downloads,
            tags: if tags.is_empty() { "--".to_string() } else { tags },
            updated: model
                .updated
                .map(|updated| format_age(updated, now))
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}

/// One line per platform when showing the aggregate snapshot
#[derive(Debug, Clone, Tabled)]
pub struct FeedSummaryRow {
    #[tabled(rename = "SOURCE")]
    pub source: String,
    #[tabled(rename = "RECORDS")]
    pub records: usize,
    #[tabled(rename = "ORIGIN")]
    pub origin: String,
}

impl FeedSummaryRow {
    fn new<T>(source: &str, feed: &Feed<T>) -> Self {
        Self {
            source: source.to_string(),
            records: feed.len(),
            origin: match feed.origin {
                Origin::Live => "live".to_string(),
                Origin::Sample => "sample".to_string(),
            },
        }
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Vec<Self> {
        vec![
            Self::new("reddit", &snapshot.reddit),
            Self::new("twitter", &snapshot.twitter),
            Self::new("github", &snapshot.github),
            Self::new("huggingface", &snapshot.huggingface),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::samples;

    #[test]
    fn test_reddit_row_formats_subreddit_and_age() {
        let now = Utc::now();
        let posts = samples::reddit_posts(now, 1);
        let row = RedditPostRow::new(&posts[0], now);

        assert_eq!(row.id, "rd1");
        assert!(row.subreddit.starts_with("r/"));
        assert_eq!(row.age, "12h");
        assert!(row.title.chars().count() <= TITLE_WIDTH);
    }

    #[test]
    fn test_snapshot_summary_lists_every_source() {
        let now = Utc::now();
        let snapshot = Snapshot {
            reddit: Feed::sample(samples::reddit_posts(now, 2)),
            twitter: Feed::live(Vec::new()),
            github: Feed::sample(samples::github_repos(now, 1)),
            huggingface: Feed::sample(samples::huggingface_models(now, 1)),
            timestamp: now,
        };

        let rows = FeedSummaryRow::from_snapshot(&snapshot);
        let summary: Vec<(&str, usize, &str)> = rows
            .iter()
            .map(|r| (r.source.as_str(), r.records, r.origin.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("reddit", 2, "sample"),
                ("twitter", 0, "live"),
                ("github", 1, "sample"),
                ("huggingface", 1, "sample"),
            ]
        );
    }
}
