//! GitHub repository model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository tagged with one of the watched topics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubRepo {
    /// Repository ID
    pub id: String,

    /// Repository name
    pub repo: String,

    /// Owner login
    pub author: String,

    /// Stargazer count
    pub stars: u64,

    /// Fork count
    pub forks: u64,

    /// Repository description
    pub description: String,

    /// Last update time
    pub updated: DateTime<Utc>,

    /// Repository page
    pub url: String,

    /// Primary language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Open issue count
    pub issues: u64,
}

/// Response of `/search/repositories`
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub items: Vec<RawRepo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRepo {
    pub id: u64,
    pub name: String,
    pub owner: RawOwner,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawOwner {
    pub login: String,
}

impl From<RawRepo> for GithubRepo {
    fn from(raw: RawRepo) -> Self {
        Self {
            id: raw.id.to_string(),
            repo: raw.name,
            author: raw.owner.login,
            stars: raw.stargazers_count,
            forks: raw.forks_count,
            description: raw.description.unwrap_or_default(),
            updated: raw.updated_at,
            url: raw.html_url,
            language: raw.language,
            issues: raw.open_issues_count,
        }
    }
}
