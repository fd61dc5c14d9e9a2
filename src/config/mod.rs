//! Configuration management for Groktutor

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Environment variables that override credentials from the config file
pub const ENV_REDDIT_CLIENT_ID: &str = "GROKTUTOR_REDDIT_CLIENT_ID";
pub const ENV_REDDIT_CLIENT_SECRET: &str = "GROKTUTOR_REDDIT_CLIENT_SECRET";
pub const ENV_TWITTER_BEARER_TOKEN: &str = "GROKTUTOR_TWITTER_BEARER_TOKEN";
pub const ENV_GITHUB_TOKEN: &str = "GROKTUTOR_GITHUB_TOKEN";
pub const ENV_HUGGINGFACE_TOKEN: &str = "GROKTUTOR_HUGGINGFACE_TOKEN";

/// Longest accepted polling interval (one week)
pub const MAX_POLL_SECS: u64 = 7 * 24 * 60 * 60;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Serve sample data for every source without touching the network
    #[serde(default)]
    pub sample_mode: bool,

    /// Number of records requested per source
    #[serde(default = "default_feed_limit")]
    pub feed_limit: usize,

    /// How long a fetched payload stays fresh
    #[serde(default = "default_cache_duration_secs")]
    pub cache_duration_secs: u64,

    /// Per-request timeout for live platform calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Polling intervals for the background notifier
    #[serde(default)]
    pub poll: PollConfig,

    #[serde(default)]
    pub reddit: RedditConfig,

    #[serde(default)]
    pub twitter: TwitterConfig,

    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub huggingface: HuggingfaceConfig,
}

/// Polling intervals in seconds, one per source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    #[serde(default = "default_fast_poll_secs")]
    pub reddit_secs: u64,
    #[serde(default = "default_fast_poll_secs")]
    pub twitter_secs: u64,
    #[serde(default = "default_github_poll_secs")]
    pub github_secs: u64,
    #[serde(default = "default_huggingface_poll_secs")]
    pub huggingface_secs: u64,
}

/// Reddit API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    #[serde(default = "default_reddit_base_url")]
    pub base_url: String,

    #[serde(default = "default_reddit_auth_url")]
    pub auth_url: String,

    #[serde(default = "default_subreddits")]
    pub subreddits: Vec<String>,
}

/// Twitter API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,

    #[serde(default = "default_twitter_base_url")]
    pub base_url: String,

    #[serde(default = "default_search_queries")]
    pub search_queries: Vec<String>,
}

/// GitHub API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default = "default_github_base_url")]
    pub base_url: String,

    #[serde(default = "default_topics")]
    pub topics: Vec<String>,
}

/// HuggingFace API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingfaceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default = "default_huggingface_base_url")]
    pub base_url: String,

    #[serde(default = "default_model_search")]
    pub search: String,
}

fn default_feed_limit() -> usize {
    10
}

fn default_cache_duration_secs() -> u64 {
    5 * 60
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_fast_poll_secs() -> u64 {
    5 * 60
}

fn default_github_poll_secs() -> u64 {
    30 * 60
}

fn default_huggingface_poll_secs() -> u64 {
    60 * 60
}

fn default_reddit_base_url() -> String {
    "https://oauth.reddit.com".to_string()
}

fn default_reddit_auth_url() -> String {
    "https://www.reddit.com/api/v1/access_token".to_string()
}

fn default_subreddits() -> Vec<String> {
    [
        "PromptEngineering",
        "MachineLearning",
        "artificial",
        "LocalLLaMA",
        "OpenAI",
        "AnthropicClaude",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_twitter_base_url() -> String {
    "https://api.twitter.com/2".to_string()
}

fn default_search_queries() -> Vec<String> {
    [
        "prompt engineering",
        "LLM prompting",
        "AI prompts",
        "ChatGPT prompts",
        "Claude prompts",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_github_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_topics() -> Vec<String> {
    [
        "prompt-engineering",
        "llm",
        "ai-prompts",
        "langchain",
        "llama-index",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_huggingface_base_url() -> String {
    "https://huggingface.co/api".to_string()
}

fn default_model_search() -> String {
    "prompt".to_string()
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            reddit_secs: default_fast_poll_secs(),
            twitter_secs: default_fast_poll_secs(),
            github_secs: default_github_poll_secs(),
            huggingface_secs: default_huggingface_poll_secs(),
        }
    }
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            base_url: default_reddit_base_url(),
            auth_url: default_reddit_auth_url(),
            subreddits: default_subreddits(),
        }
    }
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            bearer_token: None,
            base_url: default_twitter_base_url(),
            search_queries: default_search_queries(),
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: default_github_base_url(),
            topics: default_topics(),
        }
    }
}

impl Default for HuggingfaceConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: default_huggingface_base_url(),
            search: default_model_search(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_mode: false,
            feed_limit: default_feed_limit(),
            cache_duration_secs: default_cache_duration_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            poll: PollConfig::default(),
            reddit: RedditConfig::default(),
            twitter: TwitterConfig::default(),
            github: GithubConfig::default(),
            huggingface: HuggingfaceConfig::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".groktutor").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from an optional path, falling back to defaults when
    /// no file exists. Credentials from the environment are applied last.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        let mut config = match Self::load_from(Self::resolve_path(path)?) {
            Ok(config) => config,
            Err(crate::error::Error::Config(ConfigError::NotFound)) => {
                log::debug!("No config file found, using defaults");
                Config::default()
            }
            Err(e) => return Err(e),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Save configuration to an optional path (defaults to ~/.groktutor/config.yaml)
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Credentials live in this file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Overlay credentials from environment lookups.
    ///
    /// The lookup is injected so tests do not have to mutate process state.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty(ENV_REDDIT_CLIENT_ID) {
            self.reddit.client_id = Some(v);
        }
        if let Some(v) = non_empty(ENV_REDDIT_CLIENT_SECRET) {
            self.reddit.client_secret = Some(v);
        }
        if let Some(v) = non_empty(ENV_TWITTER_BEARER_TOKEN) {
            self.twitter.bearer_token = Some(v);
        }
        if let Some(v) = non_empty(ENV_GITHUB_TOKEN) {
            self.github.token = Some(v);
        }
        if let Some(v) = non_empty(ENV_HUGGINGFACE_TOKEN) {
            self.huggingface.token = Some(v);
        }
    }

    /// Reject values that would make the services misbehave
    pub fn validate(&self) -> Result<()> {
        if self.feed_limit == 0 {
            return Err(ConfigError::Invalid("feed_limit must be at least 1".to_string()).into());
        }
        let intervals = [
            self.poll.reddit_secs,
            self.poll.twitter_secs,
            self.poll.github_secs,
            self.poll.huggingface_secs,
        ];
        if intervals.iter().any(|secs| !(1..=MAX_POLL_SECS).contains(secs)) {
            return Err(ConfigError::Invalid(format!(
                "poll intervals must be between 1 and {} seconds",
                MAX_POLL_SECS
            ))
            .into());
        }
        Ok(())
    }

    /// Freshness window for cached payloads
    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration_secs)
    }

    /// Timeout applied to each live request
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
