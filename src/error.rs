//! Error types for Groktutor

use std::time::Duration;
use thiserror::Error;

use crate::client::Source;

/// Result type alias for Groktutor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// The requested source name matches no registered routine.
    #[error("Invalid data source: {0}")]
    UnknownSource(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors raised while talking to an external platform.
///
/// These never reach callers of the cache service: source routines log them
/// and substitute sample data.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("No credentials configured for {0}")]
    NotConfigured(Source),

    #[error("Authentication failed for {0}")]
    Unauthorized(Source),

    #[error("Access denied by {0}")]
    Forbidden(Source),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `groktutor init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Site map consistency errors, raised when the navigation graph is loaded
#[derive(Debug, Error, PartialEq)]
pub enum NavigationError {
    #[error("Site map has no root section `{0}`")]
    MissingRoot(String),

    #[error("Root section `{0}` must not have a parent")]
    RootHasParent(String),

    #[error("Duplicate section id: {0}")]
    DuplicateId(String),

    #[error("Duplicate section path: {0}")]
    DuplicatePath(String),

    #[error("Section `{child}` is listed under `{listed_under}` but declares parent `{declared}`")]
    ParentMismatch {
        child: String,
        listed_under: String,
        declared: String,
    },

    #[error("Section `{0}` declares a parent that does not list it as a child")]
    OrphanedChild(String),

    #[error("Section `{0}` has no parent but is not listed under the root")]
    DetachedSection(String),

    #[error("Section `{0}` is not reachable from the root")]
    Unreachable(String),

    #[error("Duplicate content id: {0}")]
    DuplicateContent(String),

    #[error("Relevance score {score} for `{id}` is outside [0, 1]")]
    InvalidRelevance { id: String, score: f64 },
}
