//! Normalized platform records and the payloads built from them

mod feed;
pub(crate) mod github;
pub(crate) mod huggingface;
pub(crate) mod reddit;
pub(crate) mod twitter;

pub use feed::{Feed, Origin, Payload, Snapshot};
pub use github::GithubRepo;
pub use huggingface::HuggingfaceModel;
pub use reddit::RedditPost;
pub use twitter::Tweet;
