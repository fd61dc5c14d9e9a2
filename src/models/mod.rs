//! Display models for CLI output
//!
//! Row types that turn feed records and navigation results into table
//! columns. JSON output serializes the domain types directly.

pub mod display;

pub use display::{
    ContentRow, FeedSummaryRow, ModelRow, RedditPostRow, RepoRow, SectionRow, TweetRow,
};
