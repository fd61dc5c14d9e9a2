//! Table row implementations

mod common;
mod feed;
mod navigation;

pub use common::{format_age, truncate_string};
pub use feed::{FeedSummaryRow, ModelRow, RedditPostRow, RepoRow, TweetRow};
pub use navigation::{ContentRow, SectionRow};
