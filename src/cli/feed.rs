//! Feed command implementation

use std::time::Duration;

use chrono::Utc;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::{Feed, Origin, Payload, SourceKey};
use crate::error::Result;
use crate::models::display::format_age;
use crate::models::{FeedSummaryRow, ModelRow, RedditPostRow, RepoRow, TweetRow};
use crate::output::{json::JsonOutput, table};

/// Run the feed command
pub async fn run(
    opts: &GlobalOptions,
    source: &str,
    refresh: bool,
    limit: Option<usize>,
) -> Result<()> {
    let key: SourceKey = source.parse()?;
    let ctx = CommandContext::new(opts, limit)?;

    let spinner = spinner(&format!("Fetching {}...", key));
    let payload = ctx.app.feeds().get_key(key, refresh).await;
    spinner.finish_and_clear();

    print_payload(&payload, ctx.format)
}

/// Spinner on stderr; hidden automatically when stderr is not a terminal
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Render a payload in the requested format
pub fn print_payload(payload: &Payload, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = JsonOutput::new(payload).with_sample_flag(payload.uses_sample_data());
            println!("{}", output.to_pretty()?);
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", render_table(payload));
            Ok(())
        }
        OutputFormat::Pretty => {
            print!("{}", render_pretty(payload));
            Ok(())
        }
    }
}

fn render_table(payload: &Payload) -> String {
    let now = Utc::now();
    match payload {
        Payload::Reddit(feed) => rows(feed, |p| RedditPostRow::new(p, now)),
        Payload::Twitter(feed) => rows(feed, |t| TweetRow::new(t, now)),
        Payload::Github(feed) => rows(feed, |r| RepoRow::new(r, now)),
        Payload::Huggingface(feed) => rows(feed, |m| ModelRow::new(m, now)),
        Payload::All(snapshot) => table::format_table(&FeedSummaryRow::from_snapshot(snapshot)),
    }
}

fn rows<T, R: tabled::Tabled>(feed: &Feed<T>, row: impl Fn(&T) -> R) -> String {
    let rows: Vec<R> = feed.items.iter().map(row).collect();
    table::format_table(&rows)
}

fn render_pretty(payload: &Payload) -> String {
    let now = Utc::now();
    let mut out = String::new();
    match payload {
        Payload::Reddit(feed) => {
            out.push_str(&heading("Reddit", feed.origin));
            for post in &feed.items {
                out.push_str(&format!(
                    "  {} {}\n    {} · ▲{} · {} comments · {}\n",
                    post.id.dimmed(),
                    post.title.bold(),
                    format!("r/{}", post.subreddit).cyan(),
                    post.score,
                    post.num_comments,
                    format_age(post.created, now)
                ));
            }
        }
        Payload::Twitter(feed) => {
            out.push_str(&heading("Twitter", feed.origin));
            for tweet in &feed.items {
                out.push_str(&format!(
                    "  {} {} {}\n    {}\n    ♥{} · ↻{} · {}\n",
                    tweet.id.dimmed(),
                    tweet.display_name.bold(),
                    format!("@{}", tweet.username).cyan(),
                    tweet.content,
                    tweet.likes,
                    tweet.retweets,
                    format_age(tweet.created, now)
                ));
            }
        }
        Payload::Github(feed) => {
            out.push_str(&heading("GitHub", feed.origin));
            for repo in &feed.items {
                out.push_str(&format!(
                    "  {} ★{}\n    {}\n",
                    format!("{}/{}", repo.author, repo.repo).bold(),
                    repo.stars,
                    repo.description
                ));
            }
        }
        Payload::Huggingface(feed) => {
            out.push_str(&heading("HuggingFace", feed.origin));
            for model in &feed.items {
                out.push_str(&format!(
                    "  {} ⇩{}\n    {}\n",
                    model.id.bold(),
                    model.downloads,
                    model.description
                ));
            }
        }
        Payload::All(snapshot) => {
            out.push_str(&format!(
                "{} {}\n\n",
                "Snapshot".bold(),
                snapshot.timestamp.to_rfc3339().dimmed()
            ));
            for row in FeedSummaryRow::from_snapshot(snapshot) {
                out.push_str(&format!(
                    "  {:<12} {:>3} records  {}\n",
                    row.source, row.records, row.origin
                ));
            }
        }
    }
    out
}

fn heading(name: &str, origin: Origin) -> String {
    match origin {
        Origin::Live => format!("{}\n", name.bold().green()),
        Origin::Sample => format!("{} {}\n", name.bold().green(), "(sample data)".yellow()),
    }
}
