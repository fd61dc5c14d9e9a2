//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::Source;
use crate::config::Config;
use crate::error::Result;
use crate::notifier::PollIntervals;
use crate::output::{json, table};

#[derive(Debug, Serialize)]
struct StatusReport {
    config_path: String,
    config_found: bool,
    sample_mode: bool,
    feed_limit: usize,
    cache_duration_secs: u64,
    sources: Vec<SourceStatus>,
}

#[derive(Debug, Serialize)]
struct SourceStatus {
    source: Source,
    credentials: bool,
    poll_secs: u64,
}

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let config_found = path.exists();
    let mut config = Config::load_or_default(opts.config_ref())?;
    if opts.sample {
        config.sample_mode = true;
    }

    let report = build_report(&config, path.display().to_string(), config_found);
    match opts.format {
        OutputFormat::Json => println!("{}", json::format_json(&report)?),
        OutputFormat::Table => print_table(&report),
        OutputFormat::Pretty => print_pretty(&report),
    }
    Ok(())
}

fn build_report(config: &Config, config_path: String, config_found: bool) -> StatusReport {
    let intervals = PollIntervals::from(&config.poll);
    let sources = Source::ALL
        .into_iter()
        .map(|source| SourceStatus {
            source,
            credentials: has_credentials(config, source),
            poll_secs: intervals.for_source(source).as_secs(),
        })
        .collect();

    StatusReport {
        config_path,
        config_found,
        sample_mode: config.sample_mode,
        feed_limit: config.feed_limit,
        cache_duration_secs: config.cache_duration_secs,
        sources,
    }
}

fn has_credentials(config: &Config, source: Source) -> bool {
    match source {
        Source::Reddit => {
            config.reddit.client_id.is_some() && config.reddit.client_secret.is_some()
        }
        Source::Twitter => config.twitter.bearer_token.is_some(),
        Source::Github => config.github.token.is_some(),
        Source::Huggingface => config.huggingface.token.is_some(),
    }
}

fn print_table(report: &StatusReport) {
    let mut fields = vec![
        ("config", report.config_path.clone()),
        ("sample_mode", report.sample_mode.to_string()),
        ("feed_limit", report.feed_limit.to_string()),
        ("cache_ttl", format!("{}s", report.cache_duration_secs)),
    ];
    for status in &report.sources {
        fields.push((
            status.source.as_str(),
            format!(
                "credentials={} poll={}s",
                status.credentials, status.poll_secs
            ),
        ));
    }
    println!("{}", table::format_record(&fields));
}

fn print_pretty(report: &StatusReport) {
    println!("{}\n", "Groktutor Configuration Status".bold());

    if report.config_found {
        println!("Config file: {}", report.config_path.cyan());
    } else {
        println!(
            "{} No config file at {} (using defaults)",
            "○".dimmed(),
            report.config_path
        );
        println!("  → Run {} to create one", "groktutor init".cyan());
    }
    println!();

    if report.sample_mode {
        println!("{} Sample mode: every source serves sample data", "⚠".yellow());
    }
    println!("Feed limit: {} records per source", report.feed_limit);
    println!("Cache TTL:  {}s", report.cache_duration_secs);
    println!();

    for status in &report.sources {
        let mark = if status.credentials && !report.sample_mode {
            "✓".green()
        } else {
            "✗".red()
        };
        let note = match (status.credentials, report.sample_mode) {
            (_, true) => "sample data".dimmed(),
            (true, false) => "live".normal(),
            (false, false) => "no credentials, sample data".dimmed(),
        };
        println!(
            "{} {:<12} {}  (polled every {}s)",
            mark,
            status.source.as_str(),
            note,
            status.poll_secs
        );
    }
    println!();
}
