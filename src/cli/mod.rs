//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod context;
pub mod feed;
pub mod init;
pub mod nav;
pub mod status;
pub mod watch;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::navigation::DEFAULT_LIMIT;

/// Groktutor - platform feeds and site navigation for prompt engineering learners
#[derive(Parser, Debug)]
#[command(name = "groktutor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "GROKTUTOR_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "GROKTUTOR_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GROKTUTOR_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Serve sample data without calling any platform
    #[arg(long, global = true, env = "GROKTUTOR_SAMPLE", hide_env = true)]
    pub sample: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a configuration file interactively
    Init,

    /// Show configuration and credential status
    Status,

    /// Fetch one source (reddit, twitter, github, huggingface) or all of them
    Feed {
        /// Source name, or `all`
        source: String,

        /// Skip the cache and fetch fresh data
        #[arg(long)]
        refresh: bool,

        /// Records per source (overrides feed_limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Poll sources in the background and print each update
    Watch {
        /// Source to watch; repeat for several (default: all)
        #[arg(long = "source", value_name = "SOURCE")]
        sources: Vec<String>,

        /// Poll every source at this interval, in seconds
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,

        /// Exit after this many updates
        #[arg(long, value_name = "N")]
        max_updates: Option<usize>,
    },

    /// Browse the site map and content graph
    #[command(subcommand)]
    Nav(NavCommands),

    /// Search section titles and content items
    Search {
        query: String,
    },

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   groktutor completion bash > /etc/bash_completion.d/groktutor
  zsh:    groktutor completion zsh > \"${fpath[1]}/_groktutor\"
  fish:   groktutor completion fish > ~/.config/fish/completions/groktutor.fish")]
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum NavCommands {
    /// Show the section at a path with its links
    Section {
        /// Section path, e.g. /skills/reasoning
        path: String,
    },

    /// Show the breadcrumb trail for a path
    Breadcrumbs {
        path: String,
    },

    /// Show parent, siblings, children and related sections of a section id
    Links {
        id: String,
    },

    /// Show content related to a content item, most relevant first
    Related {
        content_id: String,

        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Recommend content, optionally seeded with viewed items
    Recommend {
        /// Content id to record as viewed first; repeatable
        #[arg(long = "viewed", value_name = "CONTENT_ID")]
        viewed: Vec<String>,

        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}
