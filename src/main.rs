//! Groktutor CLI - platform feeds and site navigation

use clap::{CommandFactory, Parser};

use groktutor::cli::{self, Cli, Commands, GlobalOptions};
use groktutor::error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Feed {
            source,
            refresh,
            limit,
        } => cli::feed::run(&opts, &source, refresh, limit).await,
        Commands::Watch {
            sources,
            interval,
            max_updates,
        } => cli::watch::run(&opts, &sources, interval, max_updates).await,
        Commands::Nav(command) => cli::nav::run(&opts, command),
        Commands::Search { query } => cli::nav::search(&opts, &query),
        Commands::Completion { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

/// `--debug` forces debug output; otherwise `RUST_LOG` applies, defaulting to
/// warnings only
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp_millis().init();
}
