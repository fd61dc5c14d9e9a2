//! Watch command implementation
//!
//! Subscribes to the notifier, starts background polling and prints every
//! refreshed payload until Ctrl-C or the update budget runs out.

use std::future::Future;
use std::sync::Arc;

use chrono::Local;
use colored::Colorize;
use tokio::sync::mpsc;

use crate::cli::feed::print_payload;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::{Payload, Source};
use crate::error::Result;
use crate::listeners::Subscription;

type Update = (Source, Arc<Payload>);

/// Run the watch command
pub async fn run(
    opts: &GlobalOptions,
    sources: &[String],
    interval: Option<u64>,
    max_updates: Option<usize>,
) -> Result<()> {
    let selected = parse_sources(sources)?;
    let ctx = CommandContext::with_config(opts, None, |config| {
        if let Some(secs) = interval {
            config.poll.reddit_secs = secs;
            config.poll.twitter_secs = secs;
            config.poll.github_secs = secs;
            config.poll.huggingface_secs = secs;
        }
    })?;
    let notifier = ctx.app.notifier();
    let format = ctx.format;

    let (tx, mut rx) = mpsc::unbounded_channel::<Update>();
    let subscriptions: Vec<Subscription> = selected
        .iter()
        .map(|&source| {
            let tx = tx.clone();
            notifier.subscribe(source, move |payload| {
                tx.send((source, Arc::clone(payload)))
                    .map_err(|_| anyhow::anyhow!("watch output closed"))
            })
        })
        .collect();
    drop(tx);

    if format == OutputFormat::Pretty {
        let names: Vec<&str> = selected.iter().map(Source::as_str).collect();
        eprintln!("Watching {} (Ctrl-C to stop)", names.join(", ").cyan());
    }

    notifier.start()?;
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Could not listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };
    let received = forward_updates(&mut rx, max_updates, shutdown, |(source, payload)| {
        if format == OutputFormat::Pretty {
            println!(
                "{} {} update",
                Local::now().format("%H:%M:%S").to_string().dimmed(),
                source.as_str().bold()
            );
        }
        print_payload(&payload, format)
    })
    .await;

    notifier.stop();
    for subscription in &subscriptions {
        subscription.unsubscribe();
    }
    log::debug!("Watch finished after {} updates", received.as_ref().unwrap_or(&0));
    received.map(|_| ())
}

/// Parse `--source` values; none means every source
fn parse_sources(names: &[String]) -> Result<Vec<Source>> {
    if names.is_empty() {
        return Ok(Source::ALL.to_vec());
    }
    let mut sources = Vec::with_capacity(names.len());
    for name in names {
        let source: Source = name.parse()?;
        if !sources.contains(&source) {
            sources.push(source);
        }
    }
    Ok(sources)
}

/// Hand updates to `on_update` until the channel closes, `max` updates have
/// been handled, or `shutdown` completes. Returns the number handled.
async fn forward_updates<S, F>(
    rx: &mut mpsc::UnboundedReceiver<Update>,
    max: Option<usize>,
    shutdown: S,
    mut on_update: F,
) -> Result<usize>
where
    S: Future<Output = ()>,
    F: FnMut(Update) -> Result<()>,
{
    tokio::pin!(shutdown);
    let mut handled = 0;
    loop {
        if max.is_some_and(|max| handled >= max) {
            break;
        }
        tokio::select! {
            update = rx.recv() => match update {
                Some(update) => {
                    on_update(update)?;
                    handled += 1;
                }
                None => break,
            },
            _ = &mut shutdown => break,
        }
    }
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{Feed, samples};
    use crate::error::Error;

    fn update(source: Source) -> Update {
        let payload = Payload::Reddit(Feed::sample(samples::reddit_posts(chrono::Utc::now(), 1)));
        (source, Arc::new(payload))
    }

    #[test]
    fn test_parse_sources() {
        assert_eq!(parse_sources(&[]).unwrap(), Source::ALL.to_vec());

        let names = vec!["github".to_string(), "reddit".to_string(), "github".to_string()];
        assert_eq!(
            parse_sources(&names).unwrap(),
            vec![Source::Github, Source::Reddit]
        );

        let err = parse_sources(&["all".to_string()]).unwrap_err();
        assert!(matches!(err, Error::UnknownSource(name) if name == "all"));
    }

    #[tokio::test]
    async fn test_forward_stops_at_max() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        for _ in 0..3 {
            tx.send(update(Source::Reddit)).unwrap();
        }

        let mut seen = Vec::new();
        let handled = forward_updates(
            &mut rx,
            Some(2),
            std::future::pending::<()>(),
            |(source, _)| {
                seen.push(source);
                Ok(())
            },
        )
        .await
        .unwrap();

        assert_eq!(handled, 2);
        assert_eq!(seen.len(), 2);
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_forward_ends_when_channel_closes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(update(Source::Github)).unwrap();
        drop(tx);

        let handled = forward_updates(&mut rx, None, std::future::pending::<()>(), |_| Ok(()))
            .await
            .unwrap();
        assert_eq!(handled, 1);
    }

    #[tokio::test]
    async fn test_forward_ends_on_shutdown() {
        let (_tx, mut rx) = mpsc::unbounded_channel::<Update>();
        let handled = forward_updates(&mut rx, None, async {}, |_| Ok(()))
            .await
            .unwrap();
        assert_eq!(handled, 0);
    }

    #[tokio::test]
    async fn test_forward_propagates_output_errors() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(update(Source::Twitter)).unwrap();

        let result = forward_updates(&mut rx, None, std::future::pending::<()>(), |_| {
            Err(Error::Other("stdout closed".to_string()))
        })
        .await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_pipeline_with_notifier() {
        use crate::app::AppContext;
        use crate::config::Config;

        let mut config = Config {
            sample_mode: true,
            ..Config::default()
        };
        config.poll.reddit_secs = 10;
        let app = AppContext::new(config).unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel::<Update>();
        let _sub = app.notifier().subscribe(Source::Reddit, move |payload| {
            tx.send((Source::Reddit, Arc::clone(payload)))
                .map_err(|_| anyhow::anyhow!("closed"))
        });
        app.notifier().start().unwrap();

        let handled = forward_updates(
            &mut rx,
            Some(2),
            std::future::pending::<()>(),
            |(source, payload)| {
                assert_eq!(source, Source::Reddit);
                assert!(payload.uses_sample_data());
                Ok(())
            },
        )
        .await
        .unwrap();

        assert_eq!(handled, 2);
        app.notifier().stop();
    }
}
