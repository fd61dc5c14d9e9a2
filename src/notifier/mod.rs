//! Polling notifier
//!
//! Refreshes each source on its own interval and pushes the new payload to
//! the listeners subscribed to that source.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, info};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::cache::CachedFeedClient;
use crate::client::{FeedApi, Payload, Source};
use crate::config::{MAX_POLL_SECS, PollConfig};
use crate::error::{ConfigError, Error, Result};
use crate::listeners::{ListenerRegistry, Subscription};

/// Refresh period per source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub reddit: Duration,
    pub twitter: Duration,
    pub github: Duration,
    pub huggingface: Duration,
}

impl PollIntervals {
    pub fn for_source(&self, source: Source) -> Duration {
        match source {
            Source::Reddit => self.reddit,
            Source::Twitter => self.twitter,
            Source::Github => self.github,
            Source::Huggingface => self.huggingface,
        }
    }

    /// Every period must be non-zero and at most [`MAX_POLL_SECS`]
    pub fn validate(&self) -> Result<()> {
        let max = Duration::from_secs(MAX_POLL_SECS);
        for source in Source::ALL {
            let period = self.for_source(source);
            if period.is_zero() || period > max {
                return Err(ConfigError::Invalid(format!(
                    "poll interval for {} must be between 1 and {} seconds, got {:?}",
                    source, MAX_POLL_SECS, period
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Same period for every source
    pub fn uniform(period: Duration) -> Self {
        Self {
            reddit: period,
            twitter: period,
            github: period,
            huggingface: period,
        }
    }
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self::from(&PollConfig::default())
    }
}

impl From<&PollConfig> for PollIntervals {
    fn from(config: &PollConfig) -> Self {
        Self {
            reddit: Duration::from_secs(config.reddit_secs),
            twitter: Duration::from_secs(config.twitter_secs),
            github: Duration::from_secs(config.github_secs),
            huggingface: Duration::from_secs(config.huggingface_secs),
        }
    }
}

struct Running {
    shutdown: watch::Sender<bool>,
    // Detached on stop so an in-flight fetch can finish.
    _tasks: Vec<JoinHandle<()>>,
}

/// Background refresher for every source.
pub struct PollingNotifier<C: FeedApi + 'static> {
    service: Arc<CachedFeedClient<C>>,
    intervals: PollIntervals,
    listeners: ListenerRegistry<Source, Arc<Payload>>,
    state: Mutex<Option<Running>>,
}

impl<C: FeedApi + 'static> PollingNotifier<C> {
    pub fn new(service: Arc<CachedFeedClient<C>>, intervals: PollIntervals) -> Self {
        Self {
            service,
            intervals,
            listeners: ListenerRegistry::new(),
            state: Mutex::new(None),
        }
    }

    pub fn intervals(&self) -> PollIntervals {
        self.intervals
    }

    /// Spawn one polling task per source on the current tokio runtime.
    ///
    /// The first refresh happens one full interval after start. Returns
    /// false if the notifier was already running, and an error without
    /// spawning anything if an interval is out of range.
    pub fn start(&self) -> Result<bool> {
        let mut state = self.state();
        if state.is_some() {
            return Ok(false);
        }
        self.intervals.validate()?;

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| Error::Other(format!("Polling needs a tokio runtime: {}", e)))?;

        let (shutdown, shutdown_rx) = watch::channel(false);
        let tasks = Source::ALL
            .into_iter()
            .map(|source| {
                runtime.spawn(poll_source(
                    self.service.clone(),
                    self.listeners.clone(),
                    source,
                    self.intervals.for_source(source),
                    shutdown_rx.clone(),
                ))
            })
            .collect();

        info!("Polling notifier started");
        *state = Some(Running {
            shutdown,
            _tasks: tasks,
        });
        Ok(true)
    }

    /// Cancel every future tick. A fetch already under way completes and
    /// its listeners still run. Returns false if nothing was running.
    pub fn stop(&self) -> bool {
        match self.state().take() {
            Some(running) => {
                let _ = running.shutdown.send(true);
                info!("Polling notifier stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state().is_some()
    }

    /// Register `callback` for payloads of `source`
    pub fn subscribe<F>(&self, source: Source, callback: F) -> Subscription
    where
        F: Fn(&Arc<Payload>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.listeners.subscribe(source, callback)
    }

    /// Push `payload` to the listeners of `source` immediately
    pub fn notify(&self, source: Source, payload: &Arc<Payload>) -> usize {
        self.listeners.emit(&source, payload)
    }

    pub fn listener_count(&self, source: Source) -> usize {
        self.listeners.listener_count(&source)
    }

    fn state(&self) -> MutexGuard<'_, Option<Running>> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<C: FeedApi + 'static> Drop for PollingNotifier<C> {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn poll_source<C: FeedApi + 'static>(
    service: Arc<CachedFeedClient<C>>,
    listeners: ListenerRegistry<Source, Arc<Payload>>,
    source: Source,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let now = Instant::now();
    let first = now.checked_add(period).unwrap_or(now);
    let mut ticker = interval_at(first, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    debug!("Polling for {} stopped", source);
                    break;
                }
            }

            _ = ticker.tick() => {
                debug!("Polling {}", source);
                let payload = service.get_key(source.into(), true).await;
                let delivered = listeners.emit(&source, &payload);
                debug!("Delivered {} update to {} listener(s)", source, delivered);
            }
        }
    }
}
