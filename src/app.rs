//! Application composition root
//!
//! Owns exactly one cache service, one notifier and one navigation service so
//! every consumer in a process shares the same cache and listener registries.

use std::sync::Arc;

use crate::cache::CachedFeedClient;
use crate::client::LiveFeedClient;
use crate::config::Config;
use crate::error::Result;
use crate::navigation::NavigationService;
use crate::notifier::{PollIntervals, PollingNotifier};

/// Cache service backed by the live platform client
pub type FeedService = CachedFeedClient<LiveFeedClient>;

pub struct AppContext {
    config: Config,
    feeds: Arc<FeedService>,
    notifier: PollingNotifier<LiveFeedClient>,
    navigation: NavigationService,
}

impl AppContext {
    /// Wire the services from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = Arc::new(LiveFeedClient::new(&config)?);
        let feeds = Arc::new(CachedFeedClient::new(
            client,
            config.feed_limit,
            config.cache_duration(),
        ));
        let notifier = PollingNotifier::new(Arc::clone(&feeds), PollIntervals::from(&config.poll));
        let navigation = NavigationService::builtin()?;

        log::debug!(
            "Services ready (sample_mode={}, feed_limit={}, ttl={}s)",
            config.sample_mode,
            config.feed_limit,
            config.cache_duration_secs
        );

        Ok(Self {
            config,
            feeds,
            notifier,
            navigation,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn feeds(&self) -> &Arc<FeedService> {
        &self.feeds
    }

    pub fn notifier(&self) -> &PollingNotifier<LiveFeedClient> {
        &self.notifier
    }

    pub fn navigation(&self) -> &NavigationService {
        &self.navigation
    }
}
