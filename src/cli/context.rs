//! Command execution context
//!
//! Loads configuration once, applies global overrides, and builds the shared
//! services every command runs against.

use crate::app::AppContext;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::{ConfigError, Result};

pub struct CommandContext {
    pub app: AppContext,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build the context for a command.
    ///
    /// A missing config file is not an error; defaults apply and every
    /// source falls back to sample data. `limit` overrides `feed_limit`.
    pub fn new(opts: &GlobalOptions, limit: Option<usize>) -> Result<Self> {
        Self::with_config(opts, limit, |_| {})
    }

    /// Like [`CommandContext::new`], letting the command adjust the loaded
    /// configuration before the services are built
    pub fn with_config<F>(opts: &GlobalOptions, limit: Option<usize>, adjust: F) -> Result<Self>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = Self::load_config(opts, limit)?;
        adjust(&mut config);
        Ok(Self {
            app: AppContext::new(config)?,
            format: opts.format,
        })
    }

    fn load_config(opts: &GlobalOptions, limit: Option<usize>) -> Result<Config> {
        let mut config = Config::load_or_default(opts.config_ref())?;
        if opts.sample {
            config.sample_mode = true;
        }
        if let Some(limit) = limit {
            if limit == 0 {
                return Err(ConfigError::Invalid("--limit must be at least 1".to_string()).into());
            }
            config.feed_limit = limit;
        }
        Ok(config)
    }
}
