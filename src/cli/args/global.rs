//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global flags, captured once after parsing.
///
/// Precedence is CLI flag > environment variable > config file > default.
/// This struct holds the first two layers; the config file is merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.groktutor/config.yaml)
    pub config: Option<String>,

    /// Serve sample data regardless of configured credentials
    pub sample: bool,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            sample: cli.sample,
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
