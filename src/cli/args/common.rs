//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-oriented text
    #[default]
    Pretty,
    /// One row per record
    Table,
    /// Data wrapped in an envelope with metadata
    Json,
}
