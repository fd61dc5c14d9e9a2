//! Groktutor data layer
//!
//! Cached platform feeds with sample-data fallback, a background polling
//! notifier, and the section/content graph behind site navigation.

pub mod app;
pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod listeners;
pub mod models;
pub mod navigation;
pub mod notifier;
pub mod output;

pub use app::AppContext;
pub use error::{Error, Result};
