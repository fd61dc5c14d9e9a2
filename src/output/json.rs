//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Envelope wrapping every JSON response
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Time the output was produced (RFC 3339)
    pub timestamp: String,

    pub version: String,

    /// Set for feed output: whether any records are fallback samples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<bool>,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                sample_data: None,
            },
        }
    }

    pub fn with_sample_flag(mut self, sample_data: bool) -> Self {
        self.meta.sample_data = Some(sample_data);
        self
    }
}

impl<T: Serialize> JsonOutput<T> {
    pub fn to_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Format data as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    JsonOutput::new(data).to_pretty()
}
