//! HuggingFace model card

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A model matching the configured search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuggingfaceModel {
    /// Full model id (`author/name`)
    pub id: String,

    /// Model name (last path segment of the id)
    pub model: String,

    /// Owning user or organization
    pub author: String,

    /// Download count
    pub downloads: u64,

    pub description: String,

    /// Last modification time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// Model page
    pub url: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawModel {
    pub id: String,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<RawModel> for HuggingfaceModel {
    fn from(raw: RawModel) -> Self {
        let model = raw.id.rsplit('/').next().unwrap_or(&raw.id).to_string();
        let author = raw.id.split('/').next().unwrap_or(&raw.id).to_string();
        Self {
            url: format!("https://huggingface.co/{}", raw.id),
            model,
            author,
            downloads: raw.downloads.unwrap_or(0),
            description: raw
                .description
                .unwrap_or_else(|| "No description available".to_string()),
            updated: raw.last_modified,
            tags: raw.tags,
            id: raw.id,
        }
    }
}
