//! Content catalog and relevance links between items

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

/// Kind of content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Tutorial,
    Comparison,
    Research,
    Code,
    Template,
    Reddit,
    Twitter,
    Github,
    Huggingface,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Tutorial => "tutorial",
            ContentType::Comparison => "comparison",
            ContentType::Research => "research",
            ContentType::Code => "code",
            ContentType::Template => "template",
            ContentType::Reddit => "reddit",
            ContentType::Twitter => "twitter",
            ContentType::Github => "github",
            ContentType::Huggingface => "huggingface",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted link to another item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedRef {
    pub id: String,
    pub relevance_score: f64,
}

/// A piece of learning content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItem {
    pub id: String,

    #[serde(rename = "type")]
    pub content_type: ContentType,

    /// Section id the item belongs to
    pub category: String,

    pub related_content: Vec<RelatedRef>,
}

impl ContentItem {
    pub fn new(
        id: impl Into<String>,
        content_type: ContentType,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content_type,
            category: category.into(),
            related_content: Vec::new(),
        }
    }

    pub fn related(mut self, id: impl Into<String>, relevance_score: f64) -> Self {
        self.related_content.push(RelatedRef {
            id: id.into(),
            relevance_score,
        });
        self
    }
}

/// Catalog of every content item, in declaration order, plus the ranked
/// popular list
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    items: Vec<ContentItem>,
    by_id: HashMap<String, usize>,
    popular: Vec<(String, u32)>,
}

impl ContentCatalog {
    /// Index `items`. Ids must be unique and every relevance score must lie
    /// in `[0, 1]`. Popular entries naming unknown items are ignored.
    pub fn new(
        items: Vec<ContentItem>,
        popular: Vec<(String, u32)>,
    ) -> Result<Self, NavigationError> {
        let mut by_id = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if by_id.insert(item.id.clone(), index).is_some() {
                return Err(NavigationError::DuplicateContent(item.id.clone()));
            }
            if let Some(bad) = item
                .related_content
                .iter()
                .find(|r| !(0.0..=1.0).contains(&r.relevance_score))
            {
                return Err(NavigationError::InvalidRelevance {
                    id: bad.id.clone(),
                    score: bad.relevance_score,
                });
            }
        }

        Ok(Self {
            items,
            by_id,
            popular,
        })
    }

    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.by_id.get(id).map(|&index| &self.items[index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }

    /// Popular items with their popularity, in ranked order
    pub fn popular(&self) -> impl Iterator<Item = (&ContentItem, u32)> + '_ {
        self.popular
            .iter()
            .filter_map(|(id, popularity)| self.get(id).map(|item| (item, *popularity)))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
