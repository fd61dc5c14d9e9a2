//! Section and content rows

use tabled::Tabled;

use crate::navigation::{ContentItem, Recommendation, RelatedContent, Section, SectionRef};

#[derive(Debug, Clone, Tabled)]
pub struct SectionRow {
    #[tabled(rename = "ROLE")]
    pub role: String,
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "TITLE")]
    pub title: String,
    #[tabled(rename = "PATH")]
    pub path: String,
}

impl SectionRow {
    /// `role` names how the section relates to the one being shown
    pub fn new(role: &str, section: &Section) -> Self {
        Self {
            role: role.to_string(),
            id: section.id.clone(),
            title: section.title.clone(),
            path: section.path.clone(),
        }
    }

    /// Breadcrumb rows numbered from the root
    pub fn trail(crumbs: &[SectionRef]) -> Vec<Self> {
        crumbs
            .iter()
            .enumerate()
            .map(|(depth, crumb)| Self {
                role: depth.to_string(),
                id: crumb.id.clone(),
                title: crumb.title.clone(),
                path: crumb.path.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct ContentRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "TYPE")]
    pub content_type: String,
    #[tabled(rename = "CATEGORY")]
    pub category: String,
    /// Relevance for related items, popularity for recommendations
    #[tabled(rename = "SCORE")]
    pub score: String,
}

impl ContentRow {
    fn new(item: &ContentItem, score: String) -> Self {
        Self {
            id: item.id.clone(),
            content_type: item.content_type.to_string(),
            category: item.category.clone(),
            score,
        }
    }

    pub fn plain(item: &ContentItem) -> Self {
        Self::new(item, "--".to_string())
    }

    pub fn related(entry: &RelatedContent) -> Self {
        Self::new(&entry.item, format!("{:.2}", entry.relevance_score))
    }

    pub fn recommended(entry: &Recommendation) -> Self {
        let score = entry
            .popularity
            .map(|p| p.to_string())
            .unwrap_or_else(|| "--".to_string());
        Self::new(&entry.item, score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ContentType;

    #[test]
    fn test_breadcrumb_trail_is_numbered_from_root() {
        let crumbs = vec![
            SectionRef {
                id: "home".to_string(),
                title: "Home".to_string(),
                path: "/".to_string(),
            },
            SectionRef {
                id: "skills".to_string(),
                title: "Prompt Engineering Skills".to_string(),
                path: "/skills".to_string(),
            },
        ];

        let rows = SectionRow::trail(&crumbs);
        assert_eq!(rows[0].role, "0");
        assert_eq!(rows[1].role, "1");
        assert_eq!(rows[1].path, "/skills");
    }

    #[test]
    fn test_content_scores() {
        let item = ContentItem::new("tot-implementation-code", ContentType::Code, "tree-of-thought");

        let related = ContentRow::related(&RelatedContent {
            relevance_score: 0.85,
            item: item.clone(),
        });
        assert_eq!(related.score, "0.85");
        assert_eq!(related.content_type, "code");

        let recommended = ContentRow::recommended(&Recommendation {
            item,
            popularity: None,
        });
        assert_eq!(recommended.score, "--");
    }
}
