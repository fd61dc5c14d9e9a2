//! Content graph and navigation service
//!
//! Answers structural queries over the site map (breadcrumbs, children,
//! siblings, related sections), relevance queries over the content catalog,
//! and history-based recommendations. Navigation and content views are
//! broadcast to listeners.

pub mod content;
pub mod data;
pub mod history;
pub mod site_map;

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use log::debug;
use serde::Serialize;

pub use content::{ContentCatalog, ContentItem, ContentType, RelatedRef};
pub use history::{ViewHistory, ViewHistoryEntry};
pub use site_map::{ROOT_ID, Section, SectionRef, SiteMap};

use crate::error::NavigationError;
use crate::listeners::{ListenerRegistry, Subscription};
use history::{HISTORY_CAPACITY, RECENT_WINDOW, TOP_CATEGORIES};

/// Default result count for related content and recommendations
pub const DEFAULT_LIMIT: usize = 5;

/// Links around one section
#[derive(Debug, Clone, Default, Serialize)]
pub struct NavigationLinks<'a> {
    pub parent: Option<&'a Section>,
    pub siblings: Vec<&'a Section>,
    pub children: Vec<&'a Section>,
    pub related: Vec<&'a Section>,
}

/// A related item together with the relevance of the link to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedContent {
    pub relevance_score: f64,
    #[serde(flatten)]
    pub item: ContentItem,
}

/// A suggested item; popular picks carry their popularity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub item: ContentItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults<'a> {
    pub sections: Vec<&'a Section>,
    pub content: Vec<&'a ContentItem>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.content.is_empty()
    }
}

/// Event categories listeners can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationEventKind {
    PathChanged,
    ContentViewed,
}

impl fmt::Display for NavigationEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationEventKind::PathChanged => f.write_str("path-changed"),
            NavigationEventKind::ContentViewed => f.write_str("content-viewed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NavigationEvent {
    PathChanged {
        path: String,
    },
    ContentViewed {
        content_id: String,
        content_type: ContentType,
        category: String,
    },
}

impl NavigationEvent {
    pub fn kind(&self) -> NavigationEventKind {
        match self {
            NavigationEvent::PathChanged { .. } => NavigationEventKind::PathChanged,
            NavigationEvent::ContentViewed { .. } => NavigationEventKind::ContentViewed,
        }
    }
}

#[derive(Debug)]
struct Session {
    current_path: String,
    path_history: VecDeque<String>,
    views: ViewHistory,
}

/// Query service over the site map and content catalog
pub struct NavigationService {
    site_map: SiteMap,
    catalog: ContentCatalog,
    session: Mutex<Session>,
    listeners: ListenerRegistry<NavigationEventKind, NavigationEvent>,
}

impl NavigationService {
    pub fn new(site_map: SiteMap, catalog: ContentCatalog) -> Self {
        let root = site_map.root().path.clone();
        Self {
            site_map,
            catalog,
            session: Mutex::new(Session {
                current_path: root.clone(),
                path_history: VecDeque::from([root]),
                views: ViewHistory::default(),
            }),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Service over the built-in site map and catalog
    pub fn builtin() -> Result<Self, NavigationError> {
        let site_map = SiteMap::new(data::site_map())?;
        let catalog = ContentCatalog::new(data::content(), data::popular())?;
        Ok(Self::new(site_map, catalog))
    }

    pub fn site_map(&self) -> &SiteMap {
        &self.site_map
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn section_by_path(&self, path: &str) -> Option<&Section> {
        self.site_map.by_path(path)
    }

    pub fn section_by_id(&self, id: &str) -> Option<&Section> {
        self.site_map.get(id)
    }

    /// Trail from the root to the section at `path`.
    ///
    /// Ancestors stop at the grandparent, so deeper sections skip the
    /// levels in between. An unknown path yields the root alone.
    pub fn breadcrumbs(&self, path: &str) -> Vec<SectionRef> {
        let root = self.site_map.root();
        let mut trail = vec![SectionRef::from(root)];
        let Some(section) = self.section_by_path(path) else {
            return trail;
        };

        if let Some(parent) = self.parent_of(section) {
            if let Some(grandparent) = self.parent_of(parent)
                && !grandparent.is_root()
            {
                trail.push(grandparent.into());
            }
            if !parent.is_root() {
                trail.push(parent.into());
            }
        }

        if !section.is_root() {
            trail.push(section.into());
        }
        trail
    }

    pub fn children(&self, id: &str) -> Vec<&Section> {
        self.section_by_id(id)
            .map(|s| self.site_map.resolve(&s.child_ids).collect())
            .unwrap_or_default()
    }

    pub fn related(&self, id: &str) -> Vec<&Section> {
        self.section_by_id(id)
            .map(|s| self.site_map.resolve(&s.related_ids).collect())
            .unwrap_or_default()
    }

    /// Parent, siblings, children and related sections of `id`.
    ///
    /// Siblings of a top-level section are the other sections under the
    /// root; the root itself has none.
    pub fn navigation_links(&self, id: &str) -> NavigationLinks<'_> {
        let Some(section) = self.section_by_id(id) else {
            return NavigationLinks::default();
        };

        let parent = self.parent_of(section);
        let siblings = match parent {
            Some(parent) => self.others(&parent.child_ids, id),
            None if !section.is_root() => self.others(&self.site_map.root().child_ids, id),
            None => Vec::new(),
        };

        NavigationLinks {
            parent,
            siblings,
            children: self.site_map.resolve(&section.child_ids).collect(),
            related: self.site_map.resolve(&section.related_ids).collect(),
        }
    }

    /// Items linked from `content_id`, most relevant first.
    ///
    /// Links are ranked and cut to `limit` before unresolvable targets are
    /// dropped, so fewer than `limit` entries may come back.
    pub fn related_content(&self, content_id: &str, limit: usize) -> Vec<RelatedContent> {
        let Some(item) = self.catalog.get(content_id) else {
            return Vec::new();
        };

        let mut links: Vec<&RelatedRef> = item.related_content.iter().collect();
        links.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        links
            .into_iter()
            .take(limit)
            .filter_map(|link| {
                self.catalog.get(&link.id).map(|target| RelatedContent {
                    relevance_score: link.relevance_score,
                    item: target.clone(),
                })
            })
            .collect()
    }

    /// Append a view to the history and notify content-view listeners
    pub fn record_view(&self, content_id: &str, content_type: ContentType, category: &str) {
        self.session().views.push(ViewHistoryEntry {
            content_id: content_id.to_string(),
            content_type,
            category: category.to_string(),
            timestamp: Utc::now(),
        });

        self.emit(NavigationEvent::ContentViewed {
            content_id: content_id.to_string(),
            content_type,
            category: category.to_string(),
        });
    }

    /// Suggestions drawn from the categories viewed most in the recent
    /// window, excluding recently viewed items. Falls back to the popular
    /// list when there is no history or nothing qualifies.
    pub fn recommendations(&self, limit: usize) -> Vec<Recommendation> {
        let (categories, recent_ids) = {
            let session = self.session();
            if session.views.is_empty() {
                drop(session);
                return self.popular_content(limit);
            }
            let categories = session.views.top_categories(RECENT_WINDOW, TOP_CATEGORIES);
            let recent_ids: Vec<String> = session
                .views
                .recent(RECENT_WINDOW)
                .map(|e| e.content_id.clone())
                .collect();
            (categories, recent_ids)
        };

        let picks: Vec<Recommendation> = self
            .catalog
            .iter()
            .filter(|item| categories.contains(&item.category))
            .filter(|item| !recent_ids.contains(&item.id))
            .take(limit)
            .map(|item| Recommendation {
                item: item.clone(),
                popularity: None,
            })
            .collect();

        if picks.is_empty() {
            debug!("No category matches, recommending popular content");
            self.popular_content(limit)
        } else {
            picks
        }
    }

    /// The ranked popular list, cut to `limit`
    pub fn popular_content(&self, limit: usize) -> Vec<Recommendation> {
        self.catalog
            .popular()
            .take(limit)
            .map(|(item, popularity)| Recommendation {
                item: item.clone(),
                popularity: Some(popularity),
            })
            .collect()
    }

    /// Case-insensitive substring search over section titles and ids and
    /// over content ids, categories and types. A blank query matches nothing.
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults::default();
        }
        let matches = |text: &str| text.to_lowercase().contains(&needle);

        SearchResults {
            sections: self
                .site_map
                .iter()
                .filter(|s| matches(&s.title) || matches(&s.id))
                .collect(),
            content: self
                .catalog
                .iter()
                .filter(|c| {
                    matches(&c.id) || matches(&c.category) || matches(c.content_type.as_str())
                })
                .collect(),
        }
    }

    /// Move to `path`, record it and notify path listeners. Returns the
    /// section at that path, if any.
    pub fn navigate_to(&self, path: &str) -> Option<&Section> {
        {
            let mut session = self.session();
            session.current_path = path.to_string();
            if session.path_history.len() >= HISTORY_CAPACITY {
                session.path_history.pop_front();
            }
            session.path_history.push_back(path.to_string());
        }
        debug!("Page view: {}", path);
        self.emit(NavigationEvent::PathChanged {
            path: path.to_string(),
        });
        self.section_by_path(path)
    }

    pub fn current_path(&self) -> String {
        self.session().current_path.clone()
    }

    /// Visited paths, oldest first. Keeps the last `HISTORY_CAPACITY`,
    /// starting with the root until it is pushed out.
    pub fn path_history(&self) -> Vec<String> {
        self.session().path_history.iter().cloned().collect()
    }

    pub fn view_history(&self) -> Vec<ViewHistoryEntry> {
        self.session().views.iter().cloned().collect()
    }

    /// Register `callback` for events of `kind`
    pub fn add_listener<F>(&self, kind: NavigationEventKind, callback: F) -> Subscription
    where
        F: Fn(&NavigationEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.listeners.subscribe(kind, callback)
    }

    fn emit(&self, event: NavigationEvent) {
        self.listeners.emit(&event.kind(), &event);
    }

    fn parent_of(&self, section: &Section) -> Option<&Section> {
        section
            .parent_id
            .as_deref()
            .and_then(|id| self.site_map.get(id))
    }

    fn others<'a>(&'a self, ids: &'a [String], exclude: &str) -> Vec<&'a Section> {
        self.site_map
            .resolve(ids)
            .filter(|s| s.id != exclude)
            .collect()
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        match self.session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
