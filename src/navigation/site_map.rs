//! Section hierarchy
//!
//! The map is validated once at construction; lookups afterwards assume a
//! single root, consistent parent links and full reachability.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::error::NavigationError;

/// Id of the root section
pub const ROOT_ID: &str = "home";

/// A navigable section of the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub path: String,

    /// Top-level sections have no parent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub child_ids: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_ids: Vec<String>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: path.into(),
            parent_id: None,
            child_ids: Vec::new(),
            related_ids: Vec::new(),
        }
    }

    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn children(mut self, ids: &[&str]) -> Self {
        self.child_ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn related(mut self, ids: &[&str]) -> Self {
        self.related_ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn is_root(&self) -> bool {
        self.id == ROOT_ID
    }
}

/// Breadcrumb entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRef {
    pub id: String,
    pub title: String,
    pub path: String,
}

impl From<&Section> for SectionRef {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id.clone(),
            title: section.title.clone(),
            path: section.path.clone(),
        }
    }
}

/// Validated section hierarchy, iterated in declaration order
#[derive(Debug, Clone)]
pub struct SiteMap {
    sections: Vec<Section>,
    by_id: HashMap<String, usize>,
    by_path: HashMap<String, usize>,
    root: usize,
}

impl SiteMap {
    /// Index and validate `sections`.
    ///
    /// Rules:
    /// - ids and paths are unique
    /// - `home` exists and has no parent
    /// - a section declaring a parent is listed among that parent's children
    /// - a listed child that declares a parent declares the listing section
    /// - a section without a parent is listed under `home`
    /// - every section is reachable from `home` through child lists
    pub fn new(sections: Vec<Section>) -> Result<Self, NavigationError> {
        let mut by_id = HashMap::with_capacity(sections.len());
        let mut by_path = HashMap::with_capacity(sections.len());
        for (index, section) in sections.iter().enumerate() {
            if by_id.insert(section.id.clone(), index).is_some() {
                return Err(NavigationError::DuplicateId(section.id.clone()));
            }
            if by_path.insert(section.path.clone(), index).is_some() {
                return Err(NavigationError::DuplicatePath(section.path.clone()));
            }
        }

        let root = *by_id
            .get(ROOT_ID)
            .ok_or_else(|| NavigationError::MissingRoot(ROOT_ID.to_string()))?;

        let map = Self {
            sections,
            by_id,
            by_path,
            root,
        };
        map.validate()?;
        Ok(map)
    }

    fn validate(&self) -> Result<(), NavigationError> {
        let root = self.root();
        if root.parent_id.is_some() {
            return Err(NavigationError::RootHasParent(root.id.clone()));
        }

        for section in &self.sections {
            match &section.parent_id {
                Some(parent_id) => {
                    let listed = self
                        .get(parent_id)
                        .is_some_and(|parent| parent.child_ids.contains(&section.id));
                    if !listed {
                        return Err(NavigationError::OrphanedChild(section.id.clone()));
                    }
                }
                None if !section.is_root() && !root.child_ids.contains(&section.id) => {
                    return Err(NavigationError::DetachedSection(section.id.clone()));
                }
                None => {}
            }

            for child in self.resolve(&section.child_ids) {
                if let Some(declared) = &child.parent_id
                    && declared != &section.id
                {
                    return Err(NavigationError::ParentMismatch {
                        child: child.id.clone(),
                        listed_under: section.id.clone(),
                        declared: declared.clone(),
                    });
                }
            }
        }

        let mut seen: HashSet<&str> = HashSet::from([root.id.as_str()]);
        let mut queue: VecDeque<&Section> = VecDeque::from([root]);
        while let Some(section) = queue.pop_front() {
            for child in self.resolve(&section.child_ids) {
                if seen.insert(child.id.as_str()) {
                    queue.push_back(child);
                }
            }
        }
        if let Some(lost) = self.sections.iter().find(|s| !seen.contains(s.id.as_str())) {
            return Err(NavigationError::Unreachable(lost.id.clone()));
        }

        Ok(())
    }

    pub fn root(&self) -> &Section {
        &self.sections[self.root]
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.by_id.get(id).map(|&index| &self.sections[index])
    }

    pub fn by_path(&self, path: &str) -> Option<&Section> {
        self.by_path.get(path).map(|&index| &self.sections[index])
    }

    /// Resolve `ids` in order, skipping any that name no section
    pub fn resolve<'a>(&'a self, ids: &'a [String]) -> impl Iterator<Item = &'a Section> + 'a {
        ids.iter().filter_map(move |id| self.get(id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home(children: &[&str]) -> Section {
        Section::new("home", "Home", "/").children(children)
    }

    #[test]
    fn test_builtin_map_is_valid() {
        let map = SiteMap::new(crate::navigation::data::site_map()).unwrap();
        assert_eq!(map.root().id, "home");
        assert_eq!(map.by_path("/skills/reasoning").unwrap().id, "reasoning");
        assert!(map.get("python").is_none());
    }

    #[test]
    fn test_missing_root() {
        let err = SiteMap::new(vec![Section::new("skills", "Skills", "/skills")]).unwrap_err();
        assert_eq!(err, NavigationError::MissingRoot("home".to_string()));
    }

    #[test]
    fn test_root_with_parent() {
        let err = SiteMap::new(vec![
            home(&["a"]).parent("a"),
            Section::new("a", "A", "/a").children(&["home"]),
        ])
        .unwrap_err();
        assert_eq!(err, NavigationError::RootHasParent("home".to_string()));
    }

    #[test]
    fn test_duplicate_id_and_path() {
        let err = SiteMap::new(vec![
            home(&["a"]),
            Section::new("a", "A", "/a"),
            Section::new("a", "A again", "/a2"),
        ])
        .unwrap_err();
        assert_eq!(err, NavigationError::DuplicateId("a".to_string()));

        let err = SiteMap::new(vec![
            home(&["a", "b"]),
            Section::new("a", "A", "/same"),
            Section::new("b", "B", "/same"),
        ])
        .unwrap_err();
        assert_eq!(err, NavigationError::DuplicatePath("/same".to_string()));
    }

    #[test]
    fn test_parent_not_listing_child() {
        let err = SiteMap::new(vec![
            home(&["a"]),
            Section::new("a", "A", "/a"),
            Section::new("b", "B", "/a/b").parent("a"),
        ])
        .unwrap_err();
        assert_eq!(err, NavigationError::OrphanedChild("b".to_string()));
    }

    #[test]
    fn test_child_declaring_other_parent() {
        let err = SiteMap::new(vec![
            home(&["a", "b"]),
            Section::new("a", "A", "/a").children(&["c"]),
            Section::new("b", "B", "/b").children(&["c"]),
            Section::new("c", "C", "/b/c").parent("b"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            NavigationError::ParentMismatch {
                child: "c".to_string(),
                listed_under: "a".to_string(),
                declared: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_top_level_section_may_be_cross_listed() {
        // A parentless section listed under home may also appear elsewhere
        let map = SiteMap::new(vec![
            home(&["a", "b"]),
            Section::new("a", "A", "/a").children(&["b"]),
            Section::new("b", "B", "/b"),
        ])
        .unwrap();
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_parentless_section_outside_root() {
        let err = SiteMap::new(vec![home(&[]), Section::new("a", "A", "/a")]).unwrap_err();
        assert_eq!(err, NavigationError::DetachedSection("a".to_string()));
    }

    #[test]
    fn test_unreachable_cycle() {
        let err = SiteMap::new(vec![
            home(&[]),
            Section::new("x", "X", "/x").parent("y").children(&["y"]),
            Section::new("y", "Y", "/y").parent("x").children(&["x"]),
        ])
        .unwrap_err();
        assert_eq!(err, NavigationError::Unreachable("x".to_string()));
    }

    #[test]
    fn test_resolve_skips_unknown_ids() {
        let map = SiteMap::new(vec![
            home(&["a", "missing", "b"]),
            Section::new("a", "A", "/a"),
            Section::new("b", "B", "/b"),
        ])
        .unwrap();
        let ids: Vec<&str> = map
            .resolve(&map.root().child_ids)
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
