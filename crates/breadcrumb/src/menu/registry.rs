//! Menu link set - indexes menu links and computes active trails.
//!
//! Sources hand in JSON arrays of MenuLink objects. A source that fails to
//! parse is logged and skipped so the remaining menus stay usable.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::link::MenuLink;
use crate::route::RouteContext;
use crate::trail::{ActiveTrailSource, NodeId, NodeResolver, TrailEntry};

/// Read-only set of menu links across all menus.
#[derive(Debug, Clone)]
pub struct MenuLinkSet {
    /// All links, indexed by id
    links: HashMap<String, MenuLink>,
    /// Link ids per menu, in match order
    by_menu: HashMap<String, Vec<String>>,
    /// Menu names in discovery order
    menu_names: Vec<String>,
    /// Path served by the front page route
    front_path: String,
}

impl MenuLinkSet {
    /// Create an empty link set with `/` as the front page.
    pub fn new() -> Self {
        Self {
            links: HashMap::new(),
            by_menu: HashMap::new(),
            menu_names: Vec::new(),
            front_path: "/".to_string(),
        }
    }

    /// Create a link set from JSON arrays.
    ///
    /// Each element in `sources` is a (source_name, json_array) tuple.
    pub fn from_json_sources(sources: Vec<(String, String)>) -> Self {
        let mut set = Self::new();

        for (source, json) in sources {
            match serde_json::from_str::<Vec<MenuLink>>(&json) {
                Ok(links) => {
                    for link in links {
                        set.insert(link);
                    }
                }
                Err(e) => {
                    warn!(
                        source = %source,
                        error = %e,
                        "failed to parse menu links"
                    );
                }
            }
        }

        set.sort_links();
        set
    }

    /// Create a link set from already parsed links.
    pub fn from_links(links: impl IntoIterator<Item = MenuLink>) -> Self {
        let mut set = Self::new();
        for link in links {
            set.insert(link);
        }
        set.sort_links();
        set
    }

    /// Serve the front page at a different path.
    pub fn with_front_path(mut self, path: impl Into<String>) -> Self {
        self.front_path = path.into();
        self
    }

    fn insert(&mut self, link: MenuLink) {
        if self.links.contains_key(&link.id) {
            warn!(id = %link.id, "duplicate menu link id, keeping the first");
            return;
        }

        if !self.by_menu.contains_key(&link.menu_name) {
            self.menu_names.push(link.menu_name.clone());
        }
        self.by_menu
            .entry(link.menu_name.clone())
            .or_default()
            .push(link.id.clone());
        self.links.insert(link.id.clone(), link);
    }

    /// Order each menu's links for matching.
    ///
    /// Literal paths beat placeholders, deeper paths beat shallower ones,
    /// then weight and insertion order decide.
    fn sort_links(&mut self) {
        let links = &self.links;
        for ids in self.by_menu.values_mut() {
            ids.sort_by_key(|id| {
                links.get(id).map_or((usize::MAX, 0, 0), |link| {
                    let param_count = link.path.matches(':').count();
                    let segment_count = link.path.matches('/').count();
                    (param_count, -(segment_count as i64), link.weight)
                })
            });
        }

        debug!(
            links = self.links.len(),
            menus = self.menu_names.len(),
            "built menu link index"
        );
    }

    /// Get a link by id.
    pub fn get(&self, id: &str) -> Option<&MenuLink> {
        self.links.get(id)
    }

    /// Menus present in the set as `(machine_name, label)`, in discovery order.
    pub fn menus(&self) -> Vec<(String, String)> {
        self.menu_names
            .iter()
            .map(|name| (name.clone(), name.clone()))
            .collect()
    }

    /// Find the link in `menu_name` that matches `path`.
    pub fn match_path(&self, menu_name: &str, path: &str) -> Option<&MenuLink> {
        self.by_menu
            .get(menu_name)?
            .iter()
            .filter_map(|id| self.links.get(id))
            .find(|link| !link.hidden && match_pattern(&link.path, path))
    }

    /// Ids from `link` up to its menu root, leaf first.
    fn ancestry(&self, link: &MenuLink) -> Vec<NodeId> {
        let mut trail = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(link);

        while let Some(link) = current {
            if !visited.insert(link.id.as_str()) {
                warn!(id = %link.id, menu = %link.menu_name, "menu link parent cycle");
                break;
            }
            trail.push(NodeId::new(link.id.clone()));

            current = match &link.parent {
                Some(parent) => {
                    let found = self.links.get(parent);
                    if found.is_none() {
                        warn!(id = %link.id, parent = %parent, "menu link parent not found");
                    }
                    found
                }
                None => None,
            };
        }

        trail
    }

    /// Number of links across all menus.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for MenuLinkSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveTrailSource for MenuLinkSet {
    fn active_trail_ids(&self, menu_name: &str, route: &RouteContext) -> Vec<NodeId> {
        match self.match_path(menu_name, &route.path) {
            Some(link) => self.ancestry(link),
            None => Vec::new(),
        }
    }
}

impl NodeResolver for MenuLinkSet {
    fn resolve(&self, id: &NodeId) -> Option<TrailEntry> {
        self.links
            .get(id.as_str())
            .map(|link| link.to_trail_entry(&self.front_path))
    }
}

/// Match a link path pattern against a request path.
///
/// Pattern: "/blog/:slug"
/// Path: "/blog/my-post"
/// Result: true
fn match_pattern(pattern: &str, path: &str) -> bool {
    let pattern_parts: Vec<&str> = pattern.split('/').collect();
    let path_parts: Vec<&str> = path.split('/').collect();

    if pattern_parts.len() != path_parts.len() {
        return false;
    }

    pattern_parts
        .iter()
        .zip(path_parts.iter())
        .all(|(pat, actual)| pat.starts_with(':') || pat == actual)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sample() -> MenuLinkSet {
        let main = r#"[
            {"id": "main.home", "path": "/", "title": "Home"},
            {"id": "main.about", "path": "/about", "title": "About", "parent": "main.home"},
            {"id": "main.team", "path": "/about/team", "title": "Team", "parent": "main.about"},
            {"id": "main.post", "path": "/blog/:slug", "title": "Post"},
            {"id": "main.launch", "path": "/blog/launch", "title": "Launch"},
            {"id": "main.secret", "path": "/secret", "title": "Secret", "hidden": true}
        ]"#;
        let footer = r#"[
            {"id": "footer.team", "menu_name": "footer", "path": "/about/team", "title": "Our team"}
        ]"#;

        MenuLinkSet::from_json_sources(vec![
            ("main".to_string(), main.to_string()),
            ("footer".to_string(), footer.to_string()),
        ])
    }

    fn ids(trail: &[NodeId]) -> Vec<&str> {
        trail.iter().map(NodeId::as_str).collect()
    }

    #[test]
    fn match_pattern_exact() {
        assert!(match_pattern("/about/team", "/about/team"));
        assert!(!match_pattern("/about/team", "/about/staff"));
    }

    #[test]
    fn match_pattern_with_param() {
        assert!(match_pattern("/blog/:slug", "/blog/my-post"));
        assert!(!match_pattern("/blog/:slug", "/blog/a/b"));
    }

    #[test]
    fn trail_is_leaf_first() {
        let set = sample();
        let trail = set.active_trail_ids("main", &RouteContext::for_path("/about/team"));
        assert_eq!(ids(&trail), vec!["main.team", "main.about", "main.home"]);
    }

    #[test]
    fn trail_is_scoped_to_menu() {
        let set = sample();
        let trail = set.active_trail_ids("footer", &RouteContext::for_path("/about/team"));
        assert_eq!(ids(&trail), vec!["footer.team"]);
        assert!(
            set.active_trail_ids("footer", &RouteContext::for_path("/about"))
                .is_empty()
        );
    }

    #[test]
    fn literal_link_beats_placeholder() {
        let set = sample();
        assert_eq!(set.match_path("main", "/blog/launch").unwrap().id, "main.launch");
        assert_eq!(set.match_path("main", "/blog/other").unwrap().id, "main.post");
    }

    #[test]
    fn hidden_links_never_match() {
        let set = sample();
        assert!(set.match_path("main", "/secret").is_none());
    }

    #[test]
    fn bad_source_is_skipped() {
        let set = MenuLinkSet::from_json_sources(vec![
            ("broken".to_string(), "not json".to_string()),
            (
                "main".to_string(),
                r#"[{"id": "main.a", "path": "/a", "title": "A"}]"#.to_string(),
            ),
        ]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let set = MenuLinkSet::from_json_sources(vec![(
            "main".to_string(),
            r#"[
                {"id": "main.a", "path": "/a", "title": "First"},
                {"id": "main.a", "path": "/a", "title": "Second"}
            ]"#
            .to_string(),
        )]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("main.a").unwrap().title, "First");
    }

    #[test]
    fn parent_cycle_terminates() {
        let set = MenuLinkSet::from_json_sources(vec![(
            "main".to_string(),
            r#"[
                {"id": "a", "path": "/a", "title": "A", "parent": "b"},
                {"id": "b", "path": "/b", "title": "B", "parent": "a"}
            ]"#
            .to_string(),
        )]);
        let trail = set.active_trail_ids("main", &RouteContext::for_path("/a"));
        assert_eq!(ids(&trail), vec!["a", "b"]);
    }

    #[test]
    fn missing_parent_ends_trail() {
        let set = MenuLinkSet::from_json_sources(vec![(
            "main".to_string(),
            r#"[{"id": "a", "path": "/a", "title": "A", "parent": "gone"}]"#.to_string(),
        )]);
        let trail = set.active_trail_ids("main", &RouteContext::for_path("/a"));
        assert_eq!(ids(&trail), vec!["a"]);
    }

    #[test]
    fn resolves_front_and_regular_links() {
        let set = sample();
        assert!(set.resolve(&NodeId::new("main.home")).unwrap().is_front());

        let about = set.resolve(&NodeId::new("main.about")).unwrap();
        assert_eq!(about.title, "About");
        assert!(!about.is_front());

        assert!(set.resolve(&NodeId::new("unknown")).is_none());
    }

    #[test]
    fn custom_front_path() {
        let link: MenuLink =
            serde_json::from_str(r#"{"id": "main.home", "path": "/en", "title": "Home"}"#)
                .unwrap();
        let set = MenuLinkSet::from_links([link]).with_front_path("/en");
        assert!(set.resolve(&NodeId::new("main.home")).unwrap().is_front());
    }

    #[test]
    fn menus_in_discovery_order() {
        let set = sample();
        let names: Vec<String> = set.menus().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["main", "footer"]);
    }
}
