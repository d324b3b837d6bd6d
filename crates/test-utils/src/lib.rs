//! Menu breadcrumb test utilities.
//!
//! Helpers for integration testing: settings builders and in-memory
//! collaborators with scripted trails and link titles.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use menu_breadcrumb::{
    ActiveTrailSource, BreadcrumbEntry, BreadcrumbOptions, BreadcrumbSettings,
    MenuBasedBreadcrumbBuilder, MenuConfig, NodeId, NodeResolver, RouteContext, SiteName,
    TrailEntry, Url,
};

/// Site name used by [`TestBreadcrumb`].
pub const TEST_SITE_NAME: &str = "Test Site";

/// Create settings with every flag off except `determine_menu`.
pub fn test_settings() -> TestSettings {
    TestSettings {
        options: BreadcrumbOptions {
            determine_menu: true,
            disable_admin_page: false,
            append_current_page: false,
            current_page_as_link: false,
            hide_on_single_item: false,
            remove_home: false,
            home_as_site_name: false,
        },
        menus: Vec::new(),
    }
}

/// A settings builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestSettings {
    pub options: BreadcrumbOptions,
    pub menus: Vec<MenuConfig>,
}

impl TestSettings {
    /// Add an enabled menu.
    pub fn menu(mut self, name: &str, weight: i32) -> Self {
        self.menus.push(MenuConfig::new(name, weight));
        self
    }

    /// Add a disabled menu.
    pub fn disabled_menu(mut self, name: &str, weight: i32) -> Self {
        self.menus.push(MenuConfig::new(name, weight).disabled());
        self
    }

    pub fn determine_menu(mut self, on: bool) -> Self {
        self.options.determine_menu = on;
        self
    }

    pub fn disable_admin_page(mut self, on: bool) -> Self {
        self.options.disable_admin_page = on;
        self
    }

    pub fn append_current_page(mut self, on: bool) -> Self {
        self.options.append_current_page = on;
        self
    }

    pub fn current_page_as_link(mut self, on: bool) -> Self {
        self.options.current_page_as_link = on;
        self
    }

    pub fn hide_on_single_item(mut self, on: bool) -> Self {
        self.options.hide_on_single_item = on;
        self
    }

    pub fn remove_home(mut self, on: bool) -> Self {
        self.options.remove_home = on;
        self
    }

    pub fn home_as_site_name(mut self, on: bool) -> Self {
        self.options.home_as_site_name = on;
        self
    }

    pub fn build(self) -> BreadcrumbSettings {
        BreadcrumbSettings::new(self.options, self.menus)
    }
}

/// Active trails scripted per menu, ignoring the route.
///
/// Records lookups so tests can check which menus were consulted.
#[derive(Debug, Default)]
pub struct StaticTrails {
    trails: HashMap<String, Vec<NodeId>>,
    consulted: Mutex<Vec<String>>,
}

impl StaticTrails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trail returned for `menu`, as given (no reordering).
    pub fn with_trail(mut self, menu: &str, ids: &[&str]) -> Self {
        self.trails
            .insert(menu.to_string(), ids.iter().map(|id| NodeId::from(*id)).collect());
        self
    }

    /// Menus looked up so far, in call order.
    pub fn consulted(&self) -> Vec<String> {
        self.consulted
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

impl ActiveTrailSource for StaticTrails {
    fn active_trail_ids(&self, menu_name: &str, _route: &RouteContext) -> Vec<NodeId> {
        if let Ok(mut log) = self.consulted.lock() {
            log.push(menu_name.to_string());
        }
        self.trails.get(menu_name).cloned().unwrap_or_default()
    }
}

/// Link titles and targets keyed by id.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<String, TrailEntry>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link to `path`, using the path as route name.
    pub fn link(self, id: &str, title: &str, path: &str) -> Self {
        self.entry(id, title, Some(Url::new(path, path)))
    }

    /// Add a link to the front page.
    pub fn front(self, id: &str, title: &str) -> Self {
        self.entry(id, title, Some(Url::front("/")))
    }

    /// Add an entry without a target.
    pub fn text(self, id: &str, title: &str) -> Self {
        self.entry(id, title, None)
    }

    fn entry(mut self, id: &str, title: &str, target: Option<Url>) -> Self {
        self.entries.insert(
            id.to_string(),
            TrailEntry {
                id: NodeId::from(id),
                title: title.to_string(),
                target,
            },
        );
        self
    }
}

impl NodeResolver for StaticResolver {
    fn resolve(&self, id: &NodeId) -> Option<TrailEntry> {
        self.entries.get(id.as_str()).cloned()
    }
}

/// A fully wired builder plus handles on its collaborators.
pub struct TestBreadcrumb {
    pub builder: MenuBasedBreadcrumbBuilder,
    pub trails: Arc<StaticTrails>,
}

impl TestBreadcrumb {
    /// Wire a builder. Routes under `/admin` are admin routes.
    pub fn new(settings: BreadcrumbSettings, trails: StaticTrails, resolver: StaticResolver) -> Self {
        let trails = Arc::new(trails);
        let builder = MenuBasedBreadcrumbBuilder::new(
            Arc::new(settings),
            trails.clone(),
            Arc::new(resolver),
            Arc::new(|route: &RouteContext| route.path.starts_with("/admin")),
            Arc::new(SiteName::new(TEST_SITE_NAME)),
        );
        Self { builder, trails }
    }
}

/// Create a route context for a path.
pub fn test_route(path: &str) -> RouteContext {
    RouteContext::for_path(path)
}

/// Collect the labels of a breadcrumb.
pub fn labels(links: &[BreadcrumbEntry]) -> Vec<&str> {
    links.iter().map(|l| l.label.as_str()).collect()
}
