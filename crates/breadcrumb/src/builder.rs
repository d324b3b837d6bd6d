//! Menu-based breadcrumb builder.
//!
//! Several menus may contain a link for the current page. The builder walks
//! the enabled menus in weight order and uses the first one with a non-empty
//! active trail; trails are never merged across menus. The selected trail is
//! then turned into breadcrumb entries:
//!
//! 1. order the trail root-first and resolve each id, dropping unresolvable
//!    links and links to the front page
//! 2. bail out with an empty breadcrumb if nothing is left and
//!    `hide_on_single_item` is set
//! 3. prepend the home link unless `remove_home` is set
//! 4. drop the last entry (the current page), or keep it as text or link
//!    depending on `append_current_page` and `current_page_as_link`

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::route::{RouteContext, Url};
use crate::settings::{BreadcrumbOptions, ConfigSnapshot, candidate_menus};
use crate::trail::{ActiveTrailSource, AdminRouteClassifier, NodeId, NodeResolver, SiteIdentity};

/// Cache context attached to every menu-based breadcrumb.
pub const PATH_CACHE_CONTEXT: &str = "url.path";

/// One segment of a breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
    pub label: String,
    /// `None` renders as plain text.
    pub url: Option<Url>,
}

impl BreadcrumbEntry {
    pub fn link(label: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            url: Some(url),
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
        }
    }

    pub fn is_link(&self) -> bool {
        self.url.is_some()
    }
}

/// An ordered breadcrumb and the cache contexts it varies by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub links: Vec<BreadcrumbEntry>,
    pub cache_contexts: Vec<String>,
}

impl Breadcrumb {
    pub fn new(links: Vec<BreadcrumbEntry>) -> Self {
        Self {
            links,
            cache_contexts: Vec::new(),
        }
    }

    /// Add a cache context, ignoring duplicates.
    pub fn add_cache_context(mut self, context: &str) -> Self {
        if !self.cache_contexts.iter().any(|c| c == context) {
            self.cache_contexts.push(context.to_string());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }
}

/// A breadcrumb strategy.
///
/// Builders compete for each route; the first one that applies produces the
/// breadcrumb (see [`crate::manager::BreadcrumbManager`]).
pub trait BreadcrumbBuilder: Send + Sync {
    /// Whether this builder should produce the breadcrumb for `route`.
    fn applies(&self, route: &RouteContext) -> bool;

    fn build(&self, route: &RouteContext) -> Breadcrumb;
}

/// Builds breadcrumbs from the active trail of the highest-priority menu.
#[derive(Clone)]
pub struct MenuBasedBreadcrumbBuilder {
    config: Arc<dyn ConfigSnapshot>,
    trails: Arc<dyn ActiveTrailSource>,
    resolver: Arc<dyn NodeResolver>,
    admin: Arc<dyn AdminRouteClassifier>,
    site: Arc<dyn SiteIdentity>,
    front: Url,
}

impl MenuBasedBreadcrumbBuilder {
    /// Create a builder. The home link points at `/`; see [`Self::with_front`].
    pub fn new(
        config: Arc<dyn ConfigSnapshot>,
        trails: Arc<dyn ActiveTrailSource>,
        resolver: Arc<dyn NodeResolver>,
        admin: Arc<dyn AdminRouteClassifier>,
        site: Arc<dyn SiteIdentity>,
    ) -> Self {
        Self {
            config,
            trails,
            resolver,
            admin,
            site,
            front: Url::front("/"),
        }
    }

    /// Use a different target for the home link.
    pub fn with_front(mut self, front: Url) -> Self {
        self.front = front;
        self
    }

    /// Pick the active trail of the first enabled menu that has one.
    ///
    /// Returns the menu name and its trail with empty ids removed, or `None`
    /// when no candidate menu contains the route.
    pub fn select_trail(&self, route: &RouteContext) -> Option<(String, Vec<NodeId>)> {
        for menu in candidate_menus(self.config.menus()) {
            let trail: Vec<NodeId> = self
                .trails
                .active_trail_ids(&menu.name, route)
                .into_iter()
                .filter(|id| !id.is_empty())
                .collect();

            if trail.is_empty() {
                debug!(menu = %menu.name, path = %route.path, "no active trail in menu");
                continue;
            }

            debug!(
                menu = %menu.name,
                weight = menu.weight,
                links = trail.len(),
                "selected menu for breadcrumb"
            );
            return Some((menu.name, trail));
        }

        debug!(path = %route.path, "no enabled menu contains the current route");
        None
    }

    /// Turn a leaf-first trail into breadcrumb entries according to `options`.
    pub fn assemble(&self, options: &BreadcrumbOptions, trail: &[NodeId]) -> Vec<BreadcrumbEntry> {
        let mut links: Vec<BreadcrumbEntry> = trail
            .iter()
            .rev()
            .filter_map(|id| self.resolver.resolve(id))
            .filter(|entry| !entry.title.trim().is_empty() && !entry.is_front())
            .map(|entry| BreadcrumbEntry {
                label: entry.title,
                url: entry.target,
            })
            .collect();

        if links.is_empty() && options.hide_on_single_item {
            return Vec::new();
        }

        if !options.remove_home {
            let label = options.home_label(self.site.as_ref());
            links.insert(0, BreadcrumbEntry::link(label, self.front.clone()));
        }

        let Some(mut current) = links.pop() else {
            return links;
        };

        if options.append_current_page {
            if !options.current_page_as_link {
                current.url = None;
            }
            links.push(current);
        }

        links
    }
}

impl BreadcrumbBuilder for MenuBasedBreadcrumbBuilder {
    fn applies(&self, route: &RouteContext) -> bool {
        let options = self.config.options();
        options.determine_menu
            && !(options.disable_admin_page && self.admin.is_admin_route(route))
    }

    fn build(&self, route: &RouteContext) -> Breadcrumb {
        let options = self.config.options();
        let trail = self
            .select_trail(route)
            .map(|(_, trail)| trail)
            .unwrap_or_default();

        Breadcrumb::new(self.assemble(&options, &trail)).add_cache_context(PATH_CACHE_CONTEXT)
    }
}

impl std::fmt::Debug for MenuBasedBreadcrumbBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuBasedBreadcrumbBuilder")
            .field("front", &self.front)
            .finish()
    }
}
