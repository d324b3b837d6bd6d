//! Collaborator contracts consumed by the breadcrumb builder.
//!
//! Menu tree storage, active-trail computation, admin route detection and the
//! site identity all live outside this crate. The builder only sees them
//! through these traits, so every call is a synchronous lookup that cannot
//! fail: anything missing simply comes back empty.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::route::{RouteContext, Url};

/// Opaque identifier of a menu link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Whether this is a gap in the trail rather than a real link.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A menu link resolved to its title and target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailEntry {
    pub id: NodeId,
    pub title: String,
    /// `None` renders as plain text.
    pub target: Option<Url>,
}

impl TrailEntry {
    /// True only when the target is known to be the front page.
    ///
    /// An entry without a target is never treated as the front page, so
    /// uncertain entries stay in the trail.
    pub fn is_front(&self) -> bool {
        self.target.as_ref().is_some_and(Url::is_front)
    }
}

/// Computes the active trail of a menu for the current route.
pub trait ActiveTrailSource: Send + Sync {
    /// Link ids on the path between the menu root and the link matching
    /// `route`. Order is not guaranteed; gaps may appear as empty ids.
    fn active_trail_ids(&self, menu_name: &str, route: &RouteContext) -> Vec<NodeId>;
}

/// Resolves a link id to its title and target.
pub trait NodeResolver: Send + Sync {
    /// Returns `None` when the id is unknown.
    fn resolve(&self, id: &NodeId) -> Option<TrailEntry>;
}

/// Decides whether a route belongs to the administrative interface.
pub trait AdminRouteClassifier: Send + Sync {
    fn is_admin_route(&self, route: &RouteContext) -> bool;
}

impl<F> AdminRouteClassifier for F
where
    F: Fn(&RouteContext) -> bool + Send + Sync,
{
    fn is_admin_route(&self, route: &RouteContext) -> bool {
        self(route)
    }
}

/// Provides the configured site name.
pub trait SiteIdentity: Send + Sync {
    fn site_name(&self) -> String;
}

/// A fixed site name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteName(pub String);

impl SiteName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl SiteIdentity for SiteName {
    fn site_name(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_empty() {
        assert!(NodeId::new("").is_empty());
        assert!(NodeId::new("  ").is_empty());
        assert!(!NodeId::new("main.about").is_empty());
    }

    #[test]
    fn entry_without_target_is_not_front() {
        let entry = TrailEntry {
            id: NodeId::new("x"),
            title: "Section".to_string(),
            target: None,
        };
        assert!(!entry.is_front());

        let front = TrailEntry {
            target: Some(Url::front("/")),
            ..entry
        };
        assert!(front.is_front());
    }

    #[test]
    fn closures_classify_admin_routes() {
        let classifier = |route: &RouteContext| route.path.starts_with("/admin");
        assert!(classifier.is_admin_route(&RouteContext::for_path("/admin/content")));
        assert!(!classifier.is_admin_route(&RouteContext::for_path("/blog")));
    }
}
