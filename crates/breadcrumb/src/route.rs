//! Route context and link targets.
//!
//! Routes are identified by name. Two names are reserved: `<front>` for the
//! site's front page and `<none>` for plain-text entries with no target.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Route name of the site's front page.
pub const FRONT_ROUTE: &str = "<front>";

/// Route name for a link that points nowhere.
pub const NONE_ROUTE: &str = "<none>";

/// The route being rendered, as handed over by the routing layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteContext {
    /// Route name (e.g., "item.view", "<front>").
    pub route_name: String,
    /// Request path after alias resolution (e.g., "/about/team").
    pub path: String,
    /// Path parameters extracted by the router (e.g., {"slug": "my-post"}).
    #[serde(default)]
    pub params: HashMap<String, String>,
}

impl RouteContext {
    /// Create a route context with no parameters.
    pub fn new(route_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            path: path.into(),
            params: HashMap::new(),
        }
    }

    /// Create a route context for a bare path, using the path as route name.
    pub fn for_path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(path.clone(), path)
    }

    /// Attach a path parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// A routed link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    pub route_name: String,
    pub path: String,
}

impl Url {
    pub fn new(route_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            path: path.into(),
        }
    }

    /// The front page route served at `path`.
    pub fn front(path: impl Into<String>) -> Self {
        Self::new(FRONT_ROUTE, path)
    }

    /// Whether this target is the front page.
    pub fn is_front(&self) -> bool {
        self.route_name == FRONT_ROUTE
    }
}
