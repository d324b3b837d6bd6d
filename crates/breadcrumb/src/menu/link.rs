//! Menu link definition.

use serde::{Deserialize, Serialize};

use crate::route::{NONE_ROUTE, Url};
use crate::trail::{NodeId, TrailEntry};

/// A navigational link within a named menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    /// Unique link identifier (e.g., "main.about").
    pub id: String,

    /// Menu machine name (e.g., "main", "footer").
    #[serde(default = "default_menu")]
    pub menu_name: String,

    /// Link destination path. May contain `:param` segments, or be `<none>`
    /// for a grouping entry without a target.
    pub path: String,

    /// Display title.
    pub title: String,

    /// Route name of the destination. Defaults to the path.
    #[serde(default)]
    pub route_name: Option<String>,

    /// Optional parent link for hierarchy.
    #[serde(default)]
    pub parent: Option<String>,

    /// Sort weight (lower = higher priority).
    #[serde(default)]
    pub weight: i32,

    /// Whether the link is hidden from rendering.
    #[serde(default)]
    pub hidden: bool,
}

fn default_menu() -> String {
    "main".to_string()
}

impl MenuLink {
    /// Resolve this link into a trail entry. `front_path` is served by the
    /// `<front>` route.
    pub fn to_trail_entry(&self, front_path: &str) -> TrailEntry {
        let target = if self.path == NONE_ROUTE {
            None
        } else if self.path == front_path {
            Some(Url::front(self.path.clone()))
        } else {
            let route_name = self.route_name.clone().unwrap_or_else(|| self.path.clone());
            Some(Url::new(route_name, self.path.clone()))
        };

        TrailEntry {
            id: NodeId::new(self.id.clone()),
            title: self.title.clone(),
            target,
        }
    }
}
