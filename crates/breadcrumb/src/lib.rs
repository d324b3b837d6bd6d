//! Menu-based breadcrumbs.
//!
//! Picks, among several independently configured menus, the one whose active
//! trail best represents the current page and turns that trail into an
//! ordered breadcrumb. Menu storage, routing and rendering stay with the
//! caller; they are reached through the traits in [`trail`] and
//! [`settings::ConfigSnapshot`].

pub mod builder;
pub mod error;
pub mod manager;
pub mod menu;
pub mod route;
pub mod settings;
pub mod trail;

pub use builder::{Breadcrumb, BreadcrumbBuilder, BreadcrumbEntry, MenuBasedBreadcrumbBuilder};
pub use error::{SettingsError, SettingsResult};
pub use manager::BreadcrumbManager;
pub use menu::{MenuLink, MenuLinkSet};
pub use route::{FRONT_ROUTE, NONE_ROUTE, RouteContext, Url};
pub use settings::{BreadcrumbOptions, BreadcrumbSettings, ConfigSnapshot, MenuConfig};
pub use trail::{
    ActiveTrailSource, AdminRouteClassifier, NodeId, NodeResolver, SiteIdentity, SiteName,
    TrailEntry,
};
