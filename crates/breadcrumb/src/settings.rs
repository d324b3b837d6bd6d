//! Breadcrumb settings and per-menu priority configuration.
//!
//! Settings are read once per build call through [`ConfigSnapshot`]. The
//! YAML keys match the persisted `menu_breadcrumb.settings` object:
//!
//! ```yaml
//! determine_menu: true
//! disable_admin_page: true
//! append_current_page: true
//! current_page_as_link: false
//! hide_on_single_item: false
//! remove_home: false
//! home_as_site_name: false
//! menu_breadcrumb_menus:
//!   - name: main
//!     label: Main navigation
//!     enabled: true
//!     weight: 0
//! ```
//!
//! Validation happens here, at the configuration boundary. Once a snapshot
//! reaches the builder it is trusted as-is.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{SettingsError, SettingsResult};
use crate::trail::SiteIdentity;

/// Label of the home entry when the site name is not used.
pub const DEFAULT_HOME_LABEL: &str = "Home";

#[allow(clippy::expect_used)] // literal pattern
static MENU_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("valid menu name pattern"));

/// Presentation flags for the menu-based breadcrumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbOptions {
    /// Use the menu the page belongs to for the breadcrumb (master switch).
    pub determine_menu: bool,
    /// Do not build menu-based breadcrumbs on admin routes.
    pub disable_admin_page: bool,
    /// Keep the current page as the last entry.
    pub append_current_page: bool,
    /// Render the appended current page as a link instead of plain text.
    pub current_page_as_link: bool,
    /// Produce no breadcrumb when only the front page link would be shown.
    pub hide_on_single_item: bool,
    /// Leave out the leading home link.
    pub remove_home: bool,
    /// Label the home link with the site name instead of "Home".
    pub home_as_site_name: bool,
}

impl Default for BreadcrumbOptions {
    fn default() -> Self {
        Self {
            determine_menu: true,
            disable_admin_page: true,
            append_current_page: true,
            current_page_as_link: false,
            hide_on_single_item: false,
            remove_home: false,
            home_as_site_name: false,
        }
    }
}

impl BreadcrumbOptions {
    /// Label for the home link.
    pub fn home_label(&self, site: &dyn SiteIdentity) -> String {
        if self.home_as_site_name {
            site.site_name()
        } else {
            DEFAULT_HOME_LABEL.to_string()
        }
    }
}

/// Priority settings for one menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Menu machine name (e.g., "main", "footer").
    pub name: String,
    /// Human-readable menu name. Falls back to the machine name.
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub enabled: bool,
    /// Sort weight (lower = higher priority).
    #[serde(default)]
    pub weight: i32,
}

impl MenuConfig {
    /// An enabled menu whose label is its machine name.
    pub fn new(name: impl Into<String>, weight: i32) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            enabled: true,
            weight,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Read-only view of the breadcrumb configuration.
///
/// Implementations hand out owned copies so a build call never observes a
/// configuration change halfway through.
pub trait ConfigSnapshot: Send + Sync {
    fn options(&self) -> BreadcrumbOptions;

    /// Menu settings in configuration order.
    fn menus(&self) -> Vec<MenuConfig>;
}

/// Complete breadcrumb settings as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbSettings {
    #[serde(flatten)]
    pub options: BreadcrumbOptions,
    #[serde(default)]
    pub menu_breadcrumb_menus: Vec<MenuConfig>,
}

impl BreadcrumbSettings {
    pub fn new(options: BreadcrumbOptions, menus: Vec<MenuConfig>) -> Self {
        Self {
            options,
            menu_breadcrumb_menus: menus,
        }
    }

    /// Parse and validate settings from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> SettingsResult<Self> {
        let mut settings: Self = serde_yml::from_str(yaml)?;
        for menu in &mut settings.menu_breadcrumb_menus {
            if menu.label.is_empty() {
                menu.label = menu.name.clone();
            }
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a YAML file.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_yaml_str(&yaml)?;
        debug!(
            path = %path.display(),
            menus = settings.menu_breadcrumb_menus.len(),
            "loaded breadcrumb settings"
        );
        Ok(settings)
    }

    /// Check menu machine names are well-formed and unique.
    pub fn validate(&self) -> SettingsResult<()> {
        let mut seen = HashSet::new();
        for menu in &self.menu_breadcrumb_menus {
            if !MENU_NAME_RE.is_match(&menu.name) {
                return Err(SettingsError::InvalidMenuName(menu.name.clone()));
            }
            if !seen.insert(menu.name.as_str()) {
                return Err(SettingsError::DuplicateMenu(menu.name.clone()));
            }
        }
        Ok(())
    }
}

impl ConfigSnapshot for BreadcrumbSettings {
    fn options(&self) -> BreadcrumbOptions {
        self.options
    }

    fn menus(&self) -> Vec<MenuConfig> {
        self.menu_breadcrumb_menus.clone()
    }
}

/// Enabled menus in priority order.
///
/// Sorted by weight; the sort is stable, so equal weights keep their
/// configuration order.
pub fn candidate_menus(menus: Vec<MenuConfig>) -> Vec<MenuConfig> {
    let mut candidates: Vec<MenuConfig> = menus.into_iter().filter(|m| m.enabled).collect();
    candidates.sort_by_key(|m| m.weight);
    candidates
}

/// Merge stored menu settings with the menus that currently exist.
///
/// `available` is `(machine_name, label)` in discovery order. Every available
/// menu appears exactly once: stored weight and enabled flag win, the label
/// is refreshed, and menus without stored settings come in disabled at
/// weight 0. Settings for menus that no longer exist are dropped. The result
/// is sorted stably by weight.
pub fn reconcile_menus<I, N, L>(stored: &[MenuConfig], available: I) -> Vec<MenuConfig>
where
    I: IntoIterator<Item = (N, L)>,
    N: Into<String>,
    L: Into<String>,
{
    let by_name: HashMap<&str, &MenuConfig> =
        stored.iter().map(|m| (m.name.as_str(), m)).collect();

    let mut menus: Vec<MenuConfig> = available
        .into_iter()
        .map(|(name, label)| {
            let name = name.into();
            let label = label.into();
            match by_name.get(name.as_str()) {
                Some(existing) => MenuConfig {
                    name,
                    label,
                    enabled: existing.enabled,
                    weight: existing.weight,
                },
                None => MenuConfig {
                    name,
                    label,
                    enabled: false,
                    weight: 0,
                },
            }
        })
        .collect();

    let dropped = stored
        .iter()
        .filter(|s| !menus.iter().any(|m| m.name == s.name))
        .count();
    if dropped > 0 {
        warn!(dropped, "dropping settings for menus that no longer exist");
    }

    menus.sort_by_key(|m| m.weight);
    menus
}
