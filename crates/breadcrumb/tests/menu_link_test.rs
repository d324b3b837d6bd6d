#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Breadcrumbs built from static menu links.
//!
//! Wires a `MenuLinkSet` in as both trail source and resolver, the way the
//! inspector binary does.

use std::sync::Arc;

use menu_breadcrumb::{
    BreadcrumbEntry, BreadcrumbManager, BreadcrumbSettings, MenuBasedBreadcrumbBuilder,
    MenuLinkSet, RouteContext, SiteName, Url,
};
use menu_breadcrumb_test_utils::{labels, test_route, test_settings};

const MAIN: &str = r#"[
    {"id": "main.home", "path": "/", "title": "Home"},
    {"id": "main.about", "path": "/about", "title": "About us", "parent": "main.home", "route_name": "page.about"},
    {"id": "main.team", "path": "/about/team", "title": "Team", "parent": "main.about"},
    {"id": "main.group", "path": "<none>", "title": "Resources", "parent": "main.home"},
    {"id": "main.docs", "path": "/docs/:page", "title": "Docs", "parent": "main.group"}
]"#;

const FOOTER: &str = r#"[
    {"id": "footer.team", "menu_name": "footer", "path": "/about/team", "title": "Meet the team"},
    {"id": "footer.legal", "menu_name": "footer", "path": "/legal", "title": "Legal"}
]"#;

fn links() -> Arc<MenuLinkSet> {
    Arc::new(MenuLinkSet::from_json_sources(vec![
        ("main.json".to_string(), MAIN.to_string()),
        ("footer.json".to_string(), FOOTER.to_string()),
    ]))
}

fn builder(settings: BreadcrumbSettings) -> MenuBasedBreadcrumbBuilder {
    let links = links();
    MenuBasedBreadcrumbBuilder::new(
        Arc::new(settings),
        links.clone(),
        links,
        Arc::new(|route: &RouteContext| route.path.starts_with("/admin")),
        Arc::new(SiteName::new("Example")),
    )
}

fn manager(settings: BreadcrumbSettings) -> BreadcrumbManager {
    let mut manager = BreadcrumbManager::new();
    manager.register("menu", 0, Arc::new(builder(settings)));
    manager
}

#[test]
fn main_menu_trail_with_front_link_removed() {
    let manager = manager(
        test_settings()
            .menu("main", 0)
            .menu("footer", 1)
            .append_current_page(true)
            .build(),
    );

    let breadcrumb = manager.build(&test_route("/about/team"));
    assert_eq!(
        breadcrumb.links,
        vec![
            BreadcrumbEntry::link("Home", Url::front("/")),
            BreadcrumbEntry::link("About us", Url::new("page.about", "/about")),
            BreadcrumbEntry::text("Team"),
        ]
    );
}

#[test]
fn footer_menu_takes_priority_by_weight() {
    let manager = manager(
        test_settings()
            .menu("main", 5)
            .menu("footer", -5)
            .append_current_page(true)
            .current_page_as_link(true)
            .build(),
    );

    let breadcrumb = manager.build(&test_route("/about/team"));
    assert_eq!(labels(&breadcrumb.links), vec!["Home", "Meet the team"]);
    assert!(breadcrumb.links[1].is_link());
}

#[test]
fn falls_back_to_next_menu_when_page_is_missing() {
    let manager = manager(
        test_settings()
            .menu("main", 0)
            .menu("footer", 1)
            .append_current_page(true)
            .build(),
    );

    let breadcrumb = manager.build(&test_route("/legal"));
    assert_eq!(labels(&breadcrumb.links), vec!["Home", "Legal"]);
}

#[test]
fn grouping_entry_renders_as_text() {
    let manager = manager(
        test_settings()
            .menu("main", 0)
            .append_current_page(true)
            .build(),
    );

    let breadcrumb = manager.build(&test_route("/docs/install"));
    assert_eq!(labels(&breadcrumb.links), vec!["Home", "Resources", "Docs"]);
    assert!(breadcrumb.links[1].url.is_none());
}

#[test]
fn admin_route_yields_nothing_when_disabled_there() {
    let manager = manager(
        test_settings()
            .menu("main", 0)
            .disable_admin_page(true)
            .build(),
    );

    let breadcrumb = manager.build(&test_route("/admin/about"));
    assert!(breadcrumb.is_empty());
    assert!(breadcrumb.cache_contexts.is_empty());
}

#[test]
fn front_page_with_hide_on_single_item() {
    let manager = manager(
        test_settings()
            .menu("main", 0)
            .hide_on_single_item(true)
            .append_current_page(true)
            .build(),
    );

    assert!(manager.build(&test_route("/")).is_empty());
}

#[test]
fn breadcrumb_serializes_to_json() {
    let manager = manager(test_settings().menu("main", 0).append_current_page(true).build());

    let breadcrumb = manager.build(&test_route("/about"));
    let json = serde_json::to_value(&breadcrumb).unwrap();
    assert_eq!(json["links"][0]["label"], "Home");
    assert_eq!(json["links"][0]["url"]["route_name"], "<front>");
    assert_eq!(json["links"][1]["label"], "About us");
    assert!(json["links"][1]["url"].is_null());
    assert_eq!(json["cache_contexts"][0], "url.path");
}
