//! Menu breadcrumb inspector.
//!
//! Loads breadcrumb settings and menu link files, then prints the breadcrumb
//! that would be built for a path.
//!
//! Usage:
//!   menu-breadcrumb --settings breadcrumb.yml --menus main.json --menus footer.json /about/team

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use menu_breadcrumb::settings::reconcile_menus;
use menu_breadcrumb::{
    BreadcrumbBuilder, BreadcrumbManager, BreadcrumbSettings, MenuBasedBreadcrumbBuilder,
    MenuLinkSet, RouteContext, SiteName, Url,
};

/// Breadcrumb inspector arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Breadcrumb settings YAML file. Defaults apply when omitted.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Menu link JSON file (an array of links). May be repeated.
    #[arg(long)]
    menus: Vec<PathBuf>,

    /// Site name used for the home link when `home_as_site_name` is set.
    #[arg(long, default_value = "Trovato")]
    site_name: String,

    /// Path served by the front page route.
    #[arg(long, default_value = "/")]
    front_path: String,

    /// Treat the path as an admin route.
    #[arg(long)]
    admin: bool,

    /// Print the menu priority table instead of a breadcrumb.
    #[arg(long)]
    list_menus: bool,

    /// Request path to build the breadcrumb for.
    #[arg(default_value = "/")]
    path: String,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => BreadcrumbSettings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => BreadcrumbSettings::default(),
    };

    let mut sources = Vec::with_capacity(args.menus.len());
    for path in &args.menus {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read menu links from {}", path.display()))?;
        sources.push((path.display().to_string(), json));
    }
    let links = Arc::new(MenuLinkSet::from_json_sources(sources).with_front_path(&args.front_path));
    info!(links = links.len(), "menu links loaded");

    if args.list_menus {
        let menus = reconcile_menus(&settings.menu_breadcrumb_menus, links.menus());
        println!("{}", serde_json::to_string_pretty(&menus)?);
        return Ok(());
    }

    let admin = args.admin;
    let builder = MenuBasedBreadcrumbBuilder::new(
        Arc::new(settings),
        links.clone(),
        links,
        Arc::new(move |_: &RouteContext| admin),
        Arc::new(SiteName::new(args.site_name)),
    )
    .with_front(Url::front(args.front_path));

    let route = RouteContext::for_path(args.path);
    if !builder.applies(&route) {
        info!(path = %route.path, "menu-based breadcrumb does not apply to this route");
    }

    let mut manager = BreadcrumbManager::new();
    manager.register("menu", 0, Arc::new(builder));

    let breadcrumb = manager.build(&route);
    println!("{}", serde_json::to_string_pretty(&breadcrumb)?);

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
