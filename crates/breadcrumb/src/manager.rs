//! Breadcrumb manager - picks the breadcrumb builder for a route.
//!
//! Builders are registered with a weight (lower = higher priority, asked
//! first). The first builder whose `applies` returns true builds the
//! breadcrumb; the rest are not consulted.

use std::sync::Arc;

use tracing::debug;

use crate::builder::{Breadcrumb, BreadcrumbBuilder};
use crate::route::RouteContext;

/// A registered builder with its priority.
#[derive(Clone)]
struct RegisteredBuilder {
    name: String,
    weight: i32,
    builder: Arc<dyn BreadcrumbBuilder>,
}

/// Weight-ordered set of breadcrumb builders.
#[derive(Clone, Default)]
pub struct BreadcrumbManager {
    builders: Vec<RegisteredBuilder>,
}

impl BreadcrumbManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builder. Builders with equal weight keep registration order.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        weight: i32,
        builder: Arc<dyn BreadcrumbBuilder>,
    ) {
        self.builders.push(RegisteredBuilder {
            name: name.into(),
            weight,
            builder,
        });
        self.builders.sort_by_key(|b| b.weight);
    }

    /// Registered builder names, in the order they are consulted.
    pub fn builder_names(&self) -> impl Iterator<Item = &str> {
        self.builders.iter().map(|b| b.name.as_str())
    }

    /// Build the breadcrumb for `route` with the first applicable builder.
    ///
    /// Returns an empty breadcrumb when no builder applies.
    pub fn build(&self, route: &RouteContext) -> Breadcrumb {
        for registered in &self.builders {
            if registered.builder.applies(route) {
                debug!(builder = %registered.name, path = %route.path, "building breadcrumb");
                return registered.builder.build(route);
            }
        }

        debug!(path = %route.path, "no breadcrumb builder applies");
        Breadcrumb::default()
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl std::fmt::Debug for BreadcrumbManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreadcrumbManager")
            .field("builders", &self.builder_names().collect::<Vec<_>>())
            .finish()
    }
}
