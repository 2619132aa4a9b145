//! Storage for registered routes.

use std::collections::HashMap;

use crate::router::route::Route;

/// Routes split by kind: static routes keyed by their exact pattern, and
/// variable routes kept in registration order.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    static_routes: HashMap<String, Route>,
    variable_routes: Vec<Route>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a route.
    ///
    /// A static route whose pattern is already registered replaces the old
    /// one, which is returned. Variable routes are only ever appended, so an
    /// earlier variable route keeps priority over a later one.
    pub fn register(&mut self, route: Route) -> Option<Route> {
        if route.pattern().has_variables() {
            self.variable_routes.push(route);
            return None;
        }

        self.static_routes
            .insert(route.pattern().as_str().to_string(), route)
    }

    /// Exact lookup among static routes.
    pub fn static_route(&self, path: &str) -> Option<&Route> {
        self.static_routes.get(path)
    }

    /// Variable routes in registration order.
    pub fn variable_routes(&self) -> &[Route] {
        &self.variable_routes
    }

    pub fn len(&self) -> usize {
        self.static_routes.len() + self.variable_routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All routes: static ones sorted by pattern, then variable ones in
    /// registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        let mut statics: Vec<&Route> = self.static_routes.values().collect();
        statics.sort_by(|a, b| a.pattern().as_str().cmp(b.pattern().as_str()));
        statics.into_iter().chain(self.variable_routes.iter())
    }
}
