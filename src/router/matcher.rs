//! Matching incoming paths against registered routes.

use crate::router::registry::RouteRegistry;
use crate::router::route::{Pattern, Route};
use crate::router::segment::{remove_trailing_slash, reverse_segments};

/// Segments of one request path, last segment first.
///
/// Borrowed from the path and sized to it, so there is no segment limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments<'a> {
    segments: Vec<&'a str>,
}

impl<'a> PathSegments<'a> {
    /// Split an already normalized path.
    pub fn new(path: &'a str) -> Self {
        Self {
            segments: reverse_segments(path).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.segments
    }
}

impl Pattern {
    /// Whether `path` has the same number of segments and every position is
    /// accepted by the corresponding pattern segment.
    pub fn matches(&self, path: &PathSegments<'_>) -> bool {
        self.segments().len() == path.len()
            && self
                .segments()
                .iter()
                .zip(path.as_slice())
                .all(|(segment, candidate)| segment.accepts(candidate))
    }
}

/// Find the route for `path`.
///
/// Static routes are tried first with an exact lookup. Otherwise variable
/// routes are scanned in registration order and the first match is returned,
/// even if a later route would be more specific.
pub fn match_route<'r>(registry: &'r RouteRegistry, path: &str) -> Option<&'r Route> {
    let path = remove_trailing_slash(path);

    if let Some(route) = registry.static_route(path) {
        return Some(route);
    }

    let segments = PathSegments::new(path);
    registry
        .variable_routes()
        .iter()
        .find(|route| route.pattern().matches(&segments))
}
