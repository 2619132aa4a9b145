//! The router: registration API and request dispatch.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::parser::{HttpRequest, Method};
use crate::router::handler::ResponseWriter;
use crate::router::matcher::match_route;
use crate::router::registry::RouteRegistry;
use crate::router::route::{Pattern, Route};
use crate::router::status::StatusHandlers;
use crate::server::StatusCode;

/// Routes requests to handlers by method and path.
///
/// Routes and fallback overrides are added during startup through `&mut self`.
/// Once serving starts the router is only read, so it can be shared behind an
/// `Arc` without locking.
///
/// # Examples
///
/// ```
/// use segment_router::{Method, Router};
///
/// let mut router = Router::new();
/// router.handle_func("/users/:id", &[Method::GET], |_req, w| {
///     w.write_body(b"user");
/// });
///
/// assert!(router.find_route("/users/42").is_some());
/// assert!(router.find_route("/users").is_none());
/// ```
#[derive(Default)]
pub struct Router {
    routes: RouteRegistry,
    status_handlers: StatusHandlers,
}

impl Router {
    /// Create an empty router with the default fallback handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty router using a prepared fallback table.
    pub fn with_status_handlers(status_handlers: StatusHandlers) -> Self {
        Self {
            routes: RouteRegistry::new(),
            status_handlers,
        }
    }

    /// Register `handler` for `pattern` and the given methods.
    ///
    /// Registering a static pattern twice keeps the last handler.
    ///
    /// # Panics
    ///
    /// Panics when the pattern is empty or does not start with `/`, or when
    /// `methods` is empty. Both are setup mistakes that must not reach serving.
    pub fn handle_func<F>(&mut self, pattern: &str, methods: &[Method], handler: F)
    where
        F: Fn(&HttpRequest, &mut dyn ResponseWriter) + Send + Sync + 'static,
    {
        let compiled = match Pattern::compile(pattern) {
            Ok(compiled) => compiled,
            Err(e) => panic!("{e}"),
        };

        let route = Route::new(compiled, methods, Arc::new(handler));
        info!("Registered route: {} {}", route.allow_header(), route.pattern());

        if let Some(replaced) = self.routes.register(route) {
            warn!("Route {} registered twice, previous handler replaced", replaced.pattern());
        }
    }

    /// Replace the fallback handler for a status code.
    ///
    /// # Panics
    ///
    /// Panics unless `code` is `404 Not Found` or `405 Method Not Allowed`.
    pub fn override_status_handler<F>(&mut self, code: StatusCode, handler: F)
    where
        F: Fn(&HttpRequest, &mut dyn ResponseWriter) + Send + Sync + 'static,
    {
        self.status_handlers.set(code, handler);
    }

    /// Find the route matching `path`, ignoring the method.
    pub fn find_route(&self, path: &str) -> Option<&Route> {
        match_route(&self.routes, path)
    }

    /// Registered routes: static ones by pattern, then variable ones in
    /// registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Serve one request.
    ///
    /// Runs the matching route's handler, or the `404` fallback when no route
    /// matches, or the `405` fallback (after setting `Allow`) when a route
    /// matches but does not answer the request method.
    pub fn dispatch(&self, req: &HttpRequest, w: &mut dyn ResponseWriter) {
        let Some(route) = self.find_route(&req.path) else {
            debug!("No route for {} {}", req.method, req.path);
            self.status_handlers.handle(StatusCode::NotFound, req, w);
            return;
        };

        if !route.allows(req.method) {
            debug!("Method {} not allowed for {} (route {})", req.method, req.path, route.pattern());
            w.set_header("Allow", &route.allow_header());
            self.status_handlers.handle(StatusCode::MethodNotAllowed, req, w);
            return;
        }

        debug!("{} {} matched route {}", req.method, req.path, route.pattern());
        (route.handler())(req, w);
    }
}
