//! A small HTTP request router.
//!
//! Routes are registered as `/`-separated path patterns. A segment starting
//! with `:` is variable and matches any non-empty value, e.g. `/users/:id`.
//! Patterns without variable segments are matched by exact lookup and always
//! take priority; patterns with variables are tried in the order they were
//! registered and the first one that fits wins.
//!
//! # Features
//!
//! - Static and variable path segments
//! - Per-route method sets, with `405 Method Not Allowed` and an `Allow` header
//! - Overridable `404` and `405` fallback handlers
//! - Trailing-slash normalization (`/a/b/` and `/a/b` are the same route)
//! - A small tokio HTTP/1.x server that dispatches through the router
//!
//! # Examples
//!
//! ## Routing
//!
//! ```
//! use std::collections::HashMap;
//! use segment_router::{HttpRequest, HttpResponse, HttpVersion, Method, Router, StatusCode};
//!
//! let mut router = Router::new();
//! router.handle_func("/users", &[Method::GET], |_req, w| w.write_body(b"all users"));
//! router.handle_func("/users/:id", &[Method::GET], |req, w| {
//!     w.write_body(format!("user at {}", req.path).as_bytes());
//! });
//!
//! let request = HttpRequest::new(Method::GET, "/users/42", HttpVersion::Http11, HashMap::new());
//! let mut response = HttpResponse::new(StatusCode::Ok);
//! router.dispatch(&request, &mut response);
//! assert_eq!(response.body, b"user at /users/42");
//!
//! let request = HttpRequest::new(Method::DELETE, "/users/42", HttpVersion::Http11, HashMap::new());
//! let mut response = HttpResponse::new(StatusCode::Ok);
//! router.dispatch(&request, &mut response);
//! assert_eq!(response.status, StatusCode::MethodNotAllowed);
//! ```
//!
//! ## Custom fallbacks
//!
//! ```
//! use segment_router::{Router, StatusCode};
//!
//! let mut router = Router::new();
//! router.override_status_handler(StatusCode::NotFound, |_req, w| {
//!     w.set_header("Content-Type", "text/plain");
//!     w.write_body(b"nothing here");
//! });
//! ```
//!
//! See the `demos` directory for a runnable server.

// Export the parser module
pub mod parser;

// Export the router module
pub mod router;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, HttpVersion, Method, parse_request};
pub use router::{Handler, ResponseWriter, Route, Router, StatusHandlers, ValidationError, write_json};
pub use server::{Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};
