//! Request routing.
//!
//! Patterns are compiled into [`Route`]s made of `/`-prefixed segments. A
//! segment whose first character after the `/` is `:` is variable and matches
//! any non-empty value at that position. Routes without variable segments are
//! looked up by exact path; the rest are scanned in registration order and the
//! first structural match wins.

mod error;
mod handler;
mod http_router;
mod matcher;
mod registry;
mod route;
mod segment;
mod status;

// Re-export public items
pub use error::ValidationError;
pub use handler::{Handler, ResponseWriter, write_json};
pub use http_router::Router;
pub use matcher::{PathSegments, match_route};
pub use registry::RouteRegistry;
pub use route::{Pattern, Route};
pub use segment::{Segment, normalize, remove_trailing_slash, split_into_segments};
pub use status::{StatusHandlers, SUPPORTED_STATUS_CODES};
