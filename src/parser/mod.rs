//! Request side of the transport.
//!
//! Turns the head of an HTTP/1.x request into an [`HttpRequest`] carrying the
//! method and path the router dispatches on.

mod request;
mod method;
mod error;
mod tests;

// Re-export public items
pub use request::{HttpRequest, HttpVersion, parse_request};
pub use method::Method;
pub use error::Error;
