//! Connection side of the transport.
//!
//! Accepts TCP connections with tokio, parses each request and hands it to a
//! [`Router`](crate::router::Router) for dispatch.

mod response;
mod config;
mod error;
mod http_server;
mod tests;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::HttpServer;
