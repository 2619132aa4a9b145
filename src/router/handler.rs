//! Handler and response-sink seams between the router and the transport.

use std::sync::Arc;

use serde::Serialize;

use crate::parser::HttpRequest;
use crate::server::{Error, StatusCode};

/// Where a handler writes its response.
///
/// The transport decides what each call means on the wire; for
/// [`HttpResponse`](crate::server::HttpResponse) the last status written wins.
pub trait ResponseWriter {
    /// Set the response status code.
    fn write_status(&mut self, status: StatusCode);

    /// Add or replace a response header.
    fn set_header(&mut self, name: &str, value: &str);

    /// Append bytes to the response body.
    fn write_body(&mut self, body: &[u8]);
}

/// A request handler bound to a route or a status code.
pub type Handler = Arc<dyn Fn(&HttpRequest, &mut dyn ResponseWriter) + Send + Sync>;

/// Serialize `value` as the JSON body of the response.
pub fn write_json<T: Serialize>(writer: &mut dyn ResponseWriter, value: &T) -> Result<(), Error> {
    let json = serde_json::to_vec(value)?;
    writer.set_header("Content-Type", "application/json");
    writer.write_body(&json);
    Ok(())
}
