//! Fallback handlers for requests no route can serve.

use std::collections::HashMap;
use std::sync::Arc;

use crate::parser::HttpRequest;
use crate::router::handler::{Handler, ResponseWriter};
use crate::server::StatusCode;

/// Status codes that have a fallback handler.
pub const SUPPORTED_STATUS_CODES: [StatusCode; 2] = [StatusCode::NotFound, StatusCode::MethodNotAllowed];

/// Fallback handlers keyed by status code.
///
/// Every supported code always has a handler, and every stored handler writes
/// its status code before running its body.
#[derive(Clone)]
pub struct StatusHandlers {
    handlers: HashMap<StatusCode, Handler>,
}

impl StatusHandlers {
    /// Table with the default handler for every supported code. A default
    /// handler writes the code and its reason phrase as a plain-text body.
    pub fn new() -> Self {
        let handlers = SUPPORTED_STATUS_CODES
            .into_iter()
            .map(|code| {
                let body: Handler = Arc::new(move |_req: &HttpRequest, w: &mut dyn ResponseWriter| {
                    w.set_header("Content-Type", "text/plain");
                    w.write_body(format!("{} {}", code.as_u16(), code.reason_phrase()).as_bytes());
                });
                (code, with_status(code, body))
            })
            .collect();

        Self { handlers }
    }

    /// Replace the handler for `code`, builder style.
    ///
    /// # Panics
    ///
    /// Panics when `code` is not one of [`SUPPORTED_STATUS_CODES`].
    pub fn with<F>(mut self, code: StatusCode, handler: F) -> Self
    where
        F: Fn(&HttpRequest, &mut dyn ResponseWriter) + Send + Sync + 'static,
    {
        self.set(code, handler);
        self
    }

    /// Replace the handler for `code`.
    ///
    /// The status code is written before `handler` runs, so the response
    /// carries it even if `handler` never sets one.
    ///
    /// # Panics
    ///
    /// Panics when `code` is not one of [`SUPPORTED_STATUS_CODES`].
    pub fn set<F>(&mut self, code: StatusCode, handler: F)
    where
        F: Fn(&HttpRequest, &mut dyn ResponseWriter) + Send + Sync + 'static,
    {
        if !self.handlers.contains_key(&code) {
            panic!("status code \"{}\" is not supported!", code.as_u16());
        }

        self.handlers.insert(code, with_status(code, Arc::new(handler)));
    }

    /// Run the fallback for `code`. Unsupported codes only get the status.
    pub fn handle(&self, code: StatusCode, req: &HttpRequest, w: &mut dyn ResponseWriter) {
        match self.handlers.get(&code) {
            Some(handler) => handler(req, w),
            None => w.write_status(code),
        }
    }

    pub fn is_supported(&self, code: StatusCode) -> bool {
        self.handlers.contains_key(&code)
    }
}

impl Default for StatusHandlers {
    fn default() -> Self {
        Self::new()
    }
}

fn with_status(code: StatusCode, body: Handler) -> Handler {
    Arc::new(move |req: &HttpRequest, w: &mut dyn ResponseWriter| {
        w.write_status(code);
        body(req, w);
    })
}
