//! Compiled route patterns and registered routes.

use std::fmt;

use crate::parser::Method;
use crate::router::error::ValidationError;
use crate::router::handler::Handler;
use crate::router::segment::{Segment, normalize, split_into_segments};

/// A path pattern compiled into segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    original: String,
    segments: Vec<Segment>,
    has_variables: bool,
}

impl Pattern {
    /// Compile `pattern`, e.g. `/users/:id/posts`.
    ///
    /// # Errors
    ///
    /// Fails when the pattern is empty or does not start with `/`.
    pub fn compile(pattern: &str) -> Result<Self, ValidationError> {
        let original = normalize(pattern)?;
        let segments = split_into_segments(original);
        let has_variables = segments.iter().any(Segment::is_variable);

        Ok(Self {
            original: original.to_string(),
            segments,
            has_variables,
        })
    }

    /// The normalized pattern; the lookup key for static routes.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Segments in reverse order, last path segment first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_variables(&self) -> bool {
        self.has_variables
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// A pattern bound to the methods it answers and the handler it invokes.
#[derive(Clone)]
pub struct Route {
    pattern: Pattern,
    methods: Vec<Method>,
    handler: Handler,
}

impl Route {
    /// Bind a compiled pattern to a handler. Repeated methods are collapsed.
    ///
    /// # Panics
    ///
    /// Panics when `methods` is empty.
    pub fn new(pattern: Pattern, methods: &[Method], handler: Handler) -> Self {
        if methods.is_empty() {
            panic!("methods for pattern \"{pattern}\" are not defined!");
        }

        let mut unique = Vec::with_capacity(methods.len());
        for method in methods {
            if !unique.contains(method) {
                unique.push(*method);
            }
        }

        Self {
            pattern,
            methods: unique,
            handler,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Whether the route answers `method`.
    pub fn allows(&self, method: Method) -> bool {
        self.methods.contains(&method)
    }

    /// The allowed methods joined for an `Allow` header.
    pub fn allow_header(&self) -> String {
        self.methods
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}
