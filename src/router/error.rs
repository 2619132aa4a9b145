//! Errors raised while compiling route patterns.

use thiserror::Error;

/// A pattern that cannot be turned into a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The pattern is the empty string.
    #[error("path pattern cannot be an empty string")]
    EmptyPattern,

    /// The pattern does not begin with `/`.
    #[error("path pattern {0:?} must begin with \"/\"")]
    MissingLeadingSlash(String),
}
