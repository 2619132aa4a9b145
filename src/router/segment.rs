//! Path segments and path normalization.

use crate::router::error::ValidationError;

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// First character of a variable segment, right after the separator.
pub const VARIABLE_MARKER: char = ':';

/// One `/`-prefixed component of a compiled pattern, e.g. `/users` or `/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    value: String,
    is_variable: bool,
}

impl Segment {
    /// Create a segment from its raw value, separator included.
    ///
    /// A bare `/` has no character after the separator and is always literal.
    pub fn new(value: &str) -> Self {
        let is_variable = value
            .strip_prefix(SEPARATOR)
            .is_some_and(|rest| rest.starts_with(VARIABLE_MARKER));

        Self {
            value: value.to_string(),
            is_variable,
        }
    }

    /// The raw value, including the leading separator.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_variable(&self) -> bool {
        self.is_variable
    }

    /// Whether `candidate`, a segment of an incoming path, fills this position.
    pub fn accepts(&self, candidate: &str) -> bool {
        if self.is_variable {
            candidate.len() > SEPARATOR.len_utf8()
        } else {
            self.value == candidate
        }
    }
}

/// Iterator over the segments of a path, from the last one to the first.
///
/// Patterns and request paths are both split through this, so positions line
/// up when they are compared.
pub(crate) struct ReverseSegments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for ReverseSegments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let idx = self.rest.rfind(SEPARATOR)?;
        let segment = &self.rest[idx..];
        self.rest = &self.rest[..idx];
        Some(segment)
    }
}

pub(crate) fn reverse_segments(path: &str) -> ReverseSegments<'_> {
    ReverseSegments { rest: path }
}

/// Split a normalized path into segments, last segment first.
///
/// `/users/:id/posts` yields `/posts`, `/:id`, `/users`.
pub fn split_into_segments(path: &str) -> Vec<Segment> {
    reverse_segments(path).map(Segment::new).collect()
}

/// Strip one trailing separator unless the path is the root itself.
pub fn remove_trailing_slash(path: &str) -> &str {
    match path.strip_suffix(SEPARATOR) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

/// Validate a registration pattern and strip its trailing separator.
pub fn normalize(pattern: &str) -> Result<&str, ValidationError> {
    if pattern.is_empty() {
        return Err(ValidationError::EmptyPattern);
    }

    if !pattern.starts_with(SEPARATOR) {
        return Err(ValidationError::MissingLeadingSlash(pattern.to_string()));
    }

    Ok(remove_trailing_slash(pattern))
}
