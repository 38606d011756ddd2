//! Path-pattern matching with named segments.
//!
//! The legacy route scheme encodes all parameters as fixed-position path
//! segments (`/insert/{id}/{name}/{prereq}`), where empty segments are legal
//! values and extra trailing segments are ignored. axum's own `{param}`
//! matching refuses empty segments, so the parameterized routes go through
//! the router's prefix dispatcher and are matched here against the raw path.

use std::borrow::Cow;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("not enough path segments")]
    TooFewSegments,
}

/// A route template: a literal prefix segment followed by named parameters
/// bound positionally.
pub struct PathPattern {
    prefix: &'static str,
    params: &'static [&'static str],
}

/// Parameter values captured from one request path
#[derive(Debug)]
pub struct PathParams<'a> {
    names: &'static [&'static str],
    values: Vec<Cow<'a, str>>,
}

impl PathPattern {
    pub const fn new(prefix: &'static str, params: &'static [&'static str]) -> Self {
        Self { prefix, params }
    }

    /// Matches a raw request path against this pattern.
    ///
    /// Splits on `/`, requires the literal prefix, then binds the following
    /// segments to the named parameters in order. Segments are
    /// percent-decoded after splitting, so an encoded slash stays inside its
    /// segment. Empty segments bind as empty strings; segments past the last
    /// parameter are ignored; fewer segments than parameters is
    /// `TooFewSegments`.
    pub fn capture<'a>(&self, path: &'a str) -> Result<PathParams<'a>, PathError> {
        let mut segments = path.strip_prefix('/').unwrap_or(path).split('/');

        if segments.next() != Some(self.prefix) {
            return Err(PathError::TooFewSegments);
        }

        let values: Vec<Cow<'a, str>> = segments
            .take(self.params.len())
            .map(|s| urlencoding::decode(s).unwrap_or(Cow::Borrowed(s)))
            .collect();
        if values.len() < self.params.len() {
            return Err(PathError::TooFewSegments);
        }

        Ok(PathParams {
            names: self.params,
            values,
        })
    }
}

impl PathParams<'_> {
    /// Returns the value bound to a named segment.
    ///
    /// # Panics
    /// Panics if the name is not part of the pattern; patterns and lookups
    /// are compile-time constants in the handlers, so a miss is a programming
    /// error.
    pub fn get(&self, name: &str) -> &str {
        self.names
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i].as_ref())
            .unwrap_or_else(|| panic!("unknown path parameter: {name}"))
    }
}
