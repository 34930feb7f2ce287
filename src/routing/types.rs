//! Routing types and error definitions.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Errors raised while building a route table or looking up a named route.
///
/// Path resolution itself never fails: the mandatory catch-all absorbs every
/// path that no literal entry matches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Pattern is neither a literal path nor a catch-all.
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Two definitions share a name.
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    /// The table has no catch-all entry, so some paths would not resolve.
    #[error("route table has no catch-all entry")]
    MissingCatchAll,

    /// A catch-all appears before the end of the table.
    #[error("catch-all `{pattern}` must be the last route (found at position {position})")]
    CatchAllNotLast { pattern: String, position: usize },

    /// A redirect target is not a plain path.
    #[error("invalid redirect target `{0}`")]
    InvalidRedirect(String),

    /// Following redirects from `from` comes back to an already visited route.
    #[error("redirect cycle starting at `{from}` via `{via}`")]
    RedirectCycle { from: String, via: String },

    /// Name lookup failed.
    #[error("no route named `{0}`")]
    UnknownRouteName(String),

    /// Named route has no fixed path (it is a catch-all).
    #[error("route `{0}` is not a literal path")]
    NotLiteral(String),

    /// Two routes carry separately built lazy views with the same id, so the
    /// view would be loaded once per route instead of once per id.
    #[error("route `{pattern}` has its own loader for lazy view `{view}`; routes sharing a view id must share one LazyView")]
    SplitViewCache { pattern: String, view: String },

    /// A route refers to a view the registry does not know.
    #[error("route `{pattern}` refers to unknown view `{view}`")]
    UnknownView { pattern: String, view: String },
}

/// Result type for route table operations.
pub type RouteResult<T> = Result<T, RouteError>;

/// Value captured by a catch-all pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// `/:name(.*)` captures the remaining path as one string.
    One(String),
    /// `/:name(.*)*` captures the remaining path split into segments.
    Many(Vec<String>),
}

/// Parameters captured while matching, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, ParamValue>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
