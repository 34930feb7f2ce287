//! Route pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse route patterns (literal path or catch-all)
//! - Match a request path against a pattern
//! - Capture the remaining path for catch-all patterns
//!
//! # Design Decisions
//! - Literal matching is exact equality by default
//! - Case and trailing-slash folding are opt-in via `MatchOptions`
//! - Catch-all is root-level only (`/:name(.*)*` or `/:name(.*)`)
//! - No regex: the only supported group is `(.*)`
//! - Captured values are percent-decoded; the repeatable form keeps empty
//!   segments, so `/a//b` captures `["a", "", "b"]`

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routing::types::{ParamValue, RouteError, RouteParams, RouteResult};

const CATCH_ALL_GROUP: &str = "(.*)";

/// How literal patterns compare against request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchOptions {
    /// `/GetUser` and `/getuser` are different paths.
    pub case_sensitive: bool,

    /// `/GetUser` and `/GetUser/` are different paths.
    pub strict: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            strict: true,
        }
    }
}

impl MatchOptions {
    fn normalize<'a>(&self, path: &'a str) -> Cow<'a, str> {
        let path = if !self.strict && path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        let path = if path.is_empty() { "/" } else { path };

        if self.case_sensitive {
            Cow::Borrowed(path)
        } else {
            Cow::Owned(path.to_lowercase())
        }
    }
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches one exact path.
    Literal(String),

    /// Matches any path; captures it under `param`.
    CatchAll { param: String, repeat: bool },
}

impl Pattern {
    /// Parse a pattern such as `/`, `/GetUser` or `/:pathMatch(.*)*`.
    pub fn parse(raw: &str) -> RouteResult<Self> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        let Some(rest) = raw.strip_prefix('/') else {
            return Err(invalid("must start with `/`"));
        };

        if let Some(dynamic) = rest.strip_prefix(':') {
            let Some(open) = dynamic.find('(') else {
                return Err(invalid("only catch-all parameters are supported"));
            };
            let (param, group) = dynamic.split_at(open);
            if param.is_empty() || !param.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(invalid("parameter name must be alphanumeric"));
            }
            let repeat = match group.strip_prefix(CATCH_ALL_GROUP) {
                Some("") => false,
                Some("*") => true,
                _ => return Err(invalid("catch-all group must be `(.*)` or `(.*)*`")),
            };
            return Ok(Pattern::CatchAll {
                param: param.to_string(),
                repeat,
            });
        }

        if let Some(c) = rest.chars().find(|c| matches!(c, ':' | '(' | ')' | '*' | '?' | '#')) {
            return Err(invalid(&format!("unexpected `{}` in literal path", c)));
        }

        Ok(Pattern::Literal(raw.to_string()))
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Pattern::CatchAll { .. })
    }

    /// The literal path, if this pattern has one.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Pattern::Literal(path) => Some(path),
            Pattern::CatchAll { .. } => None,
        }
    }

    /// Returns the captured params if `path` matches.
    pub fn matches(&self, path: &str, options: &MatchOptions) -> Option<RouteParams> {
        match self {
            Pattern::Literal(literal) => {
                (options.normalize(literal) == options.normalize(path)).then(RouteParams::new)
            }
            Pattern::CatchAll { param, repeat } => {
                let remaining = path.strip_prefix('/').unwrap_or(path);
                let value = if !*repeat {
                    ParamValue::One(decode(remaining))
                } else if remaining.is_empty() {
                    ParamValue::Many(Vec::new())
                } else {
                    ParamValue::Many(remaining.split('/').map(decode).collect())
                };
                let mut params = RouteParams::new();
                params.insert(param.clone(), value);
                Some(params)
            }
        }
    }
}

/// Percent-decode a captured value. Invalid UTF-8 is kept as written.
fn decode(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(path) => f.write_str(path),
            Pattern::CatchAll { param, repeat } => {
                write!(f, "/:{}{}{}", param, CATCH_ALL_GROUP, if *repeat { "*" } else { "" })
            }
        }
    }
}
