//! Route definitions and the ordered route table.
//!
//! # Responsibilities
//! - Hold route definitions in declared order
//! - Enforce table invariants at construction
//! - Resolve named redirects to their literal path
//!
//! # Design Decisions
//! - Immutable after construction
//! - Exactly one catch-all, always last
//! - Lazy views are loaded once per id, so every route naming an id must
//!   hold the same `LazyView` (or a clone of it)
//! - Fail on the first broken invariant (config validation reports all)

use std::collections::HashMap;

use crate::config::RouteConfig;
use crate::routing::matcher::Pattern;
use crate::routing::types::{RouteError, RouteResult};
use crate::view::{LazyView, ViewRef, ViewRegistry};

/// Where a redirect points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectRef {
    /// A path, e.g. `/`.
    Path(String),
    /// The name of another route with a literal path.
    Name(String),
}

/// What a route leads to.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    View(ViewRef),
    Redirect(RedirectRef),
}

/// One entry of a route table.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDefinition {
    pattern: Pattern,
    name: Option<String>,
    target: Target,
}

impl RouteDefinition {
    /// A route rendering `view`.
    pub fn view(pattern: &str, view: ViewRef) -> RouteResult<Self> {
        Ok(Self {
            pattern: Pattern::parse(pattern)?,
            name: None,
            target: Target::View(view),
        })
    }

    /// A route resolving `to` instead.
    pub fn redirect(pattern: &str, to: RedirectRef) -> RouteResult<Self> {
        if let RedirectRef::Path(path) = &to {
            if !path.starts_with('/') || path.contains(['?', '#']) {
                return Err(RouteError::InvalidRedirect(path.clone()));
            }
        }
        Ok(Self {
            pattern: Pattern::parse(pattern)?,
            name: None,
            target: Target::Redirect(to),
        })
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build a definition from config, looking views up in `registry`.
    pub fn from_config(config: &RouteConfig, registry: &ViewRegistry) -> RouteResult<Self> {
        let definition = match (&config.view, &config.redirect, &config.redirect_name) {
            (Some(view), None, None) => {
                let view = registry.get(view).cloned().ok_or_else(|| RouteError::UnknownView {
                    pattern: config.path.clone(),
                    view: view.clone(),
                })?;
                Self::view(&config.path, view)?
            }
            (None, Some(path), None) => Self::redirect(&config.path, RedirectRef::Path(path.clone()))?,
            (None, None, Some(name)) => Self::redirect(&config.path, RedirectRef::Name(name.clone()))?,
            _ => {
                return Err(RouteError::InvalidPattern {
                    pattern: config.path.clone(),
                    reason: "needs exactly one of view, redirect or redirect_name".into(),
                });
            }
        };

        Ok(match &config.name {
            Some(name) => definition.named(name.clone()),
            None => definition,
        })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Name if present, else the pattern. Used for logs and metrics.
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.pattern.to_string())
    }
}

/// A route's target with named redirects replaced by their path.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Step {
    View(ViewRef),
    Redirect(String),
}

/// Ordered, validated route definitions.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
    names: HashMap<String, usize>,
    steps: Vec<Step>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDefinition>) -> RouteResult<Self> {
        let last = routes.len().checked_sub(1).ok_or(RouteError::MissingCatchAll)?;

        let mut names = HashMap::new();
        for (position, route) in routes.iter().enumerate() {
            if route.pattern.is_catch_all() && position != last {
                return Err(RouteError::CatchAllNotLast {
                    pattern: route.pattern.to_string(),
                    position,
                });
            }
            if let Some(name) = &route.name {
                if names.insert(name.clone(), position).is_some() {
                    return Err(RouteError::DuplicateName(name.clone()));
                }
            }
        }
        if !routes[last].pattern.is_catch_all() {
            return Err(RouteError::MissingCatchAll);
        }

        let mut lazy: HashMap<&str, &LazyView> = HashMap::new();
        for route in &routes {
            let Target::View(ViewRef::Lazy(view)) = &route.target else {
                continue;
            };
            match lazy.get(view.id()) {
                Some(first) if !first.shares_cache(view) => {
                    return Err(RouteError::SplitViewCache {
                        pattern: route.pattern.to_string(),
                        view: view.id().to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    lazy.insert(view.id(), view);
                }
            }
        }

        let steps = routes
            .iter()
            .map(|route| match &route.target {
                Target::View(view) => Ok(Step::View(view.clone())),
                Target::Redirect(RedirectRef::Path(path)) => Ok(Step::Redirect(path.clone())),
                Target::Redirect(RedirectRef::Name(name)) => {
                    let index = names
                        .get(name)
                        .ok_or_else(|| RouteError::UnknownRouteName(name.clone()))?;
                    routes[*index]
                        .pattern
                        .literal()
                        .map(|path| Step::Redirect(path.to_string()))
                        .ok_or_else(|| RouteError::NotLiteral(name.clone()))
                }
            })
            .collect::<RouteResult<Vec<_>>>()?;

        Ok(Self {
            routes,
            names,
            steps,
        })
    }

    /// Build a table from config entries, in order.
    pub fn from_config(configs: &[RouteConfig], registry: &ViewRegistry) -> RouteResult<Self> {
        let routes = configs
            .iter()
            .map(|config| RouteDefinition::from_config(config, registry))
            .collect::<RouteResult<Vec<_>>>()?;
        Self::new(routes)
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RouteDefinition> {
        self.routes.get(index)
    }

    pub fn index_of_name(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    /// Redirect target path of the route at `index`, if it redirects.
    pub fn redirect_path(&self, index: usize) -> Option<&str> {
        match self.steps.get(index) {
            Some(Step::Redirect(path)) => Some(path),
            _ => None,
        }
    }

    pub(crate) fn step(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}
