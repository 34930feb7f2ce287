//! Route lookup and resolution.
//!
//! # Responsibilities
//! - Match a path against the table (first match wins)
//! - Follow redirects to a view
//! - Look up named routes
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Redirect chains are walked once per route at construction; cycles are
//!   rejected there, so `resolve` is infallible
//! - O(n) scan over the table (tables are a handful of entries)

use serde::Serialize;

use crate::observability::metrics;
use crate::routing::location::Location;
use crate::routing::matcher::MatchOptions;
use crate::routing::table::{RouteDefinition, RouteTable, Step};
use crate::routing::types::{RouteError, RouteParams, RouteResult};
use crate::view::ViewRef;

/// Outcome of a single matching step.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteMatch<'a> {
    /// The matched route renders a view.
    View {
        route: &'a RouteDefinition,
        view: &'a ViewRef,
        params: RouteParams,
    },
    /// The matched route sends navigation elsewhere.
    Redirect {
        route: &'a RouteDefinition,
        to: &'a str,
    },
}

/// Final outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRoute {
    /// Path of the route that renders the view (after redirects).
    pub path: String,
    /// Pattern of the matched view route.
    pub matched: String,
    pub name: Option<String>,
    pub view: ViewRef,
    pub params: RouteParams,
    pub query: Vec<(String, String)>,
    /// Query string as requested, replayed by `full_path`.
    #[serde(skip)]
    pub raw_query: Option<String>,
    pub hash: Option<String>,
    /// Requested path, when at least one redirect was followed.
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    /// Final path with query and hash, as a history entry.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.raw_query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }
        full
    }
}

/// Precomputed outcome for paths first matched by a given route.
#[derive(Debug, Clone)]
struct Resolution {
    /// Index of the view route the chain ends at.
    index: usize,
    view: ViewRef,
    /// Final path and its params, when the chain contains redirects.
    redirect: Option<(String, RouteParams)>,
}

/// Resolves navigation paths against an immutable route table.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    options: MatchOptions,
    plans: Vec<Resolution>,
}

impl Router {
    pub fn new(table: RouteTable) -> RouteResult<Self> {
        Self::with_options(table, MatchOptions::default())
    }

    pub fn with_options(table: RouteTable, options: MatchOptions) -> RouteResult<Self> {
        let mut router = Self {
            table,
            options,
            plans: Vec::new(),
        };
        router.plans = (0..router.table.len())
            .map(|index| router.plan(index))
            .collect::<RouteResult<Vec<_>>>()?;

        tracing::info!(
            routes = router.table.len(),
            redirects = router.plans.iter().filter(|p| p.redirect.is_some()).count(),
            case_sensitive = options.case_sensitive,
            strict = options.strict,
            "Route table compiled"
        );
        Ok(router)
    }

    /// Follow redirects from the route at `index` until a view route.
    fn plan(&self, index: usize) -> RouteResult<Resolution> {
        let mut current = index;
        let mut redirected_to: Option<&str> = None;
        let mut visited = vec![index];

        loop {
            match self.table.step(current) {
                Step::View(view) => {
                    let redirect = redirected_to.map(|to| {
                        let params = self.table.routes()[current]
                            .pattern()
                            .matches(to, &self.options)
                            .unwrap_or_default();
                        (to.to_string(), params)
                    });
                    return Ok(Resolution {
                        index: current,
                        view: view.clone(),
                        redirect,
                    });
                }
                Step::Redirect(to) => {
                    let next = self.first_match(to);
                    if visited.contains(&next) {
                        return Err(RouteError::RedirectCycle {
                            from: self.table.routes()[index].pattern().to_string(),
                            via: to.clone(),
                        });
                    }
                    visited.push(next);
                    redirected_to = Some(to.as_str());
                    current = next;
                }
            }
        }
    }

    /// Index of the first route matching `path`. Total because the table
    /// always ends with a catch-all.
    fn first_match(&self, path: &str) -> usize {
        self.table
            .routes()
            .iter()
            .position(|route| route.pattern().matches(path, &self.options).is_some())
            .unwrap_or(self.table.len() - 1)
    }

    /// One matching step, without following redirects.
    pub fn match_path(&self, path: &str) -> RouteMatch<'_> {
        let index = self.first_match(path);
        let route = &self.table.routes()[index];
        match self.table.step(index) {
            Step::View(view) => RouteMatch::View {
                route,
                view,
                params: route
                    .pattern()
                    .matches(path, &self.options)
                    .unwrap_or_default(),
            },
            Step::Redirect(to) => RouteMatch::Redirect {
                route,
                to: to.as_str(),
            },
        }
    }

    /// Resolve a navigation target (`/path?query#hash`) to a view.
    pub fn resolve(&self, target: &str) -> ResolvedRoute {
        let location = Location::parse(target);
        let first = self.first_match(&location.path);
        let plan = &self.plans[first];
        let route = &self.table.routes()[plan.index];

        let (path, params, redirected_from) = match &plan.redirect {
            Some((path, params)) => {
                let from = self.table.routes()[first].label();
                metrics::record_redirect(&from);
                tracing::debug!(
                    from = %location.path,
                    to = %path,
                    route = %from,
                    "Following redirect"
                );
                (path.clone(), params.clone(), Some(location.path.clone()))
            }
            None => {
                let params = route
                    .pattern()
                    .matches(&location.path, &self.options)
                    .unwrap_or_default();
                (location.path.clone(), params, None)
            }
        };

        let outcome = if route.pattern().is_catch_all() { "fallback" } else { "matched" };
        metrics::record_resolution(&route.label(), outcome);
        tracing::debug!(
            path = %location.path,
            route = %route.label(),
            view = plan.view.id(),
            lazy = plan.view.is_lazy(),
            outcome,
            "Resolved route"
        );

        ResolvedRoute {
            path,
            matched: route.pattern().to_string(),
            name: route.name().map(str::to_string),
            view: plan.view.clone(),
            params,
            query: location.query,
            raw_query: location.raw_query,
            hash: location.hash,
            redirected_from,
        }
    }

    /// Literal path of a named route.
    pub fn path_for(&self, name: &str) -> RouteResult<&str> {
        let index = self
            .table
            .index_of_name(name)
            .ok_or_else(|| RouteError::UnknownRouteName(name.to_string()))?;
        self.table.routes()[index]
            .pattern()
            .literal()
            .ok_or_else(|| RouteError::NotLiteral(name.to_string()))
    }

    /// Resolve a named route.
    pub fn resolve_named(&self, name: &str) -> RouteResult<ResolvedRoute> {
        let path = self.path_for(name)?;
        Ok(self.resolve(path))
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        self.table.routes()
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::table::RedirectRef;
    use crate::view::View;

    #[derive(Debug)]
    struct Stub(&'static str);

    impl View for Stub {
        fn id(&self) -> &str {
            self.0
        }

        fn render(&self, _route: &ResolvedRoute) -> String {
            String::new()
        }
    }

    fn view(id: &'static str) -> ViewRef {
        ViewRef::from_view(Stub(id))
    }

    fn site() -> Router {
        Router::new(
            RouteTable::new(vec![
                RouteDefinition::view("/", view("Home")).unwrap().named("Home"),
                RouteDefinition::redirect("/:pathMatch(.*)*", RedirectRef::Path("/".into())).unwrap(),
            ])
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_match_path_single_step() {
        let router = site();

        match router.match_path("/unknown/thing") {
            RouteMatch::Redirect { to, .. } => assert_eq!(to, "/"),
            other => panic!("expected redirect, got {:?}", other),
        }
        match router.match_path("/") {
            RouteMatch::View { view, .. } => assert_eq!(view.id(), "Home"),
            other => panic!("expected view, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_follows_redirect() {
        let resolved = site().resolve("/unknown/thing");
        assert_eq!(resolved.view.id(), "Home");
        assert_eq!(resolved.path, "/");
        assert_eq!(resolved.redirected_from.as_deref(), Some("/unknown/thing"));
        assert!(resolved.params.is_empty());
    }

    #[test]
    fn test_redirect_keeps_query_and_hash() {
        let resolved = site().resolve("/old?tab=2#top");
        assert_eq!(resolved.path, "/");
        assert_eq!(resolved.query, vec![("tab".to_string(), "2".to_string())]);
        assert_eq!(resolved.hash.as_deref(), Some("top"));
        assert_eq!(resolved.full_path(), "/?tab=2#top");
    }

    #[test]
    fn test_full_path_replays_query_as_written() {
        let resolved = site().resolve("/?flag&q=a+b");
        assert_eq!(resolved.full_path(), "/?flag&q=a+b");
        assert_eq!(
            resolved.query,
            vec![
                ("flag".to_string(), String::new()),
                ("q".to_string(), "a b".to_string()),
            ]
        );
    }

    #[test]
    fn test_first_declared_wins() {
        let router = Router::new(
            RouteTable::new(vec![
                RouteDefinition::view("/dup", view("First")).unwrap(),
                RouteDefinition::view("/dup", view("Second")).unwrap(),
                RouteDefinition::view("/:pathMatch(.*)*", view("NotFound")).unwrap(),
            ])
            .unwrap(),
        )
        .unwrap();
        assert_eq!(router.resolve("/dup").view.id(), "First");
    }

    #[test]
    fn test_redirect_chain() {
        let router = Router::new(
            RouteTable::new(vec![
                RouteDefinition::view("/", view("Home")).unwrap(),
                RouteDefinition::redirect("/a", RedirectRef::Path("/b".into())).unwrap(),
                RouteDefinition::redirect("/b", RedirectRef::Path("/".into())).unwrap(),
                RouteDefinition::view("/:pathMatch(.*)*", view("NotFound")).unwrap(),
            ])
            .unwrap(),
        )
        .unwrap();

        let resolved = router.resolve("/a");
        assert_eq!(resolved.view.id(), "Home");
        assert_eq!(resolved.redirected_from.as_deref(), Some("/a"));
    }

    #[test]
    fn test_redirect_into_fallback_captures() {
        let router = Router::new(
            RouteTable::new(vec![
                RouteDefinition::redirect("/legacy", RedirectRef::Path("/gone/page".into())).unwrap(),
                RouteDefinition::view("/:pathMatch(.*)*", view("NotFound")).unwrap(),
            ])
            .unwrap(),
        )
        .unwrap();

        let resolved = router.resolve("/legacy");
        assert_eq!(resolved.view.id(), "NotFound");
        assert_eq!(resolved.path, "/gone/page");
        assert_eq!(resolved.params.len(), 1);
    }

    #[test]
    fn test_redirect_cycle_rejected() {
        let table = RouteTable::new(vec![
            RouteDefinition::redirect("/a", RedirectRef::Path("/b".into())).unwrap(),
            RouteDefinition::redirect("/b", RedirectRef::Path("/a".into())).unwrap(),
            RouteDefinition::view("/:pathMatch(.*)*", view("NotFound")).unwrap(),
        ])
        .unwrap();
        assert!(matches!(
            Router::new(table).unwrap_err(),
            RouteError::RedirectCycle { .. }
        ));

        // Catch-all redirecting to a path it matches itself.
        let table = RouteTable::new(vec![
            RouteDefinition::view("/", view("Home")).unwrap(),
            RouteDefinition::redirect("/:pathMatch(.*)*", RedirectRef::Path("/missing".into()))
                .unwrap(),
        ])
        .unwrap();
        assert!(matches!(
            Router::new(table).unwrap_err(),
            RouteError::RedirectCycle { .. }
        ));
    }

    #[test]
    fn test_named_lookup() {
        let router = site();
        assert_eq!(router.path_for("Home").unwrap(), "/");
        assert_eq!(router.resolve_named("Home").unwrap().view.id(), "Home");
        assert_eq!(
            router.path_for("Missing").unwrap_err(),
            RouteError::UnknownRouteName("Missing".into())
        );
    }

    #[test]
    fn test_named_catch_all_is_not_literal() {
        let router = Router::new(
            RouteTable::new(vec![
                RouteDefinition::view("/", view("Home")).unwrap(),
                RouteDefinition::view("/:pathMatch(.*)*", view("NotFound"))
                    .unwrap()
                    .named("NotFound"),
            ])
            .unwrap(),
        )
        .unwrap();
        assert_eq!(
            router.path_for("NotFound").unwrap_err(),
            RouteError::NotLiteral("NotFound".into())
        );
    }

    #[test]
    fn test_relaxed_options() {
        let table = RouteTable::new(vec![
            RouteDefinition::view("/GetUser", view("GetUser")).unwrap(),
            RouteDefinition::view("/:pathMatch(.*)*", view("NotFound")).unwrap(),
        ])
        .unwrap();
        let router = Router::with_options(
            table,
            MatchOptions {
                case_sensitive: false,
                strict: false,
            },
        )
        .unwrap();

        assert_eq!(router.resolve("/getuser/").view.id(), "GetUser");
    }
}
