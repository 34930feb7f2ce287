//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check each route has exactly one target
//! - Check referential integrity (redirect names exist)
//! - Check table shape (unique names, one catch-all, last)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - View ids are checked later, against the preset's registry

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{RouteConfig, RouterConfig};
use crate::routing::{Pattern, RouteError};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown log level `{0}`")]
    LogLevel(String),

    #[error("app.mount must not be empty")]
    EmptyMount,

    #[error("route #{index}: {source}")]
    Route { index: usize, source: RouteError },

    #[error("route #{index} (`{path}`): needs exactly one of view, redirect or redirect_name")]
    Target { index: usize, path: String },

    #[error("route table has no catch-all entry")]
    MissingCatchAll,

    #[error("redirect_name `{0}` does not name a route")]
    UnknownRedirectName(String),
}

/// Validate a parsed config, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }
    if config.app.mount.trim().is_empty() {
        errors.push(ValidationError::EmptyMount);
    }
    if !config.routes.is_empty() {
        validate_routes(&config.routes, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_routes(routes: &[RouteConfig], errors: &mut Vec<ValidationError>) {
    let last = routes.len() - 1;
    let mut names = HashSet::new();
    let mut has_catch_all = false;

    for (index, route) in routes.iter().enumerate() {
        match Pattern::parse(&route.path) {
            Ok(pattern) if pattern.is_catch_all() => {
                has_catch_all = true;
                if index != last {
                    errors.push(ValidationError::Route {
                        index,
                        source: RouteError::CatchAllNotLast {
                            pattern: route.path.clone(),
                            position: index,
                        },
                    });
                }
            }
            Ok(_) => {}
            Err(source) => errors.push(ValidationError::Route { index, source }),
        }

        let targets = [&route.view, &route.redirect, &route.redirect_name]
            .iter()
            .filter(|t| t.is_some())
            .count();
        if targets != 1 {
            errors.push(ValidationError::Target {
                index,
                path: route.path.clone(),
            });
        }

        if let Some(to) = &route.redirect {
            if !to.starts_with('/') || to.contains(['?', '#']) {
                errors.push(ValidationError::Route {
                    index,
                    source: RouteError::InvalidRedirect(to.clone()),
                });
            }
        }

        if let Some(name) = &route.name {
            if !names.insert(name.as_str()) {
                errors.push(ValidationError::Route {
                    index,
                    source: RouteError::DuplicateName(name.clone()),
                });
            }
        }
    }

    if !has_catch_all {
        errors.push(ValidationError::MissingCatchAll);
    }

    for route in routes {
        if let Some(name) = &route.redirect_name {
            if !names.contains(name.as_str()) {
                errors.push(ValidationError::UnknownRedirectName(name.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catch_all() -> RouteConfig {
        RouteConfig::redirect("/:pathMatch(.*)*", "/")
    }

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&RouterConfig::default()).is_ok());
    }

    #[test]
    fn test_valid_table() {
        let mut config = RouterConfig::default();
        config.routes = vec![RouteConfig::view("/", Some("Home"), "Home"), catch_all()];
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RouterConfig::default();
        config.observability.log_level = "loud".into();
        config.app.mount = " ".into();
        config.routes = vec![
            catch_all(),
            RouteConfig::view("/", Some("Home"), "Home"),
            RouteConfig::view("/again", Some("Home"), "Home"),
            RouteConfig {
                path: "/both".into(),
                name: None,
                view: Some("Home".into()),
                redirect: Some("/".into()),
                redirect_name: None,
            },
        ];

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::LogLevel("loud".into())));
        assert!(errors.contains(&ValidationError::EmptyMount));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::Route { source: RouteError::CatchAllNotLast { .. }, .. }
        )));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::Route { source: RouteError::DuplicateName(_), .. }
        )));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::Target { index: 3, .. })));
    }

    #[test]
    fn test_missing_catch_all_and_bad_redirect() {
        let mut config = RouterConfig::default();
        config.routes = vec![
            RouteConfig::view("/", Some("Home"), "Home"),
            RouteConfig::redirect("/old", "home"),
            RouteConfig {
                path: "/legacy".into(),
                name: None,
                view: None,
                redirect: None,
                redirect_name: Some("Gone".into()),
            },
        ];

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::MissingCatchAll));
        assert!(errors.contains(&ValidationError::UnknownRedirectName("Gone".into())));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::Route { source: RouteError::InvalidRedirect(_), .. }
        )));
    }
}
