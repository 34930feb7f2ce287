//! Shared helpers for integration tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use view_router::apps;
use view_router::config::{Preset, RouteConfig};
use view_router::routing::{RouteTable, Router};
use view_router::view::{LoadError, ViewRegistry};

/// Router for a built-in preset with its default table.
pub fn preset_router(preset: Preset) -> Router {
    let table = RouteTable::from_config(&apps::routes(preset), &apps::views(preset)).unwrap();
    Router::new(table).unwrap()
}

/// Admin views whose lazy loaders count their calls.
#[allow(dead_code)]
pub fn counting_admin_views(calls: Arc<AtomicU32>) -> ViewRegistry {
    apps::admin::LAZY_VIEWS.iter().fold(apps::admin::views(), |registry, &id| {
        let calls = calls.clone();
        registry.with_lazy(id, move || {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { apps::admin::load_module(id) }
        })
    })
}

/// Admin views where `broken` fails on its first load attempt.
#[allow(dead_code)]
pub fn flaky_views(broken: &'static str, attempts: Arc<AtomicU32>) -> ViewRegistry {
    apps::admin::views().with_lazy(broken, move || {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst);
        async move {
            if attempt == 0 {
                Err(LoadError::Failed {
                    view: broken.to_string(),
                    reason: "network error".to_string(),
                })
            } else {
                apps::admin::load_module(broken)
            }
        }
    })
}

#[allow(dead_code)]
pub fn admin_routes() -> Vec<RouteConfig> {
    apps::admin::routes()
}

#[allow(dead_code)]
pub fn router_with(views: &ViewRegistry) -> Router {
    Router::new(RouteTable::from_config(&admin_routes(), views).unwrap()).unwrap()
}
