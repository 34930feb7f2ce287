//! Built-in applications.
//!
//! Each preset pairs a view registry with its default route table. The two
//! tables differ only in their fallback: the site redirects unknown paths
//! home, the admin panel renders a not-found view.

pub mod admin;
pub mod pages;
pub mod site;

use crate::config::{Preset, RouteConfig};
use crate::view::ViewRegistry;

/// Views for `preset`.
pub fn views(preset: Preset) -> ViewRegistry {
    match preset {
        Preset::Site => site::views(),
        Preset::Admin => admin::views(),
    }
}

/// Default route table for `preset`.
pub fn routes(preset: Preset) -> Vec<RouteConfig> {
    match preset {
        Preset::Site => site::routes(),
        Preset::Admin => admin::routes(),
    }
}

/// Document title used when config names none.
pub fn title(preset: Preset) -> &'static str {
    match preset {
        Preset::Site => site::TITLE,
        Preset::Admin => admin::TITLE,
    }
}

/// Stylesheets shipped with `preset` when config names none.
pub fn stylesheets(preset: Preset) -> Vec<String> {
    match preset {
        Preset::Site => Vec::new(),
        Preset::Admin => vec![admin::STYLESHEET.to_string()],
    }
}
