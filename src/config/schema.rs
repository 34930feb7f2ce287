//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

use crate::routing::MatchOptions;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Which application this table belongs to and where it mounts.
    pub app: AppConfig,

    /// Literal matching behaviour.
    pub matching: MatchOptions,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Route table in declared order. Empty means the preset's built-in table.
    pub routes: Vec<RouteConfig>,
}

/// Built-in applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Generic site: unknown paths redirect home.
    #[default]
    Site,
    /// Student admin panel: unknown paths render a not-found view.
    Admin,
}

/// Application shell configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Preset whose views back the route table.
    pub preset: Preset,

    /// Mount point selector for the render surface.
    pub mount: String,

    /// Document title. Empty means the preset's title.
    pub title: String,

    /// Stylesheets installed by the UI component library extension.
    pub stylesheets: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preset: Preset::Site,
            mount: "#app".to_string(),
            title: String::new(),
            stylesheets: Vec::new(),
        }
    }
}

/// One route table entry.
///
/// Exactly one of `view`, `redirect` or `redirect_name` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Literal path or `/:pathMatch(.*)*`.
    pub path: String,

    /// Optional unique route name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// View id to render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,

    /// Path to redirect to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,

    /// Name of the route to redirect to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_name: Option<String>,
}

impl RouteConfig {
    /// Entry rendering `view`.
    pub fn view(path: &str, name: Option<&str>, view: &str) -> Self {
        Self {
            path: path.to_string(),
            name: name.map(str::to_string),
            view: Some(view.to_string()),
            redirect: None,
            redirect_name: None,
        }
    }

    /// Entry redirecting to `to`.
    pub fn redirect(path: &str, to: &str) -> Self {
        Self {
            path: path.to_string(),
            name: None,
            view: None,
            redirect: Some(to.to_string()),
            redirect_name: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
