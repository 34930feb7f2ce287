//! Application extensions.
//!
//! An extension is installed once when the application mounts and may
//! observe each completed navigation.

use crate::routing::ResolvedRoute;

/// Shared assets extensions contribute to every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assets {
    stylesheets: Vec<String>,
}

impl Assets {
    pub fn add_stylesheet(&mut self, href: impl Into<String>) {
        let href = href.into();
        if !self.stylesheets.contains(&href) {
            self.stylesheets.push(href);
        }
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }
}

/// Hook points available to extensions.
pub trait Extension: Send + Sync {
    /// Unique name. An extension is installed at most once per name.
    fn name(&self) -> &str;

    /// Called once at mount.
    fn install(&self, _assets: &mut Assets) {}

    /// Called after a navigation rendered successfully.
    fn after_navigate(&self, _route: &ResolvedRoute) {}
}

/// A UI component library: contributes its stylesheets.
#[derive(Debug, Clone)]
pub struct Stylesheets {
    name: String,
    hrefs: Vec<String>,
}

impl Stylesheets {
    pub fn new(name: impl Into<String>, hrefs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            hrefs: hrefs.into_iter().map(Into::into).collect(),
        }
    }
}

impl Extension for Stylesheets {
    fn name(&self) -> &str {
        &self.name
    }

    fn install(&self, assets: &mut Assets) {
        for href in &self.hrefs {
            assets.add_stylesheet(href.clone());
        }
    }
}

/// Logs every completed navigation.
#[derive(Debug, Clone, Default)]
pub struct NavigationLog;

impl Extension for NavigationLog {
    fn name(&self) -> &str {
        "navigation-log"
    }

    fn after_navigate(&self, route: &ResolvedRoute) {
        tracing::info!(
            path = %route.path,
            view = route.view.id(),
            redirected_from = ?route.redirected_from,
            "Navigated"
        );
    }
}
