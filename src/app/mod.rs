//! Application shell.
//!
//! # Data Flow
//! ```text
//! navigate("/GetUser")
//!     → Router::resolve (pure, always succeeds)
//!     → ViewRef::load (lazy views fetched once, then cached)
//!     → History::push (final path, after redirects)
//!     → View::render → Document → RenderSurface
//!     → Extension::after_navigate
//! ```
//!
//! # Design Decisions
//! - Composition is explicit: `ApplicationBuilder::new(router)` takes the
//!   router, extensions and surface once at mount, nothing is global
//! - A failed view load aborts the navigation; history and surface are
//!   left as they were

pub mod extension;
pub mod history;
pub mod surface;

use std::sync::Arc;

use thiserror::Error;

use crate::routing::{ResolvedRoute, Router};
use crate::view::LoadError;

pub use extension::{Assets, Extension, NavigationLog, Stylesheets};
pub use history::History;
pub use surface::{Document, MemorySurface, RenderSurface, StdoutSurface};

/// Errors from mounting or navigating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("mount point must not be empty")]
    EmptyMount,

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Collects extensions before mounting.
pub struct ApplicationBuilder {
    router: Arc<Router>,
    title: String,
    extensions: Vec<Box<dyn Extension>>,
}

impl ApplicationBuilder {
    pub fn new(router: Arc<Router>) -> Self {
        Self {
            router,
            title: String::new(),
            extensions: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add an extension. A second extension with the same name is ignored.
    pub fn extension(mut self, extension: impl Extension + 'static) -> Self {
        if self.extensions.iter().any(|e| e.name() == extension.name()) {
            tracing::warn!(extension = extension.name(), "Extension already installed");
            return self;
        }
        self.extensions.push(Box::new(extension));
        self
    }

    /// Install extensions and attach to `surface` at `mount`.
    pub fn mount<S: RenderSurface>(self, mount: &str, surface: S) -> Result<Application<S>, AppError> {
        if mount.trim().is_empty() {
            return Err(AppError::EmptyMount);
        }

        let mut assets = Assets::default();
        for extension in &self.extensions {
            extension.install(&mut assets);
            tracing::debug!(extension = extension.name(), "Extension installed");
        }

        tracing::info!(
            mount,
            routes = self.router.routes().len(),
            extensions = self.extensions.len(),
            "Application mounted"
        );

        Ok(Application {
            router: self.router,
            title: self.title,
            mount: mount.to_string(),
            assets,
            extensions: self.extensions,
            surface,
            history: History::new(),
        })
    }
}

/// A mounted application.
pub struct Application<S> {
    router: Arc<Router>,
    title: String,
    mount: String,
    assets: Assets,
    extensions: Vec<Box<dyn Extension>>,
    surface: S,
    history: History,
}

impl<S: RenderSurface> Application<S> {
    /// Navigate to `target`, adding a history entry.
    pub async fn navigate(&mut self, target: &str) -> Result<ResolvedRoute, AppError> {
        let route = self.router.resolve(target);
        self.show(&route).await?;
        self.history.push(route.full_path());
        Ok(route)
    }

    /// Navigate to `target`, replacing the current history entry.
    pub async fn replace(&mut self, target: &str) -> Result<ResolvedRoute, AppError> {
        let route = self.router.resolve(target);
        self.show(&route).await?;
        self.history.replace(route.full_path());
        Ok(route)
    }

    /// Go back one entry. `Ok(None)` when already at the first entry.
    pub async fn back(&mut self) -> Result<Option<ResolvedRoute>, AppError> {
        self.traverse(-1).await
    }

    /// Go forward one entry. `Ok(None)` when already at the last entry.
    pub async fn forward(&mut self) -> Result<Option<ResolvedRoute>, AppError> {
        self.traverse(1).await
    }

    async fn traverse(&mut self, delta: isize) -> Result<Option<ResolvedRoute>, AppError> {
        let Some(location) = self.history.go(delta).map(str::to_string) else {
            return Ok(None);
        };
        let route = self.router.resolve(&location);
        if let Err(e) = self.show(&route).await {
            self.history.go(-delta);
            return Err(e);
        }
        Ok(Some(route))
    }

    async fn show(&mut self, route: &ResolvedRoute) -> Result<(), AppError> {
        let view = route.view.load().await?;
        self.surface.render(Document {
            mount: self.mount.clone(),
            title: self.title.clone(),
            stylesheets: self.assets.stylesheets().to_vec(),
            body: view.render(route),
        });
        for extension in &self.extensions {
            extension.after_navigate(route);
        }
        Ok(())
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn mount_point(&self) -> &str {
        &self.mount
    }
}
